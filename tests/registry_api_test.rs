//! Integration tests for the registry public API.

use lau::registry::{ProviderKey, Registry, TemplateId};
use lau::LauError;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn corpus() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "security/redteam-expert/README.md", "# Red team\n");
    write(root, "security/redteam-expert/default/AGENTS.md", "d");
    write(root, "security/redteam-expert/claude/CLAUDE.md", "c");
    write(root, "pythonic-expert/README.md", "Python.\n");
    write(root, "pythonic-expert/default/AGENTS.md", "d");
    write(root, "pythonic-expert/openai/AGENTS.md", "o");
    write(root, "pythonic-expert/windsurf/.windsurfrules", "w");
    write(root, "no-default/README.md", "Broken.\n");
    write(root, "no-default/cursor/.cursorrules", "c");
    temp
}

#[test]
fn providers_of_always_includes_default() {
    let temp = corpus();
    let registry = Registry::new(temp.path()).unwrap();

    for name in registry.names().unwrap() {
        let template = registry.resolve(&name).unwrap();
        assert!(registry.providers_of(&template).contains(&ProviderKey::Default));
    }
}

#[test]
fn qualified_and_bare_resolve_to_same_template() {
    let temp = corpus();
    let registry = Registry::new(temp.path()).unwrap();

    let bare = registry.resolve("redteam-expert").unwrap();
    let qualified = registry.resolve("security/redteam-expert").unwrap();

    assert_eq!(bare.id, qualified.id);
    assert_eq!(bare.id, TemplateId::qualified("security", "redteam-expert"));
    assert_eq!(bare.description, "Red team");
}

#[test]
fn listing_excludes_template_without_default() {
    let temp = corpus();
    let registry = Registry::new(temp.path()).unwrap();

    let listing = registry.list_templates().unwrap();

    let ids: Vec<String> = listing.templates.iter().map(|t| t.id.to_string()).collect();
    assert_eq!(ids, ["pythonic-expert", "security/redteam-expert"]);
    assert_eq!(listing.warnings.len(), 1);
    assert_eq!(listing.warnings[0].id, TemplateId::bare("no-default"));
}

#[test]
fn lazy_iteration_yields_warnings_in_place() {
    let temp = corpus();
    let registry = Registry::new(temp.path()).unwrap();

    let items: Vec<_> = registry.iter_templates().unwrap().collect();

    assert_eq!(items.len(), 3);
    assert!(items[0].is_err());
    assert!(items[1].is_ok());
}

#[test]
fn malformed_identifier_is_rejected() {
    let temp = corpus();
    let registry = Registry::new(temp.path()).unwrap();

    let err = registry.resolve("a/b/c").unwrap_err();

    assert!(matches!(err, LauError::InvalidIdentifier { .. }));
}

#[test]
fn registry_requires_existing_corpus() {
    let temp = TempDir::new().unwrap();
    let err = Registry::new(temp.path().join("missing")).unwrap_err();
    assert!(matches!(err, LauError::CorpusNotFound { .. }));
}
