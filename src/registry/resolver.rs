//! Template lookup over a corpus root.
//!
//! The registry is rebuilt from disk on every call; nothing is cached, so the
//! corpus on disk is always the single source of truth.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::{LauError, Result};
use crate::registry::local::{
    discover_candidates, load_candidate, Candidate, TemplateWarning, Templates,
};
use crate::registry::provider::ProviderKey;
use crate::registry::template::{Template, TemplateId};

const MAX_SUGGESTIONS: usize = 3;

/// Template registry rooted at an explicit corpus directory.
#[derive(Debug, Clone)]
pub struct Registry {
    corpus_root: PathBuf,
}

/// Result of listing a corpus: valid templates plus one warning per
/// rejected candidate.
#[derive(Debug, Default)]
pub struct Listing {
    pub templates: Vec<Template>,
    pub warnings: Vec<TemplateWarning>,
}

impl Registry {
    /// Create a registry for a corpus root.
    pub fn new(corpus_root: impl Into<PathBuf>) -> Result<Self> {
        let corpus_root = corpus_root.into();
        if !corpus_root.is_dir() {
            return Err(LauError::CorpusNotFound { path: corpus_root });
        }
        Ok(Self { corpus_root })
    }

    /// The corpus root this registry reads from.
    pub fn corpus_root(&self) -> &Path {
        &self.corpus_root
    }

    /// Lazily iterate templates in identifier order.
    ///
    /// Each call starts a fresh scan of the corpus.
    pub fn iter_templates(&self) -> Result<Templates> {
        Ok(Templates::new(discover_candidates(&self.corpus_root)?))
    }

    /// Collect all valid templates and the warnings for invalid ones.
    pub fn list_templates(&self) -> Result<Listing> {
        let mut listing = Listing::default();

        for item in self.iter_templates()? {
            match item {
                Ok(template) => listing.templates.push(template),
                Err(warning) => {
                    tracing::debug!("{}", warning);
                    listing.warnings.push(warning);
                }
            }
        }

        Ok(listing)
    }

    /// Resolve an identifier to a single valid template.
    ///
    /// A qualified identifier must match exactly. A bare name matches every
    /// template with that name in any category; more than one valid match is
    /// an error listing the qualified candidates.
    pub fn resolve(&self, identifier: &str) -> Result<Template> {
        let id = TemplateId::parse(identifier)?;
        let candidates = discover_candidates(&self.corpus_root)?;

        let matching: Vec<&Candidate> = candidates
            .iter()
            .filter(|c| {
                if id.is_qualified() {
                    c.id == id
                } else {
                    c.id.name == id.name
                }
            })
            .collect();

        if matching.is_empty() {
            return Err(LauError::TemplateNotFound {
                identifier: identifier.to_string(),
                suggestions: suggest(&id, &candidates),
            });
        }

        let mut valid = Vec::new();
        let mut first_warning = None;
        for candidate in matching {
            match load_candidate(candidate) {
                Ok(template) => valid.push(template),
                Err(warning) => {
                    tracing::debug!("{}", warning);
                    first_warning.get_or_insert(warning);
                }
            }
        }

        match valid.len() {
            0 => {
                let warning = first_warning.ok_or_else(|| LauError::TemplateNotFound {
                    identifier: identifier.to_string(),
                    suggestions: Vec::new(),
                })?;
                Err(LauError::InvalidTemplate {
                    identifier: warning.id.to_string(),
                    reason: warning.reason,
                })
            }
            1 => {
                let template = valid.remove(0);
                tracing::debug!("Resolved '{}' to {}", identifier, template.root.display());
                Ok(template)
            }
            _ => Err(LauError::AmbiguousIdentifier {
                identifier: identifier.to_string(),
                candidates: valid.iter().map(|t| t.id.to_string()).collect(),
            }),
        }
    }

    /// Providers physically present for a template, always including `default`.
    pub fn providers_of(&self, template: &Template) -> BTreeSet<ProviderKey> {
        let mut providers = template.providers();
        providers.insert(ProviderKey::Default);
        providers
    }

    /// Qualified identifiers of all valid templates.
    pub fn names(&self) -> Result<Vec<String>> {
        Ok(self
            .iter_templates()?
            .filter_map(|item| item.ok())
            .map(|t| t.id.to_string())
            .collect())
    }
}

fn suggest(id: &TemplateId, candidates: &[Candidate]) -> Vec<String> {
    let wanted = id.name.to_lowercase();
    candidates
        .iter()
        .filter(|c| {
            let name = c.id.name.to_lowercase();
            name.contains(&wanted) || wanted.contains(&name)
        })
        .take(MAX_SUGGESTIONS)
        .map(|c| c.id.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn corpus() -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write(root, "security/redteam-expert/README.md", "# Redteam\n\nAdversarial reviewer.");
        write(root, "security/redteam-expert/default/AGENTS.md", "default");
        write(root, "security/redteam-expert/claude/CLAUDE.md", "claude");
        write(root, "pythonic-expert/README.md", "# Pythonic\n\nIdiomatic Python.");
        write(root, "pythonic-expert/default/AGENTS.md", "default");
        write(root, "pythonic-expert/openai/AGENTS.md", "openai");
        write(root, "pythonic-expert/windsurf/.windsurfrules", "windsurf");
        write(root, "data/expert/README.md", "# Data");
        write(root, "data/expert/default/AGENTS.md", "d");
        write(root, "ops/expert/README.md", "# Ops");
        write(root, "ops/expert/default/AGENTS.md", "o");
        temp
    }

    #[test]
    fn registry_requires_existing_corpus() {
        let temp = TempDir::new().unwrap();
        let result = Registry::new(temp.path().join("missing"));
        assert!(matches!(result, Err(LauError::CorpusNotFound { .. })));
    }

    #[test]
    fn resolves_bare_name_inside_category() {
        let temp = corpus();
        let registry = Registry::new(temp.path()).unwrap();
        let template = registry.resolve("redteam-expert").unwrap();
        assert_eq!(template.id, TemplateId::qualified("security", "redteam-expert"));
        assert_eq!(template.description, "Adversarial reviewer.");
    }

    #[test]
    fn resolves_qualified_name() {
        let temp = corpus();
        let registry = Registry::new(temp.path()).unwrap();
        let template = registry.resolve("ops/expert").unwrap();
        assert_eq!(template.id, TemplateId::qualified("ops", "expert"));
    }

    #[test]
    fn qualified_name_must_match_category() {
        let temp = corpus();
        let registry = Registry::new(temp.path()).unwrap();
        let result = registry.resolve("data/redteam-expert");
        assert!(matches!(result, Err(LauError::TemplateNotFound { .. })));
    }

    #[test]
    fn unknown_template_suggests_close_names() {
        let temp = corpus();
        let registry = Registry::new(temp.path()).unwrap();
        match registry.resolve("redteam") {
            Err(LauError::TemplateNotFound {
                identifier,
                suggestions,
            }) => {
                assert_eq!(identifier, "redteam");
                assert_eq!(suggestions, vec!["security/redteam-expert".to_string()]);
            }
            other => panic!("expected TemplateNotFound, got {:?}", other),
        }
    }

    #[test]
    fn bare_name_in_two_categories_is_ambiguous() {
        let temp = corpus();
        let registry = Registry::new(temp.path()).unwrap();
        match registry.resolve("expert") {
            Err(LauError::AmbiguousIdentifier { candidates, .. }) => {
                assert_eq!(candidates, vec!["data/expert", "ops/expert"]);
            }
            other => panic!("expected AmbiguousIdentifier, got {:?}", other),
        }
    }

    #[test]
    fn invalid_duplicate_does_not_cause_ambiguity() {
        let temp = corpus();
        write(temp.path(), "misc/pythonic-expert/README.md", "# Broken");
        write(temp.path(), "misc/pythonic-expert/claude/CLAUDE.md", "c");

        let registry = Registry::new(temp.path()).unwrap();
        let template = registry.resolve("pythonic-expert").unwrap();
        assert_eq!(template.id, TemplateId::bare("pythonic-expert"));
    }

    #[test]
    fn resolving_only_invalid_match_reports_reason() {
        let temp = corpus();
        write(temp.path(), "broken/README.md", "# Broken");
        write(temp.path(), "broken/claude/CLAUDE.md", "c");

        let registry = Registry::new(temp.path()).unwrap();
        let result = registry.resolve("broken");
        assert!(matches!(result, Err(LauError::InvalidTemplate { .. })));
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
    fn listing_excludes_template_without_default() {
        let temp = corpus();
        write(temp.path(), "no-default/README.md", "# Missing default");
        write(temp.path(), "no-default/claude/CLAUDE.md", "c");

        let registry = Registry::new(temp.path()).unwrap();
        let listing = registry.list_templates().unwrap();

        assert!(listing
            .templates
            .iter()
            .all(|t| t.id != TemplateId::bare("no-default")));
        assert_eq!(listing.warnings.len(), 1);
        assert_eq!(listing.warnings[0].id, TemplateId::bare("no-default"));
    }

    #[test]
    fn listing_is_sorted_and_restartable() {
        let temp = corpus();
        let registry = Registry::new(temp.path()).unwrap();
        let first = registry.names().unwrap();
        let second = registry.names().unwrap();
        assert_eq!(
            first,
            vec![
                "pythonic-expert",
                "data/expert",
                "ops/expert",
                "security/redteam-expert"
            ]
        );
        assert_eq!(first, second);
    }
}
