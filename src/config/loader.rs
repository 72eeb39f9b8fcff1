//! Configuration file discovery and loading.
//!
//! Merge order (later overrides earlier):
//! 1. User global config (`~/.lau/config.yml`)
//! 2. Project config (`.lau/config.yml`)
//!
//! Missing files are fine: an absent configuration is the default one.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::merger::merge_configs;
use crate::config::schema::LauConfig;
use crate::error::{LauError, Result};

/// Directory name used for user and project configuration.
pub const CONFIG_DIR: &str = ".lau";

/// Paths to configuration files in merge order.
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// User's global config: ~/.lau/config.yml
    pub user_global: Option<PathBuf>,

    /// Project config: .lau/config.yml
    pub project: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            user_global: dirs::home_dir()
                .and_then(|home| existing(home.join(CONFIG_DIR).join("config.yml"))),
            project: existing(project_root.join(CONFIG_DIR).join("config.yml")),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.user_global.iter().chain(self.project.iter()).collect()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    path.is_file().then_some(path)
}

/// Load a config file as a raw YAML value (for merging).
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| LauError::io(path, e))?;

    serde_yaml::from_str(&content).map_err(|e| LauError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a single config file without merging.
pub fn load_config_file(path: &Path) -> Result<LauConfig> {
    let value = load_config_value(path)?;
    parse_value(merge_configs(&[value]), path)
}

/// Load and merge the config files found in `paths`.
pub fn load_from_paths(paths: &ConfigPaths, project_root: &Path) -> Result<LauConfig> {
    let mut values = Vec::new();
    for path in paths.all_existing() {
        tracing::debug!("Loading config from {}", path.display());
        values.push(load_config_value(path)?);
    }

    let report_path = paths
        .project
        .clone()
        .unwrap_or_else(|| project_root.join(CONFIG_DIR).join("config.yml"));
    parse_value(merge_configs(&values), &report_path)
}

/// Load and merge all config files for a project.
///
/// # Errors
///
/// Returns `ConfigParseError` if any config file is invalid.
pub fn load_merged_config(project_root: &Path) -> Result<LauConfig> {
    load_from_paths(&ConfigPaths::discover(project_root), project_root)
}

/// Load config with an optional explicit file.
///
/// An explicit file is loaded alone; otherwise configs are discovered and
/// merged.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<LauConfig> {
    match config_override {
        Some(path) => load_config_file(path),
        None => load_merged_config(project_root),
    }
}

fn parse_value(value: serde_yaml::Value, path: &Path) -> Result<LauConfig> {
    serde_yaml::from_value(value).map_err(|e| LauError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Default corpus location: `~/.lau/templates`.
pub fn default_corpus_root() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join(CONFIG_DIR)
        .join("templates")
}

/// Decide which corpus root to use.
///
/// An explicit value (CLI flag or `LAU_CORPUS`) wins over the config file,
/// which wins over the default. Relative config paths resolve against the
/// project root.
pub fn resolve_corpus_root(
    explicit: Option<&Path>,
    config: &LauConfig,
    project_root: &Path,
) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    match &config.corpus {
        Some(path) if path.is_absolute() => path.clone(),
        Some(path) => project_root.join(path),
        None => default_corpus_root(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deploy::ConflictPolicy;
    use tempfile::TempDir;

    fn project_with_config(config: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(CONFIG_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.yml"), config).unwrap();
        temp
    }

    #[test]
    fn missing_config_is_default() {
        let temp = TempDir::new().unwrap();
        let paths = ConfigPaths::default();
        let config = load_from_paths(&paths, temp.path()).unwrap();
        assert_eq!(config.on_conflict, ConflictPolicy::Overwrite);
    }

    #[test]
    fn project_config_overrides_user_config() {
        let user = TempDir::new().unwrap();
        let user_config = user.path().join("config.yml");
        fs::write(&user_config, "on_conflict: skip\ncorpus: /user/corpus\n").unwrap();
        let project = project_with_config("on_conflict: abort\n");

        let paths = ConfigPaths {
            user_global: Some(user_config),
            project: Some(project.path().join(CONFIG_DIR).join("config.yml")),
        };
        let config = load_from_paths(&paths, project.path()).unwrap();

        assert_eq!(config.on_conflict, ConflictPolicy::Abort);
        assert_eq!(config.corpus, Some(PathBuf::from("/user/corpus")));
    }

    #[test]
    fn invalid_yaml_reports_path() {
        let project = project_with_config("on_conflict: [unclosed");
        let path = project.path().join(CONFIG_DIR).join("config.yml");
        match load_config_file(&path) {
            Err(LauError::ConfigParseError { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn explicit_config_file_is_loaded_alone() {
        let project = project_with_config("on_conflict: abort\n");
        let other = TempDir::new().unwrap();
        let explicit = other.path().join("lau.yml");
        fs::write(&explicit, "on_conflict: skip\n").unwrap();

        let config = load_config(project.path(), Some(&explicit)).unwrap();
        assert_eq!(config.on_conflict, ConflictPolicy::Skip);
    }

    #[test]
    fn corpus_precedence() {
        let project = Path::new("/work/app");
        let mut config = LauConfig::default();

        assert_eq!(
            resolve_corpus_root(Some(Path::new("/flag")), &config, project),
            PathBuf::from("/flag")
        );

        config.corpus = Some(PathBuf::from("vendor/templates"));
        assert_eq!(
            resolve_corpus_root(None, &config, project),
            PathBuf::from("/work/app/vendor/templates")
        );

        config.corpus = None;
        assert!(resolve_corpus_root(None, &config, project).ends_with(".lau/templates"));
    }
}
