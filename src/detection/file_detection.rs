//! Marker-file detection.
//!
//! Providers are inferred from files and directories their tools leave in a
//! project. Rules are checked in order and each provider is reported once,
//! for the first of its markers that exists.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::types::{Detection, ProviderDetector};
use crate::registry::ProviderKey;

/// What kind of filesystem entry a marker must be.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    File,
    Directory,
    #[default]
    Any,
}

/// One `(marker path, provider)` rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerRule {
    /// Path relative to the destination root.
    pub path: String,
    /// Provider signalled when the marker exists.
    pub provider: ProviderKey,
    /// Required entry kind.
    #[serde(default)]
    pub kind: MarkerKind,
}

impl MarkerRule {
    /// Rule matching a regular file.
    pub fn file(path: &str, provider: ProviderKey) -> Self {
        Self {
            path: path.to_string(),
            provider,
            kind: MarkerKind::File,
        }
    }

    /// Rule matching a directory.
    pub fn dir(path: &str, provider: ProviderKey) -> Self {
        Self {
            path: path.to_string(),
            provider,
            kind: MarkerKind::Directory,
        }
    }

    /// Check whether the marker exists under `root`.
    pub fn matches(&self, root: &Path) -> bool {
        let target = root.join(&self.path);
        match self.kind {
            MarkerKind::File => target.is_file(),
            MarkerKind::Directory => target.is_dir(),
            MarkerKind::Any => target.exists(),
        }
    }
}

/// Detector driven by an ordered list of marker rules.
#[derive(Debug, Clone)]
pub struct MarkerDetector {
    rules: Vec<MarkerRule>,
}

impl Default for MarkerDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkerDetector {
    /// Detector with the built-in rules.
    pub fn new() -> Self {
        Self {
            rules: builtin_rules(),
        }
    }

    /// Detector with exactly the given rules.
    pub fn with_rules(rules: Vec<MarkerRule>) -> Self {
        Self { rules }
    }

    /// Put extra rules ahead of the current ones.
    pub fn prepend(mut self, extra: Vec<MarkerRule>) -> Self {
        let mut rules = extra;
        rules.append(&mut self.rules);
        self.rules = rules;
        self
    }

    /// The rules in evaluation order.
    pub fn rules(&self) -> &[MarkerRule] {
        &self.rules
    }
}

impl ProviderDetector for MarkerDetector {
    fn detect(&self, destination: &Path) -> Vec<Detection> {
        let mut found: Vec<Detection> = Vec::new();

        for rule in &self.rules {
            if found.iter().any(|d| d.provider == rule.provider) {
                continue;
            }
            if rule.matches(destination) {
                tracing::debug!("Marker {} signals provider {}", rule.path, rule.provider);
                found.push(Detection::new(rule.provider.clone(), &rule.path));
            }
        }

        found
    }
}

/// Built-in marker rules in priority order.
pub fn builtin_rules() -> Vec<MarkerRule> {
    vec![
        MarkerRule::file("CLAUDE.md", ProviderKey::Claude),
        MarkerRule::dir(".claude", ProviderKey::Claude),
        MarkerRule::file(".cursorrules", ProviderKey::Cursor),
        MarkerRule::dir(".cursor", ProviderKey::Cursor),
        MarkerRule::file(".windsurfrules", ProviderKey::Windsurf),
        MarkerRule::dir(".windsurf", ProviderKey::Windsurf),
        MarkerRule::file("AGENTS.md", ProviderKey::OpenAi),
        MarkerRule::dir(".codex", ProviderKey::OpenAi),
        MarkerRule::file("GEMINI.md", ProviderKey::Antigravity),
        MarkerRule::dir(".agent", ProviderKey::Antigravity),
    ]
}
