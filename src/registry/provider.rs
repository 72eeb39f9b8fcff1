//! Provider keys.
//!
//! A provider is the AI agent tool a template's files are shaped for. The
//! known set is closed; any other subdirectory name in a template becomes a
//! [`ProviderKey::Custom`] provider.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Identifies a provider subtree within a template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ProviderKey {
    Claude,
    OpenAi,
    Cursor,
    Windsurf,
    Antigravity,
    /// The mandatory fallback subtree.
    Default,
    /// A subtree with a name outside the known set.
    Custom(String),
}

impl ProviderKey {
    /// All known providers, excluding `default`.
    pub const KNOWN: [ProviderKey; 5] = [
        ProviderKey::Claude,
        ProviderKey::OpenAi,
        ProviderKey::Cursor,
        ProviderKey::Windsurf,
        ProviderKey::Antigravity,
    ];

    /// Directory name of this provider's subtree.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Claude => "claude",
            Self::OpenAi => "openai",
            Self::Cursor => "cursor",
            Self::Windsurf => "windsurf",
            Self::Antigravity => "antigravity",
            Self::Default => "default",
            Self::Custom(name) => name,
        }
    }

    /// Whether this is one of the known providers or `default`.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    /// Map a subtree directory name to a provider key.
    ///
    /// Known names match case-insensitively; anything else is kept verbatim
    /// as a custom provider so it can still be addressed by `--provider`.
    pub fn from_dir_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "claude" => Self::Claude,
            "openai" => Self::OpenAi,
            "cursor" => Self::Cursor,
            "windsurf" => Self::Windsurf,
            "antigravity" => Self::Antigravity,
            "default" => Self::Default,
            _ => Self::Custom(name.to_string()),
        }
    }
}

impl FromStr for ProviderKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("provider name cannot be empty".to_string());
        }
        if trimmed.contains(['/', '\\']) || trimmed == "." || trimmed == ".." {
            return Err(format!("invalid provider name: {}", trimmed));
        }
        Ok(Self::from_dir_name(trimmed))
    }
}

impl TryFrom<String> for ProviderKey {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ProviderKey> for String {
    fn from(key: ProviderKey) -> Self {
        key.as_str().to_string()
    }
}

impl fmt::Display for ProviderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Ordered by name so provider listings read alphabetically.
impl Ord for ProviderKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str()
            .cmp(other.as_str())
            .then_with(|| other.is_known().cmp(&self.is_known()))
    }
}

impl PartialOrd for ProviderKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
