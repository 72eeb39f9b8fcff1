//! Conflict policy for targets that already exist.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What to do when a target file already exists in the destination.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    /// Replace the existing file and name it in the result.
    #[default]
    Overwrite,
    /// Leave the existing file alone and name it in the result.
    Skip,
    /// Refuse the whole deployment before writing anything.
    Abort,
}

impl FromStr for ConflictPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "overwrite" => Ok(Self::Overwrite),
            "skip" => Ok(Self::Skip),
            "abort" => Ok(Self::Abort),
            _ => Err(format!("unknown conflict policy: {}", s)),
        }
    }
}

impl fmt::Display for ConflictPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Overwrite => "overwrite",
            Self::Skip => "skip",
            Self::Abort => "abort",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_overwrite() {
        assert_eq!(ConflictPolicy::default(), ConflictPolicy::Overwrite);
    }

    #[test]
    fn parses_from_str() {
        assert_eq!("SKIP".parse::<ConflictPolicy>(), Ok(ConflictPolicy::Skip));
        assert_eq!("abort".parse::<ConflictPolicy>(), Ok(ConflictPolicy::Abort));
        assert!("merge".parse::<ConflictPolicy>().is_err());
    }

    #[test]
    fn deserializes_lowercase() {
        let policy: ConflictPolicy = serde_yaml::from_str("skip").unwrap();
        assert_eq!(policy, ConflictPolicy::Skip);
    }
}
