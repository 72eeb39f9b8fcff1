//! Configuration schema for `.lau/config.yml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::deploy::ConflictPolicy;
use crate::detection::MarkerRule;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LauConfig {
    /// Template corpus root. Relative paths resolve against the project root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corpus: Option<PathBuf>,

    /// Policy for deploy targets that already exist.
    pub on_conflict: ConflictPolicy,

    /// Output verbosity when no CLI flag is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_output: Option<OutputMode>,

    /// Extra provider marker rules, checked before the built-in ones.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<MarkerRule>,
}

/// Output verbosity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    Normal,
    Quiet,
    Silent,
}
