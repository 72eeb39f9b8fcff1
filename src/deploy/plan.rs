//! Deployment plans.
//!
//! A plan is everything the engine decided before touching the destination:
//! which provider subtree was selected and why, and what will happen to every
//! target path. Dry-run reports a plan; apply mode executes the same plan.

use std::path::{Path, PathBuf};

use crate::detection::Detection;
use crate::registry::{ProviderKey, TemplateId};

/// How the provider subtree was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderSelection {
    /// The caller named the provider.
    Explicit,
    /// A marker in the destination signalled the provider.
    Detected { marker: PathBuf },
    /// Nothing matched, so `default` was used. Lists detected providers the
    /// template does not ship.
    Fallback { unavailable: Vec<Detection> },
}

impl ProviderSelection {
    /// Human-readable reason for the choice.
    pub fn describe(&self) -> String {
        match self {
            Self::Explicit => "requested explicitly".to_string(),
            Self::Detected { marker } => format!("detected from {}", marker.display()),
            Self::Fallback { unavailable } if unavailable.is_empty() => {
                "no provider detected, using default".to_string()
            }
            Self::Fallback { unavailable } => {
                let names: Vec<&str> = unavailable.iter().map(|d| d.provider.as_str()).collect();
                format!(
                    "detected {} but the template does not ship it, using default",
                    names.join(", ")
                )
            }
        }
    }
}

/// What happens to one target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    /// Target does not exist and will be written.
    Create,
    /// Target exists and will be replaced.
    Overwrite,
    /// Target exists and will be left alone.
    Skip,
}

impl FileAction {
    /// Whether this action writes the target.
    pub fn writes(&self) -> bool {
        matches!(self, Self::Create | Self::Overwrite)
    }

    /// Label used in reports.
    pub fn label(&self, dry_run: bool) -> &'static str {
        match (self, dry_run) {
            (Self::Create, false) => "created",
            (Self::Create, true) => "would create",
            (Self::Overwrite, false) => "overwritten",
            (Self::Overwrite, true) => "would overwrite",
            (Self::Skip, false) => "skipped (exists)",
            (Self::Skip, true) => "would skip (exists)",
        }
    }
}

/// One file in a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    /// Normalized path relative to the destination.
    pub relative: PathBuf,
    /// Content in the corpus.
    pub source: PathBuf,
    /// Absolute target path.
    pub target: PathBuf,
    /// Whether the target existed when the plan was made.
    pub existed: bool,
    /// Planned action.
    pub action: FileAction,
}

/// A fully validated deployment, ready to report or execute.
#[derive(Debug, Clone)]
pub struct DeploymentPlan {
    pub template: TemplateId,
    pub provider: ProviderKey,
    pub selection: ProviderSelection,
    pub destination: PathBuf,
    pub dry_run: bool,
    pub files: Vec<PlannedFile>,
}

impl DeploymentPlan {
    /// Targets that already exist.
    pub fn conflicts(&self) -> Vec<PathBuf> {
        self.files
            .iter()
            .filter(|f| f.existed)
            .map(|f| f.relative.clone())
            .collect()
    }

    /// Relative paths the plan writes.
    pub fn writes(&self) -> Vec<&Path> {
        self.files
            .iter()
            .filter(|f| f.action.writes())
            .map(|f| f.relative.as_path())
            .collect()
    }
}
