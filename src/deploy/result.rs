//! Deployment results.

use std::path::{Path, PathBuf};

use super::plan::{FileAction, PlannedFile, ProviderSelection};
use crate::registry::{ProviderKey, TemplateId};

/// Outcome for one target path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployedFile {
    pub relative: PathBuf,
    pub target: PathBuf,
    pub existed: bool,
    pub action: FileAction,
}

impl From<&PlannedFile> for DeployedFile {
    fn from(file: &PlannedFile) -> Self {
        Self {
            relative: file.relative.clone(),
            target: file.target.clone(),
            existed: file.existed,
            action: file.action,
        }
    }
}

/// What a deployment did, or would do in dry-run mode.
#[derive(Debug, Clone)]
pub struct DeploymentResult {
    pub template: TemplateId,
    pub provider: ProviderKey,
    pub selection: ProviderSelection,
    pub destination: PathBuf,
    pub dry_run: bool,
    /// Files processed, in plan order. After an interruption this holds only
    /// the files handled before it.
    pub files: Vec<DeployedFile>,
    /// Relative paths found to exist when the plan was made. After an
    /// interruption some of these may never have been reached; use
    /// [`overwritten`](Self::overwritten) and [`skipped`](Self::skipped) for
    /// what actually happened.
    pub conflicts: Vec<PathBuf>,
    /// Whether cancellation stopped the deployment early.
    pub interrupted: bool,
}

impl DeploymentResult {
    /// Relative paths written (or that would be written in dry-run).
    pub fn written(&self) -> Vec<&Path> {
        self.files
            .iter()
            .filter(|f| f.action.writes())
            .map(|f| f.relative.as_path())
            .collect()
    }

    /// Relative paths of existing files that were replaced.
    pub fn overwritten(&self) -> Vec<&Path> {
        self.files
            .iter()
            .filter(|f| f.action == FileAction::Overwrite)
            .map(|f| f.relative.as_path())
            .collect()
    }

    /// Relative paths left untouched because they already existed.
    pub fn skipped(&self) -> Vec<&Path> {
        self.files
            .iter()
            .filter(|f| f.action == FileAction::Skip)
            .map(|f| f.relative.as_path())
            .collect()
    }
}
