//! Provider selection and verbatim file materialization.
//!
//! Selection precedence:
//! 1. Explicit provider override (error if the template lacks it)
//! 2. First detected provider the template ships
//! 3. `default`
//!
//! Files are copied as raw byte streams. Content is never parsed, rendered,
//! or transformed.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use super::cancel::CancellationToken;
use super::conflict::ConflictPolicy;
use super::paths::{normalize_relative, resolves_within};
use super::plan::{DeploymentPlan, FileAction, PlannedFile, ProviderSelection};
use super::result::{DeployedFile, DeploymentResult};
use crate::detection::{Detection, MarkerDetector, ProviderDetector};
use crate::error::{LauError, Result};
use crate::registry::{ProviderKey, ProviderSubtree, Template};

/// A request to deploy one template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionRequest {
    /// Template identifier as the caller typed it.
    pub identifier: String,
    /// Explicit provider override.
    pub provider: Option<ProviderKey>,
    /// Report the plan without writing anything.
    pub dry_run: bool,
    /// Policy for targets that already exist.
    pub on_conflict: ConflictPolicy,
}

impl ResolutionRequest {
    pub fn new(identifier: &str) -> Self {
        Self {
            identifier: identifier.to_string(),
            ..Default::default()
        }
    }

    pub fn with_provider(mut self, provider: ProviderKey) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn on_conflict(mut self, policy: ConflictPolicy) -> Self {
        self.on_conflict = policy;
        self
    }
}

/// Chooses a provider subtree and copies it into a destination.
pub struct DeploymentEngine {
    detector: Box<dyn ProviderDetector>,
    cancel: CancellationToken,
}

impl Default for DeploymentEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DeploymentEngine {
    /// Engine with the built-in marker detector.
    pub fn new() -> Self {
        Self::with_detector(MarkerDetector::new())
    }

    /// Engine with a custom detector.
    pub fn with_detector(detector: impl ProviderDetector + 'static) -> Self {
        Self {
            detector: Box::new(detector),
            cancel: CancellationToken::new(),
        }
    }

    /// Share a cancellation token with the engine.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Pick the provider subtree for a request.
    pub fn select_provider<'t>(
        &self,
        template: &'t Template,
        request: &ResolutionRequest,
        destination: &Path,
    ) -> Result<(&'t ProviderSubtree, ProviderSelection)> {
        let available = || template.providers().into_iter().collect::<Vec<_>>();

        if let Some(requested) = &request.provider {
            let subtree =
                template
                    .subtree(requested)
                    .ok_or_else(|| LauError::ProviderNotAvailable {
                        template: template.id.to_string(),
                        requested: requested.clone(),
                        available: available(),
                    })?;
            return Ok((subtree, ProviderSelection::Explicit));
        }

        let (detections, ignored): (Vec<Detection>, Vec<Detection>) = self
            .detector
            .detect(destination)
            .into_iter()
            .partition(|d| !shipped_by_other_provider(template, d));
        for detection in &ignored {
            tracing::debug!(
                "Ignoring marker {} for {}: {} ships that path",
                detection.marker.display(),
                detection.provider,
                template.id
            );
        }

        for detection in &detections {
            if let Some(subtree) = template.subtree(&detection.provider) {
                tracing::debug!(
                    "Using provider {} for {} (marker {})",
                    detection.provider,
                    template.id,
                    detection.marker.display()
                );
                return Ok((
                    subtree,
                    ProviderSelection::Detected {
                        marker: detection.marker.clone(),
                    },
                ));
            }
        }

        let subtree =
            template
                .subtree(&ProviderKey::Default)
                .ok_or_else(|| LauError::NoDefaultProvider {
                    template: template.id.to_string(),
                    available: available(),
                })?;
        Ok((
            subtree,
            ProviderSelection::Fallback {
                unavailable: detections,
            },
        ))
    }

    /// Build a validated plan without touching the destination.
    ///
    /// Every path is checked before any conflict handling, so an escaping
    /// path fails the whole template. With [`ConflictPolicy::Abort`], any
    /// existing target fails the plan too.
    pub fn plan(
        &self,
        template: &Template,
        request: &ResolutionRequest,
        destination: &Path,
    ) -> Result<DeploymentPlan> {
        let canonical_root = destination
            .canonicalize()
            .map_err(|e| LauError::io(destination, e))?;
        if !canonical_root.is_dir() {
            return Err(LauError::io(
                destination,
                io::Error::new(io::ErrorKind::InvalidInput, "destination is not a directory"),
            ));
        }

        let (subtree, selection) = self.select_provider(template, request, destination)?;
        let escape = |path: &Path| LauError::PathEscapesDestination {
            template: template.id.to_string(),
            path: path.to_path_buf(),
        };

        let mut files = Vec::with_capacity(subtree.files().len());
        for entry in subtree.files() {
            let relative =
                normalize_relative(&entry.relative).ok_or_else(|| escape(&entry.relative))?;
            let target = canonical_root.join(&relative);
            let within = resolves_within(&canonical_root, &target)
                .map_err(|e| LauError::io(&target, e))?;
            if !within {
                return Err(escape(&entry.relative));
            }

            let existed = fs::symlink_metadata(&target).is_ok();
            let action = match (existed, request.on_conflict) {
                (false, _) => FileAction::Create,
                (true, ConflictPolicy::Skip) => FileAction::Skip,
                (true, _) => FileAction::Overwrite,
            };

            files.push(PlannedFile {
                relative,
                source: entry.source.clone(),
                target,
                existed,
                action,
            });
        }

        let plan = DeploymentPlan {
            template: template.id.clone(),
            provider: subtree.key().clone(),
            selection,
            destination: canonical_root,
            dry_run: request.dry_run,
            files,
        };

        if request.on_conflict == ConflictPolicy::Abort {
            let conflicts = plan.conflicts();
            if !conflicts.is_empty() {
                return Err(LauError::DeploymentConflict { paths: conflicts });
            }
        }

        tracing::debug!(
            "Planned {} file(s) for {} using provider {}",
            plan.files.len(),
            plan.template,
            plan.provider
        );
        Ok(plan)
    }

    /// Carry out a plan. Dry-run plans are returned as results untouched.
    ///
    /// Stops at the first I/O failure; files written before it stay in place.
    /// If cancellation is requested, no further copies start and the result
    /// lists only what completed.
    pub fn execute(&self, plan: DeploymentPlan) -> Result<DeploymentResult> {
        let conflicts = plan.conflicts();
        let mut result = DeploymentResult {
            template: plan.template.clone(),
            provider: plan.provider.clone(),
            selection: plan.selection.clone(),
            destination: plan.destination.clone(),
            dry_run: plan.dry_run,
            files: Vec::with_capacity(plan.files.len()),
            conflicts,
            interrupted: false,
        };

        if plan.dry_run {
            result.files = plan.files.iter().map(DeployedFile::from).collect();
            return Ok(result);
        }

        for file in &plan.files {
            if self.cancel.is_cancelled() {
                tracing::warn!(
                    "Deployment of {} interrupted after {} file(s)",
                    plan.template,
                    result.files.len()
                );
                result.interrupted = true;
                break;
            }
            if file.action.writes() {
                copy_verbatim(&file.source, &file.target)?;
                tracing::debug!("Wrote {}", file.target.display());
            }
            result.files.push(DeployedFile::from(file));
        }

        Ok(result)
    }

    /// Plan and execute in one step.
    pub fn deploy(
        &self,
        template: &Template,
        request: &ResolutionRequest,
        destination: &Path,
    ) -> Result<DeploymentResult> {
        let plan = self.plan(template, request, destination)?;
        self.execute(plan)
    }
}

/// Whether a marker is a path some other subtree of the template writes.
///
/// Such a marker may have been left by an earlier deployment of the same
/// template, so it cannot count as a signal. Directory markers match when a
/// shipped file lives under them.
fn shipped_by_other_provider(template: &Template, detection: &Detection) -> bool {
    template
        .subtrees()
        .filter(|subtree| subtree.key() != &detection.provider)
        .flat_map(|subtree| subtree.files())
        .any(|entry| {
            entry.relative.starts_with(&detection.marker)
                || detection.marker.starts_with(&entry.relative)
        })
}

/// Byte-for-byte copy, creating parent directories as needed.
fn copy_verbatim(source: &Path, target: &Path) -> Result<()> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| LauError::io(parent, e))?;
    }
    let mut reader = File::open(source).map_err(|e| LauError::io(source, e))?;
    let mut writer = File::create(target).map_err(|e| LauError::io(target, e))?;
    io::copy(&mut reader, &mut writer).map_err(|e| LauError::io(target, e))?;
    Ok(())
}
