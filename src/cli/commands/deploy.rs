//! Deploy command implementation.
//!
//! The `lau deploy` command resolves a template, selects one of its provider
//! subtrees and copies it into the project.

use std::path::Path;

use crate::cli::args::DeployArgs;
use crate::deploy::{DeploymentEngine, DeploymentResult, FileAction, ResolutionRequest};
use crate::detection::MarkerDetector;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The deploy command implementation.
pub struct DeployCommand {
    context: CommandContext,
    args: DeployArgs,
}

impl DeployCommand {
    /// Create a new deploy command.
    pub fn new(context: CommandContext, args: DeployArgs) -> Self {
        Self { context, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &DeployArgs {
        &self.args
    }

    fn report(&self, result: &DeploymentResult, ui: &mut dyn UserInterface) {
        let theme = ui.theme().clone();

        if ui.output_mode().shows_details() {
            let title = if result.dry_run {
                format!("{} (dry run)", result.template)
            } else {
                result.template.to_string()
            };
            ui.show_header(&title);
            ui.message(&format!(
                "  {} {} {}",
                theme.key.apply_to("Provider:"),
                theme.provider.apply_to(&result.provider),
                theme.dim.apply_to(format!("({})", result.selection.describe())),
            ));

            for file in &result.files {
                ui.message(&format!(
                    "    {} {} {}",
                    theme.action_icon(file.action),
                    file.relative.display(),
                    theme.dim.apply_to(file.action.label(result.dry_run)),
                ));
            }
        }

        let (overwrite_verb, keep_verb) = if result.dry_run {
            ("Would overwrite", "Would keep")
        } else {
            ("Overwrote", "Kept")
        };
        warn_existing(ui, overwrite_verb, &result.overwritten());
        warn_existing(ui, keep_verb, &result.skipped());
    }
}

fn warn_existing(ui: &mut dyn UserInterface, verb: &str, paths: &[&Path]) {
    if paths.is_empty() {
        return;
    }
    let names: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
    ui.warning(&format!(
        "{} {} existing file(s): {}",
        verb,
        names.len(),
        names.join(", ")
    ));
}

impl Command for DeployCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.context.load_config()?;
        self.context.apply_default_output(&config, ui);

        let registry = self.context.registry(&config)?;
        let template = registry.resolve(&self.args.template)?;

        let mut request = ResolutionRequest::new(&self.args.template)
            .dry_run(self.args.dry_run)
            .on_conflict(self.args.on_conflict.unwrap_or(config.on_conflict));
        if let Some(provider) = &self.args.provider {
            request = request.with_provider(provider.clone());
        }

        let detector = MarkerDetector::new().prepend(config.markers.clone());
        let engine = DeploymentEngine::with_detector(detector)
            .with_cancellation(self.context.cancel.clone());

        let result = engine.deploy(&template, &request, &self.context.project_root)?;
        self.report(&result, ui);

        if result.interrupted {
            ui.warning(&format!(
                "Interrupted after {} file(s); the rest were not written",
                result.files.len()
            ));
            return Ok(CommandResult::failure(CommandResult::INTERRUPTED));
        }

        let count = result
            .files
            .iter()
            .filter(|f| f.action != FileAction::Skip)
            .count();
        if result.dry_run {
            ui.success(&format!(
                "Dry run: {} file(s) would be written, nothing changed",
                count
            ));
        } else {
            ui.success(&format!(
                "Deployed {} file(s) to {}",
                count,
                result.destination.display()
            ));
        }

        Ok(CommandResult::success())
    }
}
