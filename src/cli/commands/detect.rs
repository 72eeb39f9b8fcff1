//! Detect command implementation.
//!
//! The `lau detect` command shows which providers the project signals, in
//! the order deployment would consider them.

use crate::detection::{MarkerDetector, ProviderDetector};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The detect command implementation.
pub struct DetectCommand {
    context: CommandContext,
}

impl DetectCommand {
    /// Create a new detect command.
    pub fn new(context: CommandContext) -> Self {
        Self { context }
    }
}

impl Command for DetectCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.context.load_config()?;
        self.context.apply_default_output(&config, ui);

        let detector = MarkerDetector::new().prepend(config.markers.clone());
        let detections = detector.detect(&self.context.project_root);

        if detections.is_empty() {
            ui.message("No provider markers found; deployments will use 'default'.");
            return Ok(CommandResult::success());
        }

        let theme = ui.theme().clone();
        for detection in &detections {
            ui.message(&format!(
                "  {} {}",
                theme.provider.apply_to(&detection.provider),
                theme.dim.apply_to(format!("({})", detection.marker.display()))
            ));
        }

        Ok(CommandResult::success())
    }
}
