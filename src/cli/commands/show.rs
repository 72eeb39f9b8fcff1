//! Show command implementation.
//!
//! The `lau show` command describes one template and the providers it ships.

use crate::cli::args::ShowArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The show command implementation.
pub struct ShowCommand {
    context: CommandContext,
    args: ShowArgs,
}

impl ShowCommand {
    /// Create a new show command.
    pub fn new(context: CommandContext, args: ShowArgs) -> Self {
        Self { context, args }
    }
}

impl Command for ShowCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.context.load_config()?;
        self.context.apply_default_output(&config, ui);

        let registry = self.context.registry(&config)?;
        let template = registry.resolve(&self.args.template)?;
        let theme = ui.theme().clone();

        ui.show_header(&template.id.to_string());
        if !template.description.is_empty() {
            ui.message(&format!("  {}", template.description));
        }
        ui.message(&format!(
            "  {} {}",
            theme.key.apply_to("Location:"),
            theme.dim.apply_to(template.root.display())
        ));
        ui.message(&format!("  {}", theme.key.apply_to("Providers:")));

        for provider in registry.providers_of(&template) {
            let Some(subtree) = template.subtree(&provider) else {
                continue;
            };
            ui.message(&format!(
                "    {} {}",
                theme.provider.apply_to(&provider),
                theme.dim.apply_to(format!("({} file(s))", subtree.files().len()))
            ));
            if ui.output_mode() == crate::ui::OutputMode::Verbose {
                for file in subtree.files() {
                    ui.message(&format!("      {}", file.relative.display()));
                }
            }
        }

        ui.show_hint(&format!("lau deploy {}", template.id));
        Ok(CommandResult::success())
    }
}
