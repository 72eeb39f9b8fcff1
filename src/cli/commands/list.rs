//! List command implementation.
//!
//! The `lau list` command lists the valid templates in the corpus and warns
//! about the invalid ones.

use serde::Serialize;

use crate::cli::args::ListArgs;
use crate::error::{LauError, Result};
use crate::registry::{Template, TemplateId};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    context: CommandContext,
    args: ListArgs,
}

/// One template in `--json` output.
#[derive(Debug, Serialize)]
struct TemplateSummary<'a> {
    id: &'a TemplateId,
    category: Option<&'a str>,
    name: &'a str,
    description: &'a str,
    providers: Vec<String>,
}

impl<'a> From<&'a Template> for TemplateSummary<'a> {
    fn from(template: &'a Template) -> Self {
        Self {
            id: &template.id,
            category: template.id.category.as_deref(),
            name: &template.id.name,
            description: &template.description,
            providers: template
                .providers()
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(context: CommandContext, args: ListArgs) -> Self {
        Self { context, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }

    fn in_scope(&self, id: &TemplateId) -> bool {
        match &self.args.category {
            Some(category) => id.category.as_deref() == Some(category.as_str()),
            None => true,
        }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.context.load_config()?;
        self.context.apply_default_output(&config, ui);

        let registry = self.context.registry(&config)?;
        let listing = registry.list_templates()?;

        for warning in listing.warnings.iter().filter(|w| self.in_scope(&w.id)) {
            ui.warning(&warning.to_string());
        }

        let templates: Vec<&Template> = listing
            .templates
            .iter()
            .filter(|t| self.in_scope(&t.id))
            .collect();

        if self.args.json {
            let summaries: Vec<TemplateSummary> =
                templates.iter().map(|t| TemplateSummary::from(*t)).collect();
            let json = serde_json::to_string_pretty(&summaries)
                .map_err(|e| LauError::Other(e.into()))?;
            ui.output(&json);
            return Ok(CommandResult::success());
        }

        if templates.is_empty() {
            ui.message("No templates found.");
            return Ok(CommandResult::success());
        }

        let theme = ui.theme().clone();
        let width = templates
            .iter()
            .map(|t| t.id.to_string().len())
            .max()
            .unwrap_or(0);

        for template in &templates {
            let id = template.id.to_string();
            let mut line = format!(
                "  {}{}  {}",
                theme.highlight.apply_to(&id),
                " ".repeat(width - id.len()),
                template.description,
            );
            if ui.output_mode().shows_details() {
                let providers: Vec<String> = template
                    .providers()
                    .iter()
                    .map(|p| p.to_string())
                    .collect();
                line.push_str(&format!(
                    " {}",
                    theme.provider.apply_to(format!("[{}]", providers.join(", ")))
                ));
            }
            ui.message(&line);
        }

        Ok(CommandResult::success())
    }
}
