//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandContext`] for state shared by every command
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::config::{load_config, resolve_corpus_root, LauConfig};
use crate::deploy::CancellationToken;
use crate::error::Result;
use crate::registry::Registry;
use crate::ui::{OutputMode, UserInterface};

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Exit code for a run stopped by Ctrl-C.
    pub const INTERRUPTED: i32 = 130;

    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Paths and flags every command needs.
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    /// Destination project directory.
    pub project_root: PathBuf,
    /// Explicit config file (`--config`).
    pub config_path: Option<PathBuf>,
    /// Explicit corpus root (`--corpus` or `LAU_CORPUS`).
    pub corpus: Option<PathBuf>,
    /// Set when the user interrupts the run.
    pub cancel: CancellationToken,
}

impl CommandContext {
    /// Context for a project root with nothing overridden.
    pub fn new(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            ..Default::default()
        }
    }

    /// Load the merged configuration for this project.
    pub fn load_config(&self) -> Result<LauConfig> {
        load_config(&self.project_root, self.config_path.as_deref())
    }

    /// Open the registry for the configured corpus.
    pub fn registry(&self, config: &LauConfig) -> Result<Registry> {
        let root = resolve_corpus_root(self.corpus.as_deref(), config, &self.project_root);
        tracing::debug!("Using corpus at {}", root.display());
        Registry::new(root)
    }

    /// Apply config `default_output` when no CLI flag was explicitly set.
    pub fn apply_default_output(&self, config: &LauConfig, ui: &mut dyn UserInterface) {
        if let Some(mode) = config.default_output {
            if ui.output_mode() == OutputMode::Normal {
                ui.set_output_mode(mode.into());
            }
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    context: CommandContext,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            context: CommandContext::new(&project_root),
        }
    }

    /// Use an explicit config file.
    pub fn with_config(mut self, path: Option<PathBuf>) -> Self {
        self.context.config_path = path;
        self
    }

    /// Use an explicit corpus root.
    pub fn with_corpus(mut self, path: Option<PathBuf>) -> Self {
        self.context.corpus = path;
        self
    }

    /// Share a cancellation token with the commands.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.context.cancel = token;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.context.project_root
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. Domain errors are shown through the UI and turned
    /// into their exit codes.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let result = match &cli.command {
            Commands::List(args) => {
                let cmd = super::list::ListCommand::new(self.context.clone(), args.clone());
                cmd.execute(ui)
            }
            Commands::Deploy(args) => {
                let cmd = super::deploy::DeployCommand::new(self.context.clone(), args.clone());
                cmd.execute(ui)
            }
            Commands::Show(args) => {
                let cmd = super::show::ShowCommand::new(self.context.clone(), args.clone());
                cmd.execute(ui)
            }
            Commands::Detect => {
                let cmd = super::detect::DetectCommand::new(self.context.clone());
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        };

        match result {
            Ok(result) => Ok(result),
            Err(e) => {
                tracing::debug!("Command failed: {:?}", e);
                ui.error(&e.to_string());
                Ok(CommandResult::failure(e.exit_code()))
            }
        }
    }
}
