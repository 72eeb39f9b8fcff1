//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::deploy::ConflictPolicy;
use crate::registry::ProviderKey;

/// LAU - Deploy AI assistant templates into a project.
#[derive(Debug, Parser)]
#[command(name = "lau")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides .lau/config.yml discovery)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Template corpus root
    #[arg(long, global = true, env = "LAU_CORPUS")]
    pub corpus: Option<PathBuf>,

    /// Destination project directory (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List templates in the corpus
    List(ListArgs),

    /// Deploy a template into the project
    Deploy(DeployArgs),

    /// Show one template and its providers
    Show(ShowArgs),

    /// Show which providers the project signals
    Detect,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Only list templates in this category
    #[arg(long)]
    pub category: Option<String>,
}

/// Arguments for the `deploy` command.
#[derive(Debug, Clone, clap::Args)]
pub struct DeployArgs {
    /// Template identifier (`name` or `category/name`)
    pub template: String,

    /// Provider subtree to deploy, skipping detection
    #[arg(long)]
    pub provider: Option<ProviderKey>,

    /// Report what would happen without writing
    #[arg(long)]
    pub dry_run: bool,

    /// What to do with targets that already exist
    #[arg(long, value_enum)]
    pub on_conflict: Option<ConflictPolicy>,
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ShowArgs {
    /// Template identifier (`name` or `category/name`)
    pub template: String,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
