//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`lau list`, `lau deploy`)
//! - Shared config and corpus loading through [`CommandContext`]
//! - Consistent mapping of errors to exit codes

pub mod completions;
pub mod deploy;
pub mod detect;
pub mod dispatcher;
pub mod list;
pub mod show;

pub use dispatcher::{Command, CommandContext, CommandDispatcher, CommandResult};
