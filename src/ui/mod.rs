//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for terminal output
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use lau::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_header("pythonic-expert");
//! ui.success("Deployed 2 files");
//! assert!(ui.has_success("Deployed"));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, LauTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Change the output mode (e.g. from config `default_output`).
    fn set_output_mode(&mut self, mode: OutputMode);

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Write machine-readable output (e.g. `--json`), whatever the mode.
    fn output(&mut self, text: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show a contextual hint (e.g. the next command to run).
    fn show_hint(&mut self, hint: &str);

    /// Styles used to render output.
    fn theme(&self) -> &LauTheme;
}
