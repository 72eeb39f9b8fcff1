//! Ambient provider detection.
//!
//! Infers which AI agent tool a destination project already uses from marker
//! files and directories, so deployment can pick the matching subtree.

pub mod file_detection;
pub mod types;

pub use file_detection::{builtin_rules, MarkerDetector, MarkerKind, MarkerRule};
pub use types::{Detection, NoDetection, ProviderDetector};
