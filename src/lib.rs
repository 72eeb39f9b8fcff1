//! LAU - Resolve AI assistant templates and deploy them into projects.
//!
//! A template corpus holds one directory per template, optionally grouped
//! into categories. Each template carries a `README.md` and one subtree per
//! provider (`claude`, `openai`, `cursor`, ...) plus a mandatory `default`.
//! LAU resolves an identifier to a template, picks the subtree that fits the
//! destination project and copies it byte for byte.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and merging
//! - [`deploy`] - Provider selection, planning and verbatim copying
//! - [`detection`] - Provider detection from destination markers
//! - [`error`] - Error types and result aliases
//! - [`registry`] - Corpus scanning and template resolution
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use lau::deploy::{DeploymentEngine, ResolutionRequest};
//! use lau::registry::{ProviderKey, Registry};
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let corpus = TempDir::new().unwrap();
//! let template = corpus.path().join("pythonic-expert");
//! fs::create_dir_all(template.join("default")).unwrap();
//! fs::write(template.join("README.md"), "Idiomatic Python.\n").unwrap();
//! fs::write(template.join("default/AGENTS.md"), "Write pythonic code.\n").unwrap();
//!
//! let registry = Registry::new(corpus.path()).unwrap();
//! let found = registry.resolve("pythonic-expert").unwrap();
//! assert!(registry.providers_of(&found).contains(&ProviderKey::Default));
//!
//! let project = TempDir::new().unwrap();
//! let request = ResolutionRequest::new("pythonic-expert");
//! let result = DeploymentEngine::new()
//!     .deploy(&found, &request, project.path())
//!     .unwrap();
//! assert_eq!(result.provider, ProviderKey::Default);
//! assert!(project.path().join("AGENTS.md").exists());
//! ```

pub mod cli;
pub mod config;
pub mod deploy;
pub mod detection;
pub mod error;
pub mod registry;
pub mod ui;

pub use error::{LauError, Result};
