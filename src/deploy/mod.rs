//! Template deployment.
//!
//! Given a resolved [`Template`](crate::registry::Template) and a
//! [`ResolutionRequest`], the [`DeploymentEngine`] picks one provider
//! subtree and copies its files verbatim into a destination directory.
//!
//! - [`engine`] - provider selection, planning and execution
//! - [`plan`] - the validated plan shared by dry-run and apply mode
//! - [`conflict`] - policy for targets that already exist
//! - [`paths`] - destination containment checks
//! - [`result`] - per-file outcomes
//! - [`cancel`] - cooperative cancellation between copies
//!
//! # Example
//!
//! ```
//! use lau::deploy::{DeploymentEngine, ResolutionRequest};
//! use lau::registry::Registry;
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let corpus = TempDir::new().unwrap();
//! let template = corpus.path().join("pythonic-expert");
//! fs::create_dir_all(template.join("default")).unwrap();
//! fs::write(template.join("README.md"), "Idiomatic Python reviewer.").unwrap();
//! fs::write(template.join("default").join("AGENTS.md"), "...").unwrap();
//!
//! let project = TempDir::new().unwrap();
//! let registry = Registry::new(corpus.path()).unwrap();
//! let resolved = registry.resolve("pythonic-expert").unwrap();
//!
//! let request = ResolutionRequest::new("pythonic-expert").dry_run(true);
//! let result = DeploymentEngine::new().deploy(&resolved, &request, project.path()).unwrap();
//! assert_eq!(result.written().len(), 1);
//! assert!(!project.path().join("AGENTS.md").exists());
//! ```

pub mod cancel;
pub mod conflict;
pub mod engine;
pub mod paths;
pub mod plan;
pub mod result;

pub use cancel::CancellationToken;
pub use conflict::ConflictPolicy;
pub use engine::{DeploymentEngine, ResolutionRequest};
pub use plan::{DeploymentPlan, FileAction, PlannedFile, ProviderSelection};
pub use result::{DeployedFile, DeploymentResult};
