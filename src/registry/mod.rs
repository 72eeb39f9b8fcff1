//! Template registry for LAU.
//!
//! This module turns a corpus root into an addressable, validated index of
//! templates:
//! - [`provider`] - provider keys (`claude`, `openai`, ..., `default`)
//! - [`template`] - template, subtree and identifier types
//! - [`local`] - corpus scanning and per-template validation
//! - [`resolver`] - identifier lookup over a corpus root
//!
//! # Corpus Layout
//!
//! ```text
//! corpus/
//! ├── pythonic-expert/          # bare template
//! │   ├── README.md
//! │   ├── default/...
//! │   └── openai/...
//! └── security/                 # category
//!     └── redteam-expert/
//!         ├── README.md
//!         ├── default/...
//!         └── claude/...
//! ```
//!
//! # Example
//!
//! ```
//! use lau::registry::{ProviderKey, Registry};
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let corpus = TempDir::new().unwrap();
//! let template = corpus.path().join("security").join("redteam-expert");
//! fs::create_dir_all(template.join("default")).unwrap();
//! fs::write(template.join("README.md"), "# Redteam\n\nAdversarial reviewer.").unwrap();
//! fs::write(template.join("default").join("AGENTS.md"), "...").unwrap();
//!
//! let registry = Registry::new(corpus.path()).unwrap();
//! let resolved = registry.resolve("redteam-expert").unwrap();
//! assert_eq!(resolved.id.to_string(), "security/redteam-expert");
//! assert!(registry.providers_of(&resolved).contains(&ProviderKey::Default));
//! ```

pub mod local;
pub mod provider;
pub mod resolver;
pub mod template;

// Re-exports
pub use local::{Candidate, TemplateWarning, Templates, DESCRIPTION_DOCUMENT};
pub use provider::ProviderKey;
pub use resolver::{Listing, Registry};
pub use template::{FileEntry, ProviderSubtree, Template, TemplateId};
