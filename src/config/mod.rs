//! Configuration loading for LAU.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//!
//! # Example
//!
//! ```
//! use lau::config::load_merged_config;
//! use lau::deploy::ConflictPolicy;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let lau_dir = temp.path().join(".lau");
//! fs::create_dir_all(&lau_dir).unwrap();
//! fs::write(lau_dir.join("config.yml"), "on_conflict: skip").unwrap();
//!
//! let config = load_merged_config(temp.path()).unwrap();
//! assert_eq!(config.on_conflict, ConflictPolicy::Skip);
//! ```

pub mod loader;
pub mod merger;
pub mod schema;

pub use loader::{
    default_corpus_root, load_config, load_config_file, load_config_value, load_merged_config,
    resolve_corpus_root, ConfigPaths, CONFIG_DIR,
};
pub use merger::{deep_merge, merge_configs};
pub use schema::{LauConfig, OutputMode};
