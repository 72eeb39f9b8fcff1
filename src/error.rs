//! Error types for LAU operations.
//!
//! This module defines [`LauError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Resolution errors (unknown or ambiguous identifiers) are user-facing and
//!   never retried
//! - Provider errors always name the requested provider and what is available
//! - Integrity errors abort the whole deployment for a template
//! - I/O failures carry the path that failed
//! - Use `anyhow::Error` (via `LauError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

use crate::registry::ProviderKey;

/// Core error type for LAU operations.
#[derive(Debug, Error)]
pub enum LauError {
    /// No template matches the identifier.
    #[error("Template not found: {identifier}{}", format_suggestions(.suggestions))]
    TemplateNotFound {
        identifier: String,
        suggestions: Vec<String>,
    },

    /// A bare name matches templates in more than one category.
    #[error(
        "Ambiguous template '{identifier}', qualify it with a category: {}",
        .candidates.join(", ")
    )]
    AmbiguousIdentifier {
        identifier: String,
        candidates: Vec<String>,
    },

    /// The identifier is not of the form `name` or `category/name`.
    #[error("Invalid template identifier '{identifier}': {message}")]
    InvalidIdentifier { identifier: String, message: String },

    /// The template exists on disk but fails validation.
    #[error("Invalid template '{identifier}': {reason}")]
    InvalidTemplate { identifier: String, reason: String },

    /// The explicitly requested provider has no subtree in this template.
    #[error(
        "Provider '{requested}' is not available for '{template}' (available: {})",
        format_providers(.available)
    )]
    ProviderNotAvailable {
        template: String,
        requested: ProviderKey,
        available: Vec<ProviderKey>,
    },

    /// The template has no `default` subtree to fall back to.
    #[error(
        "Template '{template}' has no default provider (available: {})",
        format_providers(.available)
    )]
    NoDefaultProvider {
        template: String,
        available: Vec<ProviderKey>,
    },

    /// A file in the template would land outside the destination.
    #[error("Template '{template}' is corrupt: '{}' escapes the destination", .path.display())]
    PathEscapesDestination { template: String, path: PathBuf },

    /// Targets already exist and the conflict policy is `abort`.
    #[error("Refusing to overwrite {} existing file(s): {}", .paths.len(), format_paths(.paths))]
    DeploymentConflict { paths: Vec<PathBuf> },

    /// A filesystem operation on a specific path failed.
    #[error("I/O failure at {}: {source}", .path.display())]
    IoFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The corpus root does not exist or is not a directory.
    #[error("Template corpus not found: {}", .path.display())]
    CorpusNotFound { path: PathBuf },

    /// Failed to parse a configuration file.
    #[error("Failed to parse config at {}: {message}", .path.display())]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LauError {
    /// Process exit code for this error kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::TemplateNotFound { .. } => 2,
            Self::AmbiguousIdentifier { .. } | Self::InvalidIdentifier { .. } => 3,
            Self::ProviderNotAvailable { .. } => 4,
            Self::NoDefaultProvider { .. } | Self::InvalidTemplate { .. } => 5,
            Self::PathEscapesDestination { .. } => 6,
            Self::IoFailure { .. } | Self::Io(_) | Self::Other(_) => 7,
            Self::DeploymentConflict { .. } => 8,
            Self::ConfigParseError { .. } => 9,
            Self::CorpusNotFound { .. } => 10,
        }
    }

    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoFailure {
            path: path.into(),
            source,
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean: {}?)", suggestions.join(", "))
    }
}

fn format_providers(providers: &[ProviderKey]) -> String {
    providers
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for LAU operations.
pub type Result<T> = std::result::Result<T, LauError>;
