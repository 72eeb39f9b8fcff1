//! Detection trait and result types.

use std::path::{Path, PathBuf};

use crate::registry::ProviderKey;

/// Trait for ambient provider detection.
pub trait ProviderDetector {
    /// Every provider signalled in the destination, in priority order.
    ///
    /// An empty list means the environment is unknown.
    fn detect(&self, destination: &Path) -> Vec<Detection>;

    /// The highest-priority signal, if any.
    fn detect_first(&self, destination: &Path) -> Option<Detection> {
        self.detect(destination).into_iter().next()
    }
}

/// A provider signal found in the destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    /// The provider that was signalled.
    pub provider: ProviderKey,
    /// Marker path relative to the destination that produced the signal.
    pub marker: PathBuf,
}

impl Detection {
    /// Create a detection for a provider and its marker.
    pub fn new(provider: ProviderKey, marker: impl Into<PathBuf>) -> Self {
        Self {
            provider,
            marker: marker.into(),
        }
    }
}

/// A detector that never signals anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDetection;

impl ProviderDetector for NoDetection {
    fn detect(&self, _destination: &Path) -> Vec<Detection> {
        Vec::new()
    }
}
