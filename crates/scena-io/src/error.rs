//! Error types for module and reader registration.

use scena_scene::SceneError;
use std::path::PathBuf;

/// IO layer error.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// A module with the same title is already registered.
    #[error("module already registered: {title}")]
    DuplicateModule {
        /// The conflicting title.
        title: String,
    },

    /// Reader registration referenced a module that does not exist.
    #[error("module not found: {title}")]
    ModuleNotFound {
        /// The missing title.
        title: String,
    },

    /// No registered reader claims the file.
    #[error("no reader can load {path}")]
    UnsupportedFormat {
        /// The file nobody claimed.
        path: PathBuf,
    },

    /// The chosen reader failed while loading.
    #[error("load failed: {reason}")]
    LoadFailed {
        /// Reader-supplied failure description.
        reason: String,
    },

    /// A scene lifecycle operation performed by a reader failed.
    #[error("scene error during load: {0}")]
    Scene(#[from] SceneError),
}

impl IoError {
    /// Whether retrying with different inputs can succeed.
    #[inline]
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Scene(e) => e.is_recoverable(),
            Self::DuplicateModule { .. }
            | Self::ModuleNotFound { .. }
            | Self::UnsupportedFormat { .. }
            | Self::LoadFailed { .. } => true,
        }
    }
}
