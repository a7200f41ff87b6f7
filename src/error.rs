//! Error types for the goal tracker library

use std::path::Path;
use thiserror::Error;

/// Errors raised while reading goals or reading/writing goal metadata
#[derive(Debug, Error)]
pub enum TrackerError {
    /// A file I/O operation failed
    #[error("I/O error at {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// The metadata document could not be encoded or decoded
    #[error("metadata JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A metadata record breaks the completed/date/time/timezone invariant
    #[error("inconsistent metadata record for goal '{goal}'")]
    InconsistentRecord { goal: String },
}

impl TrackerError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
