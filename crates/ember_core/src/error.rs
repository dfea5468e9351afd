//! Host-level errors.
//!
//! Malformed Ember source never produces one of these; syntax problems are
//! reported as diagnostics. `EmberError` covers the surroundings: reading
//! files, loading configuration and writing structured output.

use std::path::PathBuf;

pub type Result<T, E = EmberError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum EmberError {
    #[error("failed to read '{path}': {source}")]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration in '{path}': {message}")]
    Config { path: PathBuf, message: String },

    #[error("failed to serialize output: {0}")]
    Serialize(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl EmberError {
    pub fn read_source(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EmberError::ReadSource {
            path: path.into(),
            source,
        }
    }
}
