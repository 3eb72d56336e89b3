//! Error types for the merge engine and the tooling built around it.

use thiserror::Error;

/// Rejection reason for a single `add_item` call.
///
/// A rejected item is never stored; records accumulated before the failing
/// call are left untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInputError {
    #[error("degenerate line: length {length:e} is below the minimum {min_length:e}")]
    DegenerateLine { length: f64, min_length: f64 },

    #[error("line has non-finite coordinates")]
    NonFiniteLine,

    #[error("thickness {0} must be finite and non-negative")]
    InvalidThickness(f64),

    #[error("engine is full: at most {limit} items can be stored")]
    CapacityExceeded { limit: u64 },
}

/// Crate-level error used by configuration loading, I/O and the CLI.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid input for item '{item}': {source}")]
    InvalidInput {
        item: String,
        #[source]
        source: InvalidInputError,
    },

    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error on {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Error::Io {
            path: path.display().to_string(),
            source,
        }
    }

    pub(crate) fn json(path: &std::path::Path, source: serde_json::Error) -> Self {
        Error::Json {
            path: path.display().to_string(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
