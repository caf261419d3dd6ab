use std::path::PathBuf;

use thiserror::Error;

/// Failure to materialize the point store. Fatal at startup.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read points from '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed point data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Rejection of a proximity query's parameters.
///
/// The `Display` text is returned verbatim to HTTP clients.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("Must be a valid integer: {0}")]
    InvalidInteger(String),
}

impl QueryError {
    /// Name of the offending parameter.
    pub fn parameter(&self) -> &str {
        match self {
            QueryError::MissingParameter(name) | QueryError::InvalidInteger(name) => name,
        }
    }
}
