//! Harness errors: file I/O, config and result-file parsing, plus the
//! kernel and search errors they wrap.

use std::path::PathBuf;

use thiserror::Error;

use emoa_kernel::error::GraphError;
use emoa_search::SearchError;

/// Failure during a harness operation.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Search(#[from] SearchError),

    /// Reading or writing a file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON file could not be encoded or decoded.
    #[error("JSON error on {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The run configuration is unusable.
    #[error("invalid run config: {detail}")]
    InvalidConfig { detail: String },

    /// A result text file is malformed.
    #[error("result file line {line}: {detail}")]
    ResultFormat { line: usize, detail: String },

    /// The result digest could not be computed.
    #[error("result digest failed: {0}")]
    Digest(#[source] serde_json::Error),
}

impl HarnessError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}
