//! Typed graph construction and loading errors.

use std::path::PathBuf;

use thiserror::Error;

/// Failure while building or loading a graph.
///
/// All variants are raised before any search runs; a successfully built graph
/// is never invalid afterwards.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Reading a cost file failed.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A DIMACS line could not be parsed.
    #[error("{path}:{line}: {detail}")]
    Parse {
        path: PathBuf,
        line: usize,
        detail: String,
    },

    /// No cost files were supplied.
    #[error("at least one cost file is required")]
    NoCostFiles,

    /// Cost files disagree on vertex count or arc list.
    #[error("cost file {path} does not match the first file's topology: {detail}")]
    TopologyMismatch { path: PathBuf, detail: String },

    /// An edge cost has the wrong number of objectives.
    #[error("edge {from}->{to} has {actual} objectives, graph has {expected}")]
    DimensionMismatch {
        from: usize,
        to: usize,
        expected: usize,
        actual: usize,
    },

    /// An edge cost is negative, NaN or infinite.
    #[error("edge {from}->{to} has an invalid cost component")]
    InvalidCost { from: usize, to: usize },

    /// An edge endpoint is outside the declared vertex range.
    #[error("edge {from}->{to} references a vertex outside 0..{num_vertices}")]
    VertexOutOfRange {
        from: usize,
        to: usize,
        num_vertices: usize,
    },

    /// Grid layers do not share one shape.
    #[error("grid layer {layer} is {actual_rows}x{actual_cols}, expected {rows}x{cols}")]
    GridShapeMismatch {
        layer: usize,
        rows: usize,
        cols: usize,
        actual_rows: usize,
        actual_cols: usize,
    },

    /// Grid connectivity other than 4 or 8.
    #[error("unsupported grid connectivity {0} (expected 4 or 8)")]
    UnsupportedConnectivity(u8),
}
