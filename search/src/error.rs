//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Runtime terminations
//! (exhaustion, budget limits, unreachable goals) are expressed via
//! [`crate::result::TerminationReason`] and always produce a
//! [`crate::result::SearchResult`].

use thiserror::Error;

use emoa_kernel::graph::VertexId;

/// Which query endpoint failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// Typed failure for pre-flight search validation.
///
/// These errors are returned before search execution begins. No result is
/// produced because no label was created.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// `search` or `init_heuristic` was called before `set_graph`.
    #[error("no graph has been set")]
    GraphNotSet,

    /// A query endpoint is not a vertex of the graph.
    #[error("{endpoint} vertex {vertex} is not in the graph (0..{num_vertices})")]
    VertexOutOfRange {
        endpoint: Endpoint,
        vertex: VertexId,
        num_vertices: usize,
    },

    /// The graph has fewer than two objectives.
    #[error("multi-objective search needs at least 2 objectives, graph has {dims}")]
    TooFewObjectives { dims: usize },

    /// The search policy is not usable.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
}
