//! Graph access for multi-objective planning.
//!
//! The search layer never sees a concrete graph type. It consumes
//! [`PlannerGraph`], which exposes forward successors (for expansion) and
//! reverse predecessors (for building backward heuristic potentials).

pub mod dimacs;
pub mod grid;
pub mod sparse;

use std::borrow::Cow;

use crate::cost::CostVector;

/// Vertex identifier. Dense, `0..num_vertices()`.
pub type VertexId = usize;

/// A directed arc endpoint with its cost vector.
///
/// For [`PlannerGraph::successors`] `vertex` is the arc's head; for
/// [`PlannerGraph::predecessors`] it is the arc's tail.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub vertex: VertexId,
    pub cost: CostVector,
}

/// Capability interface for graphs the planner can search.
///
/// # Contract
///
/// - Every returned cost has exactly `cost_dims()` finite, non-negative
///   components.
/// - Enumeration is deterministic: the same vertex yields the same edges in
///   the same order on every call.
/// - `predecessors(v)` contains `(u, c)` iff `successors(u)` contains `(v, c)`.
///
/// Graphs that store adjacency lists return them borrowed; graphs that
/// derive arcs on the fly return an owned list.
pub trait PlannerGraph: Send + Sync {
    /// Number of vertex slots. Valid ids are `0..num_vertices()`.
    fn num_vertices(&self) -> usize;

    /// Number of objectives `k` on every edge.
    fn cost_dims(&self) -> usize;

    /// Outgoing arcs of `v`.
    fn successors(&self, v: VertexId) -> Cow<'_, [Edge]>;

    /// Incoming arcs of `v`, reported by tail vertex.
    fn predecessors(&self, v: VertexId) -> Cow<'_, [Edge]>;

    /// Whether `v` is a valid vertex id.
    fn has_vertex(&self, v: VertexId) -> bool {
        v < self.num_vertices()
    }
}
