//! Multi-objective potentials: one backward Dijkstra per objective.
//!
//! `h(v)[i]` is the exact single-objective distance from `v` to the goal in
//! objective `i`, so `h` is admissible and consistent for the vector problem.

use std::time::{Duration, Instant};

use emoa_kernel::cost::CostVector;
use emoa_kernel::dijkstra::distances_to;
use emoa_kernel::graph::{PlannerGraph, VertexId};

/// Per-vertex lower-bound vectors toward one goal.
#[derive(Debug, Clone)]
pub struct PotentialHeuristic {
    goal: VertexId,
    dims: usize,
    /// `potentials[v]`, one component per objective.
    potentials: Vec<CostVector>,
    /// Returned for vertices outside the graph.
    unreachable: CostVector,
    build_time: Duration,
}

impl PotentialHeuristic {
    /// Run one backward single-objective search per dimension of `graph`.
    #[must_use]
    pub fn build(graph: &dyn PlannerGraph, goal: VertexId) -> Self {
        let span = tracing::debug_span!("init_heuristic", goal, dims = graph.cost_dims());
        let _enter = span.enter();

        let started = Instant::now();
        let dims = graph.cost_dims();
        let per_dim: Vec<Vec<f64>> = (0..dims).map(|dim| distances_to(graph, goal, dim)).collect();
        let potentials: Vec<CostVector> = (0..graph.num_vertices())
            .map(|v| CostVector::from(per_dim.iter().map(|d| d[v]).collect::<Vec<_>>()))
            .collect();
        let build_time = started.elapsed();

        let reachable = potentials.iter().filter(|h| !h.has_infinite()).count();
        tracing::debug!(
            reachable,
            elapsed_us = u64::try_from(build_time.as_micros()).unwrap_or(u64::MAX),
            "heuristic potentials built"
        );

        Self {
            goal,
            dims,
            potentials,
            unreachable: CostVector::infinite(dims),
            build_time,
        }
    }

    /// Goal these potentials point to.
    #[must_use]
    pub fn goal(&self) -> VertexId {
        self.goal
    }

    /// Number of objectives.
    #[must_use]
    pub fn dims(&self) -> usize {
        self.dims
    }

    /// Wall-clock time spent in [`PotentialHeuristic::build`].
    #[must_use]
    pub fn build_time(&self) -> Duration {
        self.build_time
    }

    /// Lower-bound vector `h(v)`. Out-of-range vertices are all-infinite.
    #[must_use]
    pub fn h(&self, v: VertexId) -> &CostVector {
        self.potentials.get(v).unwrap_or(&self.unreachable)
    }

    /// Whether the goal is reachable from `v` in every objective.
    #[must_use]
    pub fn is_reachable(&self, v: VertexId) -> bool {
        !self.h(v).has_infinite()
    }
}
