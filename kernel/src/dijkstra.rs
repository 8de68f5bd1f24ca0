//! Single-objective shortest distances, computed backward from a goal.
//!
//! This is the subroutine behind the multi-objective heuristic: one run per
//! cost dimension yields, for every vertex, the exact cheapest cost to the
//! goal in that dimension alone.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::graph::{PlannerGraph, VertexId};

/// Heap entry ordered by distance, then vertex id for determinism.
#[derive(Debug, Clone, Copy, PartialEq)]
struct QueueEntry {
    dist: f64,
    vertex: VertexId,
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dist
            .total_cmp(&other.dist)
            .then(self.vertex.cmp(&other.vertex))
    }
}

/// Shortest distance from every vertex to `goal` using only objective `dim`.
///
/// Traverses [`PlannerGraph::predecessors`], so arc directions are respected.
/// Unreachable vertices get `f64::INFINITY`. An out-of-range `goal` yields an
/// all-infinite vector.
///
/// # Panics
///
/// Panics if `dim >= graph.cost_dims()` and the graph has arcs into a
/// reachable vertex.
#[must_use]
pub fn distances_to(graph: &dyn PlannerGraph, goal: VertexId, dim: usize) -> Vec<f64> {
    let n = graph.num_vertices();
    let mut dist = vec![f64::INFINITY; n];
    if goal >= n {
        return dist;
    }

    let mut heap = BinaryHeap::new();
    dist[goal] = 0.0;
    heap.push(Reverse(QueueEntry {
        dist: 0.0,
        vertex: goal,
    }));

    while let Some(Reverse(QueueEntry { dist: d, vertex: v })) = heap.pop() {
        if d > dist[v] {
            continue;
        }
        for arc in graph.predecessors(v).iter() {
            let candidate = d + arc.cost[dim];
            if candidate < dist[arc.vertex] {
                dist[arc.vertex] = candidate;
                heap.push(Reverse(QueueEntry {
                    dist: candidate,
                    vertex: arc.vertex,
                }));
            }
        }
    }
    dist
}
