//! Adjacency-list graph with forward and reverse arc lists.

use std::borrow::Cow;

use crate::cost::CostVector;
use crate::error::GraphError;
use crate::graph::{Edge, PlannerGraph, VertexId};

/// Sparse directed graph with vector-valued arc costs.
///
/// Both directions are materialized at insertion time so that
/// [`PlannerGraph::predecessors`] is as cheap as `successors`.
#[derive(Debug, Clone)]
pub struct SparseGraph {
    dims: usize,
    out_arcs: Vec<Vec<Edge>>,
    in_arcs: Vec<Vec<Edge>>,
    num_arcs: usize,
}

impl SparseGraph {
    /// Create a graph with `num_vertices` isolated vertices and `dims` objectives.
    #[must_use]
    pub fn new(num_vertices: usize, dims: usize) -> Self {
        Self {
            dims,
            out_arcs: vec![Vec::new(); num_vertices],
            in_arcs: vec![Vec::new(); num_vertices],
            num_arcs: 0,
        }
    }

    /// Add the directed arc `from -> to`.
    ///
    /// # Errors
    ///
    /// - [`GraphError::VertexOutOfRange`] if either endpoint is not a vertex.
    /// - [`GraphError::DimensionMismatch`] if `cost` has the wrong dimension.
    /// - [`GraphError::InvalidCost`] if any component is negative or non-finite.
    pub fn add_arc(
        &mut self,
        from: VertexId,
        to: VertexId,
        cost: CostVector,
    ) -> Result<(), GraphError> {
        let n = self.out_arcs.len();
        if from >= n || to >= n {
            return Err(GraphError::VertexOutOfRange {
                from,
                to,
                num_vertices: n,
            });
        }
        if cost.dims() != self.dims {
            return Err(GraphError::DimensionMismatch {
                from,
                to,
                expected: self.dims,
                actual: cost.dims(),
            });
        }
        if !cost.is_valid_edge_cost() {
            return Err(GraphError::InvalidCost { from, to });
        }
        self.in_arcs[to].push(Edge {
            vertex: from,
            cost: cost.clone(),
        });
        self.out_arcs[from].push(Edge { vertex: to, cost });
        self.num_arcs += 1;
        Ok(())
    }

    /// Add `a -> b` and `b -> a` with the same cost.
    ///
    /// # Errors
    ///
    /// Same as [`SparseGraph::add_arc`].
    pub fn add_edge(&mut self, a: VertexId, b: VertexId, cost: CostVector) -> Result<(), GraphError> {
        self.add_arc(a, b, cost.clone())?;
        self.add_arc(b, a, cost)
    }

    /// Total number of directed arcs.
    #[must_use]
    pub fn num_arcs(&self) -> usize {
        self.num_arcs
    }

    /// Out-degree of `v` (0 for ids outside the graph).
    #[must_use]
    pub fn out_degree(&self, v: VertexId) -> usize {
        self.out_arcs.get(v).map_or(0, Vec::len)
    }

    /// Append synthetic objectives to every arc.
    ///
    /// - `add_degree_cost`: the new component is the mean out-degree of the
    ///   arc's two endpoints.
    /// - `add_length_cost`: the new component is `1` (hop count).
    ///
    /// Degrees are measured before any arc is rewritten, so the result does
    /// not depend on iteration order.
    pub fn expand_cost_dims(&mut self, add_degree_cost: bool, add_length_cost: bool) {
        if !add_degree_cost && !add_length_cost {
            return;
        }
        let degrees: Vec<usize> = (0..self.num_vertices()).map(|v| self.out_degree(v)).collect();
        #[allow(clippy::cast_precision_loss)]
        let extend = |tail: VertexId, head: VertexId, cost: &CostVector| -> CostVector {
            let mut c = cost.as_slice().to_vec();
            if add_degree_cost {
                c.push((degrees[tail] + degrees[head]) as f64 / 2.0);
            }
            if add_length_cost {
                c.push(1.0);
            }
            CostVector::from(c)
        };
        for (u, arcs) in self.out_arcs.iter_mut().enumerate() {
            for arc in arcs.iter_mut() {
                arc.cost = extend(u, arc.vertex, &arc.cost);
            }
        }
        for (v, arcs) in self.in_arcs.iter_mut().enumerate() {
            for arc in arcs.iter_mut() {
                arc.cost = extend(arc.vertex, v, &arc.cost);
            }
        }
        self.dims += usize::from(add_degree_cost) + usize::from(add_length_cost);
    }

    /// Iterate all arcs as `(tail, head, cost)` in insertion order per tail.
    pub fn arcs(&self) -> impl Iterator<Item = (VertexId, VertexId, &CostVector)> + '_ {
        self.out_arcs
            .iter()
            .enumerate()
            .flat_map(|(u, arcs)| arcs.iter().map(move |e| (u, e.vertex, &e.cost)))
    }
}

impl PlannerGraph for SparseGraph {
    fn num_vertices(&self) -> usize {
        self.out_arcs.len()
    }

    fn cost_dims(&self) -> usize {
        self.dims
    }

    fn successors(&self, v: VertexId) -> Cow<'_, [Edge]> {
        Cow::Borrowed(self.out_arcs.get(v).map(Vec::as_slice).unwrap_or_default())
    }

    fn predecessors(&self, v: VertexId) -> Cow<'_, [Edge]> {
        Cow::Borrowed(self.in_arcs.get(v).map(Vec::as_slice).unwrap_or_default())
    }
}
