//! Grid worlds: `k` cost layers over a rectangular cell grid.
//!
//! Cell `(row, col)` is vertex `row * cols + col`. Moving into a cell costs
//! that cell's value in every layer. A cell whose value is non-finite in any
//! layer is an obstacle: it has no arcs in or out.

use std::borrow::Cow;

use crate::cost::CostVector;
use crate::error::GraphError;
use crate::graph::sparse::SparseGraph;
use crate::graph::{Edge, PlannerGraph, VertexId};

const OFFSETS_4: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const OFFSETS_8: [(isize, isize); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// A 4- or 8-connected grid with one cost layer per objective.
#[derive(Debug, Clone)]
pub struct GridGraph {
    rows: usize,
    cols: usize,
    /// `layers[d][row][col]`.
    layers: Vec<Vec<Vec<f64>>>,
    offsets: &'static [(isize, isize)],
}

impl GridGraph {
    /// Build from cost layers.
    ///
    /// # Errors
    ///
    /// - [`GraphError::UnsupportedConnectivity`] unless `connectivity` is 4 or 8.
    /// - [`GraphError::GridShapeMismatch`] if layers are ragged or differ in shape.
    /// - [`GraphError::NoCostFiles`] if `layers` is empty.
    /// - [`GraphError::InvalidCost`] if a cell holds a negative value.
    pub fn new(layers: Vec<Vec<Vec<f64>>>, connectivity: u8) -> Result<Self, GraphError> {
        let offsets: &'static [(isize, isize)] = match connectivity {
            4 => &OFFSETS_4,
            8 => &OFFSETS_8,
            other => return Err(GraphError::UnsupportedConnectivity(other)),
        };
        let Some(first) = layers.first() else {
            return Err(GraphError::NoCostFiles);
        };
        let rows = first.len();
        let cols = first.first().map_or(0, Vec::len);
        for (layer, grid) in layers.iter().enumerate() {
            let ragged = grid.iter().map(Vec::len).find(|&len| len != cols);
            if grid.len() != rows || ragged.is_some() {
                return Err(GraphError::GridShapeMismatch {
                    layer,
                    rows,
                    cols,
                    actual_rows: grid.len(),
                    actual_cols: ragged.unwrap_or(cols),
                });
            }
        }
        let graph = Self {
            rows,
            cols,
            layers,
            offsets,
        };
        for v in 0..graph.num_vertices() {
            let (r, c) = graph.cell(v);
            if graph.layers.iter().any(|l| l[r][c] < 0.0) {
                return Err(GraphError::InvalidCost { from: v, to: v });
            }
        }
        Ok(graph)
    }

    /// Grid height.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Grid width.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Vertex id of `(row, col)`.
    #[must_use]
    pub fn vertex(&self, row: usize, col: usize) -> VertexId {
        row * self.cols + col
    }

    /// `(row, col)` of vertex `v`.
    #[must_use]
    pub fn cell(&self, v: VertexId) -> (usize, usize) {
        (v / self.cols, v % self.cols)
    }

    /// True if `v` is an obstacle cell.
    #[must_use]
    pub fn is_blocked(&self, v: VertexId) -> bool {
        let (r, c) = self.cell(v);
        self.layers.iter().any(|l| !l[r][c].is_finite())
    }

    fn entry_cost(&self, row: usize, col: usize) -> CostVector {
        CostVector::from(self.layers.iter().map(|l| l[row][col]).collect::<Vec<_>>())
    }

    fn neighbors(&self, v: VertexId) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (r, c) = self.cell(v);
        self.offsets.iter().filter_map(move |&(dr, dc)| {
            let nr = r.checked_add_signed(dr)?;
            let nc = c.checked_add_signed(dc)?;
            (nr < self.rows && nc < self.cols).then_some((nr, nc))
        })
    }

    /// Materialize as a [`SparseGraph`] with the same vertex numbering and
    /// arc order.
    ///
    /// # Errors
    ///
    /// Propagates [`SparseGraph::add_arc`] failures (none for a valid grid).
    pub fn to_sparse(&self) -> Result<SparseGraph, GraphError> {
        let mut g = SparseGraph::new(self.num_vertices(), self.cost_dims());
        for u in 0..self.num_vertices() {
            for e in self.successors(u).iter() {
                g.add_arc(u, e.vertex, e.cost.clone())?;
            }
        }
        Ok(g)
    }
}

impl PlannerGraph for GridGraph {
    fn num_vertices(&self) -> usize {
        self.rows * self.cols
    }

    fn cost_dims(&self) -> usize {
        self.layers.len()
    }

    fn successors(&self, v: VertexId) -> Cow<'_, [Edge]> {
        if !self.has_vertex(v) || self.is_blocked(v) {
            return Cow::Borrowed(&[]);
        }
        let arcs: Vec<Edge> = self
            .neighbors(v)
            .map(|(r, c)| (self.vertex(r, c), r, c))
            .filter(|&(w, _, _)| !self.is_blocked(w))
            .map(|(w, r, c)| Edge {
                vertex: w,
                cost: self.entry_cost(r, c),
            })
            .collect();
        Cow::Owned(arcs)
    }

    fn predecessors(&self, v: VertexId) -> Cow<'_, [Edge]> {
        if !self.has_vertex(v) || self.is_blocked(v) {
            return Cow::Borrowed(&[]);
        }
        let (r, c) = self.cell(v);
        let cost = self.entry_cost(r, c);
        // Offsets are symmetric, so v's neighbors are exactly the cells that
        // list v as a neighbor.
        let arcs: Vec<Edge> = self
            .neighbors(v)
            .map(|(nr, nc)| self.vertex(nr, nc))
            .filter(|&u| !self.is_blocked(u))
            .map(|u| Edge {
                vertex: u,
                cost: cost.clone(),
            })
            .collect();
        Cow::Owned(arcs)
    }
}
