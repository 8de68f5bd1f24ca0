//! DIMACS shortest-path (`.gr`) files: one file per objective.
//!
//! # Format
//!
//! ```text
//! c comment line
//! p sp <n> <m>
//! a <tail> <head> <weight>
//! ```
//!
//! `n` is the highest vertex id; the graph allocates `n + 1` slots so that
//! 1-based files load without renumbering (slot 0 is then isolated).
//! Weights may be integers or decimals.
//!
//! A k-objective graph is `k` files over the same arc list in the same order.
//! Each file contributes one cost component per arc.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::cost::CostVector;
use crate::error::GraphError;
use crate::graph::sparse::SparseGraph;
use crate::graph::{PlannerGraph, VertexId};

/// One parsed cost file.
#[derive(Debug, Clone, PartialEq)]
pub struct DimacsLayer {
    /// Highest vertex id declared by the `p sp` line.
    pub max_vertex: usize,
    /// Arcs as `(tail, head, weight)` in file order.
    pub arcs: Vec<(VertexId, VertexId, f64)>,
}

/// Parse a single DIMACS cost file from text.
///
/// `path` is used for error messages only.
///
/// # Errors
///
/// Returns [`GraphError::Parse`] on malformed lines, arcs before the problem
/// line, a missing problem line, or an arc count that disagrees with it.
pub fn parse_layer(text: &str, path: &Path) -> Result<DimacsLayer, GraphError> {
    let parse_err = |line: usize, detail: String| GraphError::Parse {
        path: path.to_path_buf(),
        line,
        detail,
    };

    let mut header: Option<(usize, usize)> = None;
    let mut arcs = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let mut fields = raw.split_whitespace();
        match fields.next() {
            None | Some("c") => {}
            Some("p") => {
                if header.is_some() {
                    return Err(parse_err(line_no, "duplicate problem line".into()));
                }
                let kind = fields.next();
                let n = fields.next().and_then(|s| s.parse::<usize>().ok());
                let m = fields.next().and_then(|s| s.parse::<usize>().ok());
                match (kind, n, m) {
                    (Some("sp"), Some(n), Some(m)) => {
                        header = Some((n, m));
                        arcs.reserve(m);
                    }
                    _ => {
                        return Err(parse_err(
                            line_no,
                            format!("expected `p sp <n> <m>`, got `{raw}`"),
                        ))
                    }
                }
            }
            Some("a") => {
                if header.is_none() {
                    return Err(parse_err(line_no, "arc before problem line".into()));
                }
                let tail = fields.next().and_then(|s| s.parse::<usize>().ok());
                let head = fields.next().and_then(|s| s.parse::<usize>().ok());
                let weight = fields.next().and_then(|s| s.parse::<f64>().ok());
                match (tail, head, weight) {
                    (Some(t), Some(h), Some(w)) => arcs.push((t, h, w)),
                    _ => {
                        return Err(parse_err(
                            line_no,
                            format!("expected `a <tail> <head> <weight>`, got `{raw}`"),
                        ))
                    }
                }
            }
            Some(other) => {
                return Err(parse_err(line_no, format!("unknown line type `{other}`")));
            }
        }
    }

    let Some((max_vertex, declared_arcs)) = header else {
        return Err(parse_err(0, "missing problem line".into()));
    };
    if arcs.len() != declared_arcs {
        return Err(parse_err(
            0,
            format!(
                "problem line declares {declared_arcs} arcs, file has {}",
                arcs.len()
            ),
        ));
    }
    Ok(DimacsLayer { max_vertex, arcs })
}

/// Load a k-objective graph from `k` DIMACS files.
///
/// # Errors
///
/// - [`GraphError::NoCostFiles`] if `paths` is empty.
/// - [`GraphError::Io`] / [`GraphError::Parse`] for unreadable or malformed files.
/// - [`GraphError::TopologyMismatch`] if files disagree on arcs.
/// - Any error from [`SparseGraph::add_arc`].
pub fn load_graph<P: AsRef<Path>>(paths: &[P]) -> Result<SparseGraph, GraphError> {
    let mut layers = Vec::with_capacity(paths.len());
    for p in paths {
        let path = p.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| GraphError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        layers.push((path.to_path_buf(), parse_layer(&text, path)?));
    }
    let graph = combine_layers(&layers)?;
    tracing::debug!(
        vertices = graph.num_vertices(),
        arcs = graph.num_arcs(),
        dims = layers.len(),
        "loaded DIMACS graph"
    );
    Ok(graph)
}

/// Merge parsed layers into one graph, one objective per layer.
///
/// # Errors
///
/// See [`load_graph`].
pub fn combine_layers(layers: &[(PathBuf, DimacsLayer)]) -> Result<SparseGraph, GraphError> {
    let Some((_, first)) = layers.first() else {
        return Err(GraphError::NoCostFiles);
    };

    for (path, layer) in &layers[1..] {
        if layer.max_vertex != first.max_vertex || layer.arcs.len() != first.arcs.len() {
            return Err(GraphError::TopologyMismatch {
                path: path.clone(),
                detail: format!(
                    "declares {} vertices / {} arcs, expected {} / {}",
                    layer.max_vertex,
                    layer.arcs.len(),
                    first.max_vertex,
                    first.arcs.len()
                ),
            });
        }
        if let Some(i) = layer
            .arcs
            .iter()
            .zip(&first.arcs)
            .position(|(a, b)| a.0 != b.0 || a.1 != b.1)
        {
            return Err(GraphError::TopologyMismatch {
                path: path.clone(),
                detail: format!(
                    "arc #{i} is {}->{}, expected {}->{}",
                    layer.arcs[i].0, layer.arcs[i].1, first.arcs[i].0, first.arcs[i].1
                ),
            });
        }
    }

    let mut graph = SparseGraph::new(first.max_vertex + 1, layers.len());
    for (i, &(tail, head, _)) in first.arcs.iter().enumerate() {
        let cost: Vec<f64> = layers.iter().map(|(_, l)| l.arcs[i].2).collect();
        graph.add_arc(tail, head, CostVector::from(cost))?;
    }
    Ok(graph)
}

/// Render objective `dim` of `graph` as DIMACS text.
///
/// The problem line declares `num_vertices - 1` as the highest id, so the
/// output loads back into a graph of the same size.
#[must_use]
pub fn render_layer(graph: &SparseGraph, dim: usize, comment: &str) -> String {
    let mut out = String::new();
    for line in comment.lines() {
        let _ = writeln!(out, "c {line}");
    }
    let _ = writeln!(
        out,
        "p sp {} {}",
        graph.num_vertices().saturating_sub(1),
        graph.num_arcs()
    );
    for (tail, head, cost) in graph.arcs() {
        let _ = writeln!(out, "a {tail} {head} {}", cost[dim]);
    }
    out
}
