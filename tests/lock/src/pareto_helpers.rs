//! Ground truth by exhaustive enumeration.
//!
//! With non-negative costs every Pareto-optimal cost vector is achieved by a
//! simple path, so enumerating simple paths on small graphs gives the exact
//! front the engine must reproduce.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use emoa_kernel::cost::CostVector;
use emoa_kernel::graph::sparse::SparseGraph;
use emoa_kernel::graph::{PlannerGraph, VertexId};
use emoa_search::SearchResult;

/// Directed random graph with integer costs in `1..=max_cost`.
///
/// Integer costs keep every sum exact, so cost sets compare with `==`.
///
/// # Panics
///
/// Panics if `max_cost` is 0 or `arc_prob` is outside `[0, 1]`.
#[must_use]
pub fn random_graph(
    seed: u64,
    num_vertices: usize,
    dims: usize,
    arc_prob: f64,
    max_cost: u32,
) -> SparseGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut g = SparseGraph::new(num_vertices, dims);
    for u in 0..num_vertices {
        for v in 0..num_vertices {
            if u != v && rng.gen_bool(arc_prob) {
                let cost: Vec<f64> = (0..dims)
                    .map(|_| f64::from(rng.gen_range(1..=max_cost)))
                    .collect();
                g.add_arc(u, v, CostVector::from(cost))
                    .expect("generated arc is valid");
            }
        }
    }
    g
}

/// Cost of every simple `start` to `goal` path.
#[must_use]
pub fn simple_path_costs(graph: &dyn PlannerGraph, start: VertexId, goal: VertexId) -> Vec<CostVector> {
    let mut out = Vec::new();
    let mut on_path = vec![false; graph.num_vertices()];
    on_path[start] = true;
    walk(
        graph,
        start,
        goal,
        &CostVector::zeros(graph.cost_dims()),
        &mut on_path,
        &mut out,
    );
    out
}

fn walk(
    graph: &dyn PlannerGraph,
    v: VertexId,
    goal: VertexId,
    g: &CostVector,
    on_path: &mut [bool],
    out: &mut Vec<CostVector>,
) {
    if v == goal {
        out.push(g.clone());
        return;
    }
    for e in graph.successors(v).iter() {
        if on_path[e.vertex] {
            continue;
        }
        on_path[e.vertex] = true;
        walk(graph, e.vertex, goal, &(g + &e.cost), on_path, out);
        on_path[e.vertex] = false;
    }
}

/// Distinct non-dominated vectors of `costs`, in lexicographic order.
#[must_use]
pub fn pareto_filter(costs: &[CostVector]) -> Vec<CostVector> {
    let mut front: Vec<CostVector> = costs
        .iter()
        .filter(|c| !costs.iter().any(|d| d.dominates(c)))
        .cloned()
        .collect();
    front.sort_by(CostVector::lex_cmp);
    front.dedup();
    front
}

/// Exact Pareto front of `start` to `goal` costs.
#[must_use]
pub fn brute_force_front(graph: &dyn PlannerGraph, start: VertexId, goal: VertexId) -> Vec<CostVector> {
    pareto_filter(&simple_path_costs(graph, start, goal))
}

/// Solution costs of `result`, in lexicographic order.
#[must_use]
pub fn solution_costs(result: &SearchResult) -> Vec<CostVector> {
    let mut costs: Vec<CostVector> = result.solutions.iter().map(|s| s.cost.clone()).collect();
    costs.sort_by(CostVector::lex_cmp);
    costs
}

/// Sum of arc costs along `path`, or `None` if a step is not an arc.
///
/// Parallel arcs resolve to the first match in successor order.
#[must_use]
pub fn path_cost(graph: &dyn PlannerGraph, path: &[VertexId]) -> Option<CostVector> {
    let mut total = CostVector::zeros(graph.cost_dims());
    for pair in path.windows(2) {
        let arcs = graph.successors(pair[0]);
        let edge = arcs.iter().find(|e| e.vertex == pair[1])?;
        total = &total + &edge.cost;
    }
    Some(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_drops_dominated_and_duplicates() {
        let costs = vec![
            CostVector::from([5.0, 6.0]),
            CostVector::from([6.0, 5.0]),
            CostVector::from([6.0, 7.0]),
            CostVector::from([5.0, 6.0]),
        ];
        assert_eq!(
            pareto_filter(&costs),
            vec![CostVector::from([5.0, 6.0]), CostVector::from([6.0, 5.0])]
        );
    }

    #[test]
    fn random_graph_is_reproducible() {
        let a = random_graph(3, 6, 2, 0.4, 5);
        let b = random_graph(3, 6, 2, 0.4, 5);
        assert_eq!(a.num_arcs(), b.num_arcs());
        for v in 0..6 {
            assert_eq!(a.successors(v), b.successors(v));
        }
    }
}
