//! Edge-case lock: degenerate queries, unreachable goals, budgets,
//! pre-flight rejection, and admissibility of the potentials.

use std::sync::Arc;
use std::time::Duration;

use emoa_kernel::cost::CostVector;
use emoa_kernel::graph::grid::GridGraph;
use emoa_kernel::graph::sparse::SparseGraph;
use emoa_kernel::graph::PlannerGraph;
use emoa_search::{
    run_boalex, BoaLex, Endpoint, PotentialHeuristic, SearchError, SearchPolicy,
    TerminationReason,
};
use lock_tests::pareto_helpers::{random_graph, simple_path_costs};

const LIMIT: Duration = Duration::from_secs(30);

/// 0 -> 1 -> 2 -> 3, unit costs.
fn chain() -> Arc<dyn PlannerGraph> {
    let mut g = SparseGraph::new(4, 2);
    for v in 0..3 {
        g.add_arc(v, v + 1, CostVector::from([1.0, 1.0])).unwrap();
    }
    Arc::new(g)
}

// ---------------------------------------------------------------------------
// Degenerate queries
// ---------------------------------------------------------------------------

#[test]
fn start_is_goal_on_every_vertex() {
    let graph: Arc<dyn PlannerGraph> = Arc::new(random_graph(5, 8, 3, 0.3, 4));
    for v in 0..8 {
        let r = run_boalex(graph.clone(), v, v, LIMIT, SearchPolicy::default()).unwrap();
        assert_eq!(r.reason, TerminationReason::StartIsGoal);
        assert_eq!(r.solutions.len(), 1);
        assert_eq!(r.solutions[0].path, vec![v]);
        assert_eq!(r.solutions[0].cost, CostVector::zeros(3));
    }
}

#[test]
fn unreachable_goal_is_success_with_no_solutions() {
    // two components: {0, 1} and {2, 3}
    let mut g = SparseGraph::new(4, 2);
    g.add_edge(0, 1, CostVector::from([1.0, 2.0])).unwrap();
    g.add_edge(2, 3, CostVector::from([2.0, 1.0])).unwrap();
    let r = run_boalex(Arc::new(g), 0, 3, LIMIT, SearchPolicy::default()).unwrap();
    assert_eq!(r.reason, TerminationReason::GoalUnreachable);
    assert!(r.reason.is_complete());
    assert!(!r.timeout);
    assert!(r.solutions.is_empty());
}

#[test]
fn walled_off_grid_goal_is_unreachable() {
    let inf = f64::INFINITY;
    let layer = vec![
        vec![1.0, inf, 1.0],
        vec![1.0, inf, 1.0],
        vec![1.0, inf, 1.0],
    ];
    let grid = GridGraph::new(vec![layer.clone(), layer], 8).unwrap();
    let r = run_boalex(Arc::new(grid), 0, 8, LIMIT, SearchPolicy::default()).unwrap();
    assert_eq!(r.reason, TerminationReason::GoalUnreachable);
}

// ---------------------------------------------------------------------------
// Budgets
// ---------------------------------------------------------------------------

#[test]
fn zero_time_budget_sets_timeout_flag() {
    let r = run_boalex(chain(), 0, 3, Duration::ZERO, SearchPolicy::default()).unwrap();
    assert_eq!(r.reason, TerminationReason::TimeBudgetExceeded);
    assert!(r.timeout);
    assert!(r.solutions.is_empty());
    assert_eq!(r.stats.n_expanded, 0);
}

#[test]
fn start_is_goal_ignores_zero_budget() {
    let r = run_boalex(chain(), 2, 2, Duration::ZERO, SearchPolicy::default()).unwrap();
    assert_eq!(r.reason, TerminationReason::StartIsGoal);
    assert!(!r.timeout);
}

#[test]
fn single_label_budget_stops_at_first_generation() {
    let policy = SearchPolicy {
        max_labels: Some(1),
        ..SearchPolicy::default()
    };
    let r = run_boalex(chain(), 0, 3, LIMIT, policy).unwrap();
    assert_eq!(r.reason, TerminationReason::LabelBudgetExceeded);
    assert_eq!(r.stats.n_generated, 1);
    assert_eq!(r.stats.n_expanded, 1);
}

// ---------------------------------------------------------------------------
// Pre-flight rejection
// ---------------------------------------------------------------------------

#[test]
fn invalid_queries_are_rejected_without_a_result() {
    let mut engine = BoaLex::new(SearchPolicy::default()).unwrap();
    assert_eq!(
        engine.search(0, 1, LIMIT).unwrap_err(),
        SearchError::GraphNotSet
    );

    engine.set_graph(Arc::new(random_graph(1, 5, 2, 0.5, 3)));
    let err = engine.search(0, 5, LIMIT).unwrap_err();
    assert_eq!(
        err,
        SearchError::VertexOutOfRange {
            endpoint: Endpoint::Goal,
            vertex: 5,
            num_vertices: 5,
        }
    );
    assert!(err.to_string().contains("goal vertex 5"));
    assert!(engine.result().is_none());

    engine.set_graph(Arc::new(random_graph(1, 5, 1, 0.5, 3)));
    assert_eq!(
        engine.search(0, 4, LIMIT).unwrap_err(),
        SearchError::TooFewObjectives { dims: 1 }
    );
}

// ---------------------------------------------------------------------------
// Potentials
// ---------------------------------------------------------------------------

#[test]
fn potentials_equal_per_objective_shortest_distances() {
    for seed in 0..25 {
        let g = random_graph(seed, 8, 3, 0.35, 6);
        let goal = 7;
        let h = PotentialHeuristic::build(&g, goal);
        for v in 0..8 {
            let costs = simple_path_costs(&g, v, goal);
            let hv = h.h(v);
            if costs.is_empty() && v != goal {
                assert!(hv.has_infinite(), "seed {seed}: {v} cannot reach goal");
                continue;
            }
            for dim in 0..3 {
                let best = costs
                    .iter()
                    .map(|c| c[dim])
                    .fold(f64::INFINITY, f64::min);
                assert_eq!(hv[dim], best, "seed {seed} v {v} dim {dim}");
            }
        }
    }
}
