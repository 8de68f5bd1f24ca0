//! Runner lock: a grid world exported to DIMACS, searched through the
//! runner, gives the same front as searching the grid directly, and the
//! result text file reads back to the same solutions.

use std::sync::Arc;
use std::time::Duration;

use emoa_harness::result_file::read_result_text;
use emoa_harness::worlds::{export_grid, random_grid, GridSpec};
use emoa_harness::{run, HarnessError, RunConfig};
use emoa_kernel::graph::PlannerGraph;
use emoa_search::{run_boalex, FrontierKind, SearchPolicy, TerminationReason};
use lock_tests::pareto_helpers::solution_costs;

fn spec() -> GridSpec {
    GridSpec {
        rows: 8,
        cols: 9,
        dims: 2,
        max_cost: 9,
        obstacle_ratio: 0.1,
        connectivity: 4,
        seed: 99,
    }
}

#[test]
fn exported_grid_search_matches_direct_search() {
    let grid = random_grid(&spec()).unwrap();
    let goal = grid.num_vertices() - 1;
    let dir = tempfile::tempdir().unwrap();
    let cost_files = export_grid(&grid, dir.path(), "lock").unwrap();

    let direct = run_boalex(
        Arc::new(grid),
        0,
        goal,
        Duration::from_secs(30),
        SearchPolicy::default(),
    )
    .unwrap();

    let config = RunConfig {
        start: 0,
        goal,
        time_limit_secs: 30.0,
        cost_files,
        result_file: Some(dir.path().join("result.txt")),
        ..RunConfig::default()
    };
    let outcome = run(&config).unwrap();

    assert_eq!(outcome.result.reason, direct.reason);
    assert_eq!(solution_costs(&outcome.result), solution_costs(&direct));

    let parsed = read_result_text(&dir.path().join("result.txt")).unwrap();
    assert_eq!(parsed.solutions, outcome.result.solutions);
    assert_eq!(parsed.stats.n_generated, outcome.result.stats.n_generated);
    assert_eq!(parsed.stats.n_expanded, outcome.result.stats.n_expanded);
    assert_eq!(parsed.stats.n_dom_checks, outcome.result.stats.n_dom_checks);
}

#[test]
fn full_frontier_through_runner_agrees_with_lex() {
    let grid = random_grid(&GridSpec {
        dims: 3,
        seed: 7,
        ..spec()
    })
    .unwrap();
    let goal = grid.num_vertices() - 1;
    let dir = tempfile::tempdir().unwrap();
    let cost_files = export_grid(&grid, dir.path(), "tri").unwrap();

    let base = RunConfig {
        start: 0,
        goal,
        cost_files,
        ..RunConfig::default()
    };
    let lex = run(&base).unwrap();
    let full = run(&RunConfig {
        frontier: FrontierKind::Full,
        ..base
    })
    .unwrap();
    assert_eq!(solution_costs(&lex.result), solution_costs(&full.result));
}

#[test]
fn degree_and_length_objectives_extend_every_solution() {
    let grid = random_grid(&GridSpec {
        obstacle_ratio: 0.0,
        ..spec()
    })
    .unwrap();
    let goal = grid.num_vertices() - 1;
    let dir = tempfile::tempdir().unwrap();
    let cost_files = export_grid(&grid, dir.path(), "aug").unwrap();

    let outcome = run(&RunConfig {
        start: 0,
        goal,
        cost_files,
        add_degree_cost: true,
        add_length_cost: true,
        ..RunConfig::default()
    })
    .unwrap();
    assert_eq!(outcome.result.reason, TerminationReason::OpenExhausted);
    assert!(!outcome.result.solutions.is_empty());
    for s in &outcome.result.solutions {
        assert_eq!(s.cost.dims(), 4);
        #[allow(clippy::cast_precision_loss)]
        let arcs = (s.path.len() - 1) as f64;
        assert_eq!(s.cost[3], arcs, "length objective counts arcs");
    }
}

#[test]
fn topology_mismatch_between_cost_files_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let a = random_grid(&spec()).unwrap();
    let b = random_grid(&GridSpec {
        rows: 9,
        ..spec()
    })
    .unwrap();
    let mut files = export_grid(&a, dir.path(), "a").unwrap();
    files.truncate(1);
    files.push(export_grid(&b, dir.path(), "b").unwrap().remove(1));

    let err = run(&RunConfig {
        cost_files: files,
        ..RunConfig::default()
    })
    .unwrap_err();
    assert!(matches!(err, HarnessError::Graph(_)), "got {err:?}");
}
