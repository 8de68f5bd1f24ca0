//! Determinism lock: identical inputs give identical solution sets,
//! counters and digests, in process and across processes.

use std::path::Path;
use std::process::Command;
use std::sync::Arc;
use std::time::Duration;

use emoa_harness::worlds::{random_grid, GridSpec};
use emoa_kernel::graph::PlannerGraph;
use emoa_search::{run_boalex, BoaLex, SearchPolicy};
use lock_tests::pareto_helpers::random_graph;

const LIMIT: Duration = Duration::from_secs(60);

// ---------------------------------------------------------------------------
// In-process
// ---------------------------------------------------------------------------

#[test]
fn repeated_one_shot_runs_are_identical_n10() {
    let graph: Arc<dyn PlannerGraph> = Arc::new(random_graph(17, 14, 3, 0.25, 7));
    let first = run_boalex(graph.clone(), 0, 13, LIMIT, SearchPolicy::default()).unwrap();
    let digest = first.digest().unwrap();

    for i in 1..10 {
        let again = run_boalex(graph.clone(), 0, 13, LIMIT, SearchPolicy::default()).unwrap();
        assert_eq!(again.solutions, first.solutions, "run {i}");
        assert_eq!(again.stats.n_generated, first.stats.n_generated, "run {i}");
        assert_eq!(again.stats.n_expanded, first.stats.n_expanded, "run {i}");
        assert_eq!(again.stats.n_dom_checks, first.stats.n_dom_checks, "run {i}");
        assert_eq!(again.digest().unwrap(), digest, "run {i}");
    }
}

#[test]
fn engine_reuse_matches_fresh_engine() {
    let spec = GridSpec {
        rows: 10,
        cols: 10,
        obstacle_ratio: 0.15,
        seed: 3,
        ..GridSpec::default()
    };
    let graph: Arc<dyn PlannerGraph> = Arc::new(random_grid(&spec).unwrap());
    let goal = graph.num_vertices() - 1;

    let mut engine = BoaLex::new(SearchPolicy::default()).unwrap();
    engine.set_graph(graph.clone());
    for start in [0, 5, 22, 0] {
        engine.search(start, goal, LIMIT).unwrap();
        let reused = engine.take_result().unwrap();
        let fresh = run_boalex(graph.clone(), start, goal, LIMIT, SearchPolicy::default()).unwrap();
        assert_eq!(
            reused.digest().unwrap(),
            fresh.digest().unwrap(),
            "start {start}"
        );
    }
    assert_eq!(engine.heuristic().map(|h| h.goal()), Some(goal));
}

#[test]
fn digest_changes_with_the_query() {
    let graph: Arc<dyn PlannerGraph> = Arc::new(random_graph(21, 12, 2, 0.35, 9));
    let a = run_boalex(graph.clone(), 0, 11, LIMIT, SearchPolicy::default()).unwrap();
    let b = run_boalex(graph.clone(), 1, 11, LIMIT, SearchPolicy::default()).unwrap();
    if a.solutions != b.solutions {
        assert_ne!(a.digest().unwrap(), b.digest().unwrap());
    }
}

// ---------------------------------------------------------------------------
// Cross-process
// ---------------------------------------------------------------------------

fn binary_path() -> String {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push("search_fixture");
    path.to_string_lossy().to_string()
}

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

fn run_variant(work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();

    let mut command = Command::new(&bin);
    command.current_dir(work_dir);
    command
        .env_remove("LC_ALL")
        .env_remove("LANG")
        .env_remove("RUST_LOG");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });
    assert!(
        output.status.success(),
        "search_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_determinism_four_env_variants() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[]);
    assert!(
        baseline.contains("digest=sha256:"),
        "baseline output missing digest: {baseline}"
    );
    assert!(baseline.contains("reason=open_exhausted"), "{baseline}");

    let tmp = std::env::temp_dir();
    let variants: [(&str, Vec<(&str, &str)>); 3] = [
        ("locale", vec![("LC_ALL", "C"), ("LANG", "C")]),
        ("tracing", vec![("RUST_LOG", "debug")]),
        ("cwd", vec![]),
    ];
    for (name, env) in &variants {
        let dir = if *name == "cwd" {
            tmp.to_string_lossy().to_string()
        } else {
            root.clone()
        };
        let out = run_variant(&dir, env);
        assert_eq!(out, baseline, "variant {name} diverged");
    }
}
