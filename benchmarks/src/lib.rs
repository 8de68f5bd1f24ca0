//! Shared helpers for emoa benchmark suites.

use std::sync::Arc;
use std::time::Duration;

use emoa_harness::worlds::{random_grid, GridSpec};
use emoa_kernel::graph::{PlannerGraph, VertexId};
use emoa_search::{run_boalex, FrontierKind, SearchPolicy, SearchResult};

/// Time limit for benchmark queries; large enough that no regime hits it.
pub const BENCH_TIME_LIMIT: Duration = Duration::from_secs(600);

/// A fixed corner-to-corner query on a seeded random grid.
pub struct Regime {
    pub name: &'static str,
    pub graph: Arc<dyn PlannerGraph>,
    pub start: VertexId,
    pub goal: VertexId,
}

impl Regime {
    /// Build the grid for `spec` and query its opposite corners.
    ///
    /// # Panics
    ///
    /// Panics if `spec` is not a valid grid. Benchmark setup failures are fatal.
    #[must_use]
    pub fn corner_to_corner(name: &'static str, spec: &GridSpec) -> Self {
        let grid = random_grid(spec).expect("regime grid");
        let goal = grid.num_vertices() - 1;
        Self {
            name,
            graph: Arc::new(grid),
            start: 0,
            goal,
        }
    }
}

/// The macro regimes, smallest first.
#[must_use]
pub fn regimes() -> Vec<Regime> {
    let base = GridSpec {
        max_cost: 10,
        connectivity: 4,
        seed: 7,
        ..GridSpec::default()
    };
    vec![
        Regime::corner_to_corner(
            "grid16_k2",
            &GridSpec {
                rows: 16,
                cols: 16,
                dims: 2,
                ..base.clone()
            },
        ),
        Regime::corner_to_corner(
            "grid32_k2_obstacles",
            &GridSpec {
                rows: 32,
                cols: 32,
                dims: 2,
                obstacle_ratio: 0.2,
                ..base.clone()
            },
        ),
        Regime::corner_to_corner(
            "grid12_k3",
            &GridSpec {
                rows: 12,
                cols: 12,
                dims: 3,
                ..base.clone()
            },
        ),
        Regime::corner_to_corner(
            "grid16_k2_8conn",
            &GridSpec {
                rows: 16,
                cols: 16,
                dims: 2,
                connectivity: 8,
                ..base
            },
        ),
    ]
}

/// Run one regime with the given frontier strategy.
///
/// # Panics
///
/// Panics if the query is rejected, which would be a regime construction bug.
#[must_use]
pub fn run_regime(regime: &Regime, frontier: FrontierKind) -> SearchResult {
    let policy = SearchPolicy {
        frontier,
        ..SearchPolicy::default()
    };
    run_boalex(
        Arc::clone(&regime.graph),
        regime.start,
        regime.goal,
        BENCH_TIME_LIMIT,
        policy,
    )
    .expect("regime query is valid")
}
