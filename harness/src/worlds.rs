//! Synthetic grid worlds and their DIMACS export.
//!
//! A random world is fully determined by its [`GridSpec`]: the same spec and
//! seed always produce the same cost layers and obstacle cells.

use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use emoa_kernel::graph::dimacs::render_layer;
use emoa_kernel::graph::grid::GridGraph;
use emoa_kernel::graph::PlannerGraph;

use crate::error::HarnessError;

/// Parameters of a uniform-random grid world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub rows: usize,
    pub cols: usize,
    /// Number of cost layers (objectives).
    pub dims: usize,
    /// Cell costs are drawn uniformly from `1..=max_cost`.
    pub max_cost: u32,
    /// Probability that a cell is an obstacle.
    pub obstacle_ratio: f64,
    /// 4 or 8.
    pub connectivity: u8,
    pub seed: u64,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            rows: 32,
            cols: 32,
            dims: 2,
            max_cost: 10,
            obstacle_ratio: 0.0,
            connectivity: 4,
            seed: 0,
        }
    }
}

/// Generate a random grid from `spec`.
///
/// Obstacles are shared by every layer.
///
/// # Errors
///
/// Returns [`HarnessError::InvalidConfig`] for an empty grid, zero layers, a
/// zero `max_cost` or an obstacle ratio outside `[0, 1]`, and
/// [`HarnessError::Graph`] for an unsupported connectivity.
pub fn random_grid(spec: &GridSpec) -> Result<GridGraph, HarnessError> {
    if spec.rows == 0 || spec.cols == 0 || spec.dims == 0 || spec.max_cost == 0 {
        return Err(HarnessError::InvalidConfig {
            detail: format!(
                "grid needs rows, cols, dims and max_cost >= 1, got {}x{} with {} layers, max cost {}",
                spec.rows, spec.cols, spec.dims, spec.max_cost
            ),
        });
    }
    if !(0.0..=1.0).contains(&spec.obstacle_ratio) {
        return Err(HarnessError::InvalidConfig {
            detail: format!("obstacle_ratio {} is outside [0, 1]", spec.obstacle_ratio),
        });
    }

    let mut rng = StdRng::seed_from_u64(spec.seed);
    let blocked: Vec<Vec<bool>> = (0..spec.rows)
        .map(|_| {
            (0..spec.cols)
                .map(|_| rng.gen_bool(spec.obstacle_ratio))
                .collect()
        })
        .collect();
    let layers: Vec<Vec<Vec<f64>>> = (0..spec.dims)
        .map(|_| {
            blocked
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|&b| {
                            let c = f64::from(rng.gen_range(1..=spec.max_cost));
                            if b {
                                f64::INFINITY
                            } else {
                                c
                            }
                        })
                        .collect()
                })
                .collect()
        })
        .collect();

    let grid = GridGraph::new(layers, spec.connectivity)?;
    tracing::debug!(
        rows = spec.rows,
        cols = spec.cols,
        dims = spec.dims,
        seed = spec.seed,
        "random grid generated"
    );
    Ok(grid)
}

/// Write one DIMACS file per cost layer of `grid` into `dir`.
///
/// Files are named `<stem>-c1.gr`, `<stem>-c2.gr`, ... and returned in
/// objective order, ready to pass as cost files.
///
/// # Errors
///
/// Returns [`HarnessError::Graph`] if the grid cannot be flattened and
/// [`HarnessError::Io`] if a file cannot be written.
pub fn export_grid(grid: &GridGraph, dir: &Path, stem: &str) -> Result<Vec<PathBuf>, HarnessError> {
    let sparse = grid.to_sparse()?;
    std::fs::create_dir_all(dir).map_err(|e| HarnessError::io(dir, e))?;

    let mut paths = Vec::with_capacity(grid.cost_dims());
    for dim in 0..grid.cost_dims() {
        let path = dir.join(format!("{stem}-c{}.gr", dim + 1));
        let comment = format!(
            "{}x{} grid world, objective {}",
            grid.rows(),
            grid.cols(),
            dim + 1
        );
        std::fs::write(&path, render_layer(&sparse, dim, &comment))
            .map_err(|e| HarnessError::io(&path, e))?;
        paths.push(path);
    }
    tracing::info!(files = paths.len(), dir = %dir.display(), "grid exported");
    Ok(paths)
}
