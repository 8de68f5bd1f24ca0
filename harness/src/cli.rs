//! Command-line argument types for the `emoa` binary.

use std::path::PathBuf;

use clap::Args;

use emoa_kernel::graph::VertexId;
use emoa_search::FrontierKind;

use crate::config::RunConfig;
use crate::error::HarnessError;
use crate::worlds::GridSpec;

/// Arguments for `emoa run`.
///
/// Flags override the matching fields of `--config` when both are given.
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// JSON run config to start from.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub start: Option<VertexId>,

    #[arg(long)]
    pub goal: Option<VertexId>,

    /// Search time limit in seconds.
    #[arg(long)]
    pub time_limit: Option<f64>,

    /// DIMACS cost file, once per objective in order.
    #[arg(long = "cost", value_name = "FILE")]
    pub cost_files: Vec<PathBuf>,

    /// Append a mean-endpoint-degree objective.
    #[arg(long)]
    pub degree_cost: bool,

    /// Append a unit-cost-per-arc objective.
    #[arg(long)]
    pub length_cost: bool,

    /// Frontier strategy: lex or full.
    #[arg(long)]
    pub frontier: Option<FrontierKind>,

    /// Stop after this many labels.
    #[arg(long)]
    pub max_labels: Option<u64>,

    /// Text result file.
    #[arg(long, short)]
    pub out: Option<PathBuf>,

    /// JSON result file.
    #[arg(long)]
    pub json: Option<PathBuf>,
}

impl RunArgs {
    /// Merge flags over the config file (or defaults).
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError`] if `--config` cannot be read.
    pub fn into_config(self) -> Result<RunConfig, HarnessError> {
        let mut cfg = match &self.config {
            Some(path) => RunConfig::load(path)?,
            None => RunConfig::default(),
        };
        if let Some(v) = self.start {
            cfg.start = v;
        }
        if let Some(v) = self.goal {
            cfg.goal = v;
        }
        if let Some(v) = self.time_limit {
            cfg.time_limit_secs = v;
        }
        if !self.cost_files.is_empty() {
            cfg.cost_files = self.cost_files;
        }
        cfg.add_degree_cost |= self.degree_cost;
        cfg.add_length_cost |= self.length_cost;
        if let Some(v) = self.frontier {
            cfg.frontier = v;
        }
        if self.max_labels.is_some() {
            cfg.max_labels = self.max_labels;
        }
        if self.out.is_some() {
            cfg.result_file = self.out;
        }
        if self.json.is_some() {
            cfg.json_file = self.json;
        }
        Ok(cfg)
    }
}

/// Arguments for `emoa grid`.
#[derive(Args, Debug)]
pub struct GridArgs {
    #[arg(long, default_value_t = 32)]
    pub rows: usize,

    #[arg(long, default_value_t = 32)]
    pub cols: usize,

    /// Number of cost layers.
    #[arg(long, default_value_t = 2)]
    pub dims: usize,

    /// Cell costs are drawn from 1..=max-cost.
    #[arg(long, default_value_t = 10)]
    pub max_cost: u32,

    /// Fraction of obstacle cells.
    #[arg(long, default_value_t = 0.0)]
    pub obstacles: f64,

    /// 4 or 8.
    #[arg(long, default_value_t = 4)]
    pub connectivity: u8,

    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Directory for the `.gr` files.
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// File name stem: `<stem>-c1.gr`, `<stem>-c2.gr`, ...
    #[arg(long, default_value = "grid")]
    pub stem: String,
}

impl GridArgs {
    #[must_use]
    pub fn spec(&self) -> GridSpec {
        GridSpec {
            rows: self.rows,
            cols: self.cols,
            dims: self.dims,
            max_cost: self.max_cost,
            obstacle_ratio: self.obstacles,
            connectivity: self.connectivity,
            seed: self.seed,
        }
    }
}
