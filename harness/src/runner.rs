//! Harness runner: cost files in, Pareto set out.
//!
//! The runner only orchestrates. Graph loading lives in the kernel and the
//! search itself in `emoa_search`.
//!
//! # Pipeline
//!
//! ```text
//! validate config → load_graph(cost_files) → expand_cost_dims()
//!   → run_boalex() → write result text / JSON
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

use emoa_kernel::graph::dimacs::load_graph;
use emoa_kernel::graph::PlannerGraph;
use emoa_search::{run_boalex, SearchResult};

use crate::config::RunConfig;
use crate::error::HarnessError;
use crate::result_file::{write_result_json, write_result_text};

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub result: SearchResult,
    /// Time spent reading and combining the cost files.
    pub graph_load_time: Duration,
    /// [`SearchResult::digest`] of `result`.
    pub digest: String,
}

/// Execute one configured run.
///
/// Output files named in `config` are written before returning. A search
/// that ends on a budget still writes its partial result and returns `Ok`.
///
/// # Errors
///
/// Returns [`HarnessError`] for an invalid config, unloadable cost files, a
/// rejected query, or an output file that cannot be written.
pub fn run(config: &RunConfig) -> Result<RunOutcome, HarnessError> {
    config.validate()?;

    let span = tracing::info_span!("run", start = config.start, goal = config.goal);
    let _enter = span.enter();

    let loading = Instant::now();
    let mut graph = load_graph(&config.cost_files)?;
    if config.add_degree_cost || config.add_length_cost {
        graph.expand_cost_dims(config.add_degree_cost, config.add_length_cost);
    }
    let graph_load_time = loading.elapsed();
    tracing::info!(
        vertices = graph.num_vertices(),
        arcs = graph.num_arcs(),
        dims = graph.cost_dims(),
        load_ms = u64::try_from(graph_load_time.as_millis()).unwrap_or(u64::MAX),
        "graph ready"
    );

    let result = run_boalex(
        Arc::new(graph),
        config.start,
        config.goal,
        config.time_limit(),
        config.policy(),
    )?;
    let digest = result.digest().map_err(HarnessError::Digest)?;

    if let Some(path) = &config.result_file {
        write_result_text(path, &result, graph_load_time)?;
        tracing::debug!(path = %path.display(), "result text written");
    }
    if let Some(path) = &config.json_file {
        write_result_json(path, &result)?;
        tracing::debug!(path = %path.display(), "result JSON written");
    }

    tracing::info!(
        reason = %result.reason,
        solutions = result.solutions.len(),
        open_size_max = result.stats.open_size_max,
        digest = %digest,
        "run complete"
    );
    Ok(RunOutcome {
        result,
        graph_load_time,
        digest,
    })
}
