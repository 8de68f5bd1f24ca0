//! Run configuration: one query against a set of DIMACS cost files.
//!
//! A [`RunConfig`] can be read from JSON and then overridden field by field
//! from the command line. Missing JSON fields take their [`Default`] values.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use emoa_kernel::graph::VertexId;
use emoa_search::{FrontierKind, SearchPolicy};

use crate::error::HarnessError;

const DEFAULT_TIME_LIMIT_SECS: f64 = 60.0;

/// Everything the runner needs for one search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub start: VertexId,
    pub goal: VertexId,
    /// Wall-clock budget for the search loop, in seconds.
    pub time_limit_secs: f64,
    /// One DIMACS `.gr` file per objective, all with the same arcs.
    pub cost_files: Vec<PathBuf>,
    /// Append a mean-endpoint-degree objective.
    pub add_degree_cost: bool,
    /// Append a unit-cost-per-arc objective.
    pub add_length_cost: bool,
    pub frontier: FrontierKind,
    pub max_labels: Option<u64>,
    /// Text result file in the `n_generated:` / `Label:` format.
    pub result_file: Option<PathBuf>,
    /// JSON dump of the full [`emoa_search::SearchResult`].
    pub json_file: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            start: 0,
            goal: 0,
            time_limit_secs: DEFAULT_TIME_LIMIT_SECS,
            cost_files: Vec::new(),
            add_degree_cost: false,
            add_length_cost: false,
            frontier: FrontierKind::default(),
            max_labels: None,
            result_file: None,
            json_file: None,
        }
    }
}

impl RunConfig {
    /// Read a config from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Io`] or [`HarnessError::Json`].
    pub fn load(path: &Path) -> Result<Self, HarnessError> {
        let text = std::fs::read_to_string(path).map_err(|e| HarnessError::io(path, e))?;
        serde_json::from_str(&text).map_err(|e| HarnessError::json(path, e))
    }

    /// Check the fields that would otherwise fail deep inside a run.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidConfig`] for a missing cost file list
    /// or an unusable time limit, and [`HarnessError::Search`] if the derived
    /// policy is invalid.
    pub fn validate(&self) -> Result<(), HarnessError> {
        if self.cost_files.is_empty() {
            return Err(HarnessError::InvalidConfig {
                detail: "no cost files given".into(),
            });
        }
        if !self.time_limit_secs.is_finite() || self.time_limit_secs < 0.0 {
            return Err(HarnessError::InvalidConfig {
                detail: format!(
                    "time_limit_secs must be finite and non-negative, got {}",
                    self.time_limit_secs
                ),
            });
        }
        self.policy().validate()?;
        Ok(())
    }

    /// Search policy derived from this config.
    #[must_use]
    pub fn policy(&self) -> SearchPolicy {
        SearchPolicy {
            frontier: self.frontier,
            max_labels: self.max_labels,
        }
    }

    /// Time limit as a [`Duration`]. Saturates on out-of-range values.
    #[must_use]
    pub fn time_limit(&self) -> Duration {
        Duration::try_from_secs_f64(self.time_limit_secs).unwrap_or(Duration::MAX)
    }
}
