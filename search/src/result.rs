//! Search outcome: Pareto solutions, counters, termination reason.
//!
//! A [`SearchResult`] is produced for every search that passes pre-flight
//! validation, however it terminated. [`SearchResult::digest`] hashes the
//! solution set so two runs can be compared for bit-identical output.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use emoa_kernel::cost::CostVector;
use emoa_kernel::graph::VertexId;

use crate::label::LabelId;

/// Domain prefix for [`SearchResult::digest`].
pub const DOMAIN_SEARCH_RESULT: &[u8] = b"EMOA::SEARCH_RESULT::V1\0";

/// Why the search loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    /// Open list emptied: the solution set is the complete Pareto set.
    OpenExhausted,
    /// Start equals goal: the single zero-cost solution was emitted.
    StartIsGoal,
    /// No path from start to goal exists.
    GoalUnreachable,
    /// Wall-clock budget ran out before the open list emptied.
    TimeBudgetExceeded,
    /// `max_labels` ceiling was reached before the open list emptied.
    LabelBudgetExceeded,
}

impl TerminationReason {
    /// Whether the solution set is the complete Pareto set.
    #[must_use]
    pub fn is_complete(self) -> bool {
        matches!(
            self,
            Self::OpenExhausted | Self::StartIsGoal | Self::GoalUnreachable
        )
    }

    /// Whether the search ended on a budget rather than on its own.
    #[must_use]
    pub fn is_budget_exceeded(self) -> bool {
        !self.is_complete()
    }
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::OpenExhausted => "open_exhausted",
            Self::StartIsGoal => "start_is_goal",
            Self::GoalUnreachable => "goal_unreachable",
            Self::TimeBudgetExceeded => "time_budget_exceeded",
            Self::LabelBudgetExceeded => "label_budget_exceeded",
        };
        f.write_str(s)
    }
}

/// One Pareto-optimal start-to-goal path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// Id of the goal label this solution was read from.
    pub label_id: LabelId,
    /// Vertices from start to goal, inclusive.
    pub path: Vec<VertexId>,
    /// Total path cost (the label's `g`).
    pub cost: CostVector,
}

/// Run counters and timings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Labels created, root included.
    pub n_generated: u64,
    /// Non-goal labels whose outgoing arcs were scanned.
    pub n_expanded: u64,
    /// Pairwise dominance comparisons performed by frontier checks.
    pub n_dom_checks: u64,
    /// Seconds spent building the heuristic in use.
    pub rt_init_heuristic: f64,
    /// Seconds spent in the search loop.
    pub rt_search: f64,
    /// Mean entry count over non-empty vertex frontiers, 0 if none.
    pub frontier_size_avg: f64,
    /// Largest vertex frontier.
    pub frontier_size_max: usize,
    /// Most labels queued in the open list at once.
    pub open_size_max: usize,
}

/// Everything a finished search reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Accepted goal labels in increasing label-id order.
    pub solutions: Vec<Solution>,
    pub stats: SearchStats,
    /// True iff a budget ended the search early.
    pub timeout: bool,
    pub reason: TerminationReason,
}

#[derive(Serialize)]
struct DigestView<'a> {
    reason: TerminationReason,
    n_generated: u64,
    n_expanded: u64,
    solutions: Vec<DigestSolution<'a>>,
}

#[derive(Serialize)]
struct DigestSolution<'a> {
    label_id: LabelId,
    path: &'a [VertexId],
    cost_bits: Vec<u64>,
}

impl SearchResult {
    /// Content digest over the termination reason, the generated and
    /// expanded counters, and the solution set.
    ///
    /// Costs are hashed by their IEEE-754 bit patterns. Timings are excluded.
    /// Format: `sha256:<lowercase hex>`.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if the digest view fails to encode.
    pub fn digest(&self) -> Result<String, serde_json::Error> {
        let view = DigestView {
            reason: self.reason,
            n_generated: self.stats.n_generated,
            n_expanded: self.stats.n_expanded,
            solutions: self
                .solutions
                .iter()
                .map(|s| DigestSolution {
                    label_id: s.label_id,
                    path: &s.path,
                    cost_bits: s.cost.as_slice().iter().map(|c| c.to_bits()).collect(),
                })
                .collect(),
        };
        let bytes = serde_json::to_vec(&view)?;
        let mut hasher = Sha256::new();
        hasher.update(DOMAIN_SEARCH_RESULT);
        hasher.update(&bytes);
        Ok(format!("sha256:{}", hex::encode(hasher.finalize())))
    }
}
