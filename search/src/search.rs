//! Search entry point and expansion loop.
//!
//! [`BoaLex`] is a best-first label-setting search over cost vectors. Labels
//! leave the open list in nondecreasing lexicographic `f` order and are
//! registered in their vertex frontier at that moment, which is what lets
//! the projected frontier test stand in for a full Pareto check.

use std::sync::Arc;
use std::time::{Duration, Instant};

use emoa_kernel::cost::CostVector;
use emoa_kernel::graph::{PlannerGraph, VertexId};

use crate::error::{Endpoint, SearchError};
use crate::frontier::{Frontier, FrontierKind};
use crate::heuristic::PotentialHeuristic;
use crate::label::LabelId;
use crate::open::OpenList;
use crate::policy::SearchPolicy;
use crate::result::{SearchResult, SearchStats, Solution, TerminationReason};
use crate::store::LabelStore;

/// Reusable multi-objective search engine.
///
/// Holds a shared graph and the potentials for the most recent goal. Every
/// call to [`BoaLex::search`] starts from fresh per-run state.
pub struct BoaLex {
    policy: SearchPolicy,
    graph: Option<Arc<dyn PlannerGraph>>,
    heuristic: Option<PotentialHeuristic>,
    result: Option<SearchResult>,
}

impl std::fmt::Debug for BoaLex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoaLex")
            .field("policy", &self.policy)
            .field("has_graph", &self.graph.is_some())
            .field("heuristic_goal", &self.heuristic.as_ref().map(PotentialHeuristic::goal))
            .field("has_result", &self.result.is_some())
            .finish()
    }
}

impl BoaLex {
    /// Create an engine with no graph.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `policy` fails validation.
    pub fn new(policy: SearchPolicy) -> Result<Self, SearchError> {
        policy.validate()?;
        Ok(Self {
            policy,
            graph: None,
            heuristic: None,
            result: None,
        })
    }

    #[must_use]
    pub fn policy(&self) -> &SearchPolicy {
        &self.policy
    }

    /// Replace the graph. Cached potentials and the last result are dropped.
    pub fn set_graph(&mut self, graph: Arc<dyn PlannerGraph>) {
        self.graph = Some(graph);
        self.heuristic = None;
        self.result = None;
    }

    /// Build the potentials for `goal`, or keep the cached ones if they
    /// already point there.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::GraphNotSet`] or
    /// [`SearchError::VertexOutOfRange`] for an unknown goal.
    pub fn init_heuristic(&mut self, goal: VertexId) -> Result<(), SearchError> {
        let graph = self.graph.as_ref().ok_or(SearchError::GraphNotSet)?;
        check_vertex(graph.as_ref(), Endpoint::Goal, goal)?;
        potentials_for(&mut self.heuristic, graph.as_ref(), goal);
        Ok(())
    }

    /// Potentials currently cached, if any.
    #[must_use]
    pub fn heuristic(&self) -> Option<&PotentialHeuristic> {
        self.heuristic.as_ref()
    }

    /// Compute the Pareto set of `start` to `goal` paths.
    ///
    /// The result is kept in the engine; read it with [`BoaLex::result`].
    ///
    /// # Errors
    ///
    /// Returns a [`SearchError`] if the query fails validation. No search is
    /// performed and the previous result is cleared.
    pub fn search(
        &mut self,
        start: VertexId,
        goal: VertexId,
        time_limit: Duration,
    ) -> Result<TerminationReason, SearchError> {
        self.result = None;
        let result = self.execute(start, goal, time_limit)?;
        let reason = result.reason;
        self.result = Some(result);
        Ok(reason)
    }

    /// Result of the last successful [`BoaLex::search`].
    #[must_use]
    pub fn result(&self) -> Option<&SearchResult> {
        self.result.as_ref()
    }

    /// Move the last result out of the engine.
    pub fn take_result(&mut self) -> Option<SearchResult> {
        self.result.take()
    }

    fn execute(
        &mut self,
        start: VertexId,
        goal: VertexId,
        time_limit: Duration,
    ) -> Result<SearchResult, SearchError> {
        let graph = self.graph.as_ref().ok_or(SearchError::GraphNotSet)?;
        let dims = graph.cost_dims();
        if dims < 2 {
            return Err(SearchError::TooFewObjectives { dims });
        }
        check_vertex(graph.as_ref(), Endpoint::Start, start)?;
        check_vertex(graph.as_ref(), Endpoint::Goal, goal)?;

        let span = tracing::info_span!(
            "boalex",
            start,
            goal,
            frontier = %self.policy.frontier,
        );
        let _enter = span.enter();

        if start == goal {
            tracing::debug!("start is goal");
            return Ok(start_is_goal(start, dims));
        }

        let heuristic = potentials_for(&mut self.heuristic, graph.as_ref(), goal);
        let run = Run::new(graph.as_ref(), heuristic, &self.policy, goal);
        let result = run.execute(start, time_limit);

        if result.timeout {
            tracing::warn!(
                reason = %result.reason,
                solutions = result.solutions.len(),
                n_generated = result.stats.n_generated,
                "search stopped on budget"
            );
        } else {
            tracing::info!(
                reason = %result.reason,
                solutions = result.solutions.len(),
                n_generated = result.stats.n_generated,
                n_expanded = result.stats.n_expanded,
                n_dom_checks = result.stats.n_dom_checks,
                open_size_max = result.stats.open_size_max,
                "search finished"
            );
        }
        Ok(result)
    }
}

/// One-shot search on a fresh engine.
///
/// # Errors
///
/// Returns a [`SearchError`] if `policy` or the query fails validation.
pub fn run_boalex(
    graph: Arc<dyn PlannerGraph>,
    start: VertexId,
    goal: VertexId,
    time_limit: Duration,
    policy: SearchPolicy,
) -> Result<SearchResult, SearchError> {
    let mut engine = BoaLex::new(policy)?;
    engine.set_graph(graph);
    engine.execute(start, goal, time_limit)
}

fn check_vertex(
    graph: &dyn PlannerGraph,
    endpoint: Endpoint,
    vertex: VertexId,
) -> Result<(), SearchError> {
    if graph.has_vertex(vertex) {
        Ok(())
    } else {
        Err(SearchError::VertexOutOfRange {
            endpoint,
            vertex,
            num_vertices: graph.num_vertices(),
        })
    }
}

fn potentials_for<'a>(
    slot: &'a mut Option<PotentialHeuristic>,
    graph: &dyn PlannerGraph,
    goal: VertexId,
) -> &'a PotentialHeuristic {
    if slot.as_ref().is_some_and(|h| h.goal() != goal) {
        *slot = None;
    }
    slot.get_or_insert_with(|| PotentialHeuristic::build(graph, goal))
}

fn start_is_goal(start: VertexId, dims: usize) -> SearchResult {
    SearchResult {
        solutions: vec![Solution {
            label_id: 0,
            path: vec![start],
            cost: CostVector::zeros(dims),
        }],
        stats: SearchStats {
            n_generated: 1,
            ..SearchStats::default()
        },
        timeout: false,
        reason: TerminationReason::StartIsGoal,
    }
}

// ---------------------------------------------------------------------------
// Per-run state
// ---------------------------------------------------------------------------

struct Run<'a> {
    graph: &'a dyn PlannerGraph,
    heuristic: &'a PotentialHeuristic,
    kind: FrontierKind,
    max_labels: Option<u64>,
    goal: VertexId,
    store: LabelStore,
    open: OpenList,
    /// Created on first registration at a vertex.
    frontiers: Vec<Option<Box<dyn Frontier>>>,
    accepted: Vec<LabelId>,
    n_expanded: u64,
    n_dom_checks: u64,
}

impl<'a> Run<'a> {
    fn new(
        graph: &'a dyn PlannerGraph,
        heuristic: &'a PotentialHeuristic,
        policy: &SearchPolicy,
        goal: VertexId,
    ) -> Self {
        let mut frontiers = Vec::new();
        frontiers.resize_with(graph.num_vertices(), || None);
        Self {
            graph,
            heuristic,
            kind: policy.frontier,
            max_labels: policy.max_labels,
            goal,
            store: LabelStore::new(),
            open: OpenList::new(),
            frontiers,
            accepted: Vec::new(),
            n_expanded: 0,
            n_dom_checks: 0,
        }
    }

    fn execute(mut self, start: VertexId, time_limit: Duration) -> SearchResult {
        let started = Instant::now();
        if !self.heuristic.is_reachable(start) {
            tracing::debug!("goal unreachable from start");
            return self.finish(TerminationReason::GoalUnreachable, started);
        }

        let (graph, heuristic) = (self.graph, self.heuristic);
        let dims = graph.cost_dims();
        self.enqueue(start, CostVector::zeros(dims), heuristic.h(start).clone(), None);

        let reason = 'search: loop {
            if started.elapsed() >= time_limit {
                break TerminationReason::TimeBudgetExceeded;
            }
            let Some(id) = self.open.pop() else {
                break TerminationReason::OpenExhausted;
            };
            let Some(label) = self.store.get(id).cloned() else {
                continue;
            };
            let v = label.vertex;

            if self.is_pruned(v, &label.f) {
                continue;
            }
            let kind = self.kind;
            if let Some(slot) = self.frontiers.get_mut(v) {
                slot.get_or_insert_with(|| kind.build()).update(&label);
            }

            if v == self.goal {
                self.accepted.push(id);
                continue;
            }

            self.n_expanded += 1;
            for edge in graph.successors(v).iter() {
                if !heuristic.is_reachable(edge.vertex) {
                    continue;
                }
                let g = &label.g + &edge.cost;
                let f = &g + heuristic.h(edge.vertex);
                if self.is_pruned(edge.vertex, &f) {
                    continue;
                }
                if self.at_label_ceiling() {
                    break 'search TerminationReason::LabelBudgetExceeded;
                }
                self.enqueue(edge.vertex, g, f, Some(id));
            }
        };

        self.finish(reason, started)
    }

    fn enqueue(&mut self, vertex: VertexId, g: CostVector, f: CostVector, parent: Option<LabelId>) {
        let id = self.store.push(vertex, g, f, parent);
        if let Some(label) = self.store.get(id) {
            self.open.push(label);
        }
    }

    /// Dominated at `v` or at the goal. The goal frontier is consulted once
    /// when `v` is the goal.
    fn is_pruned(&mut self, v: VertexId, f: &CostVector) -> bool {
        self.is_dominated(v, f) || (v != self.goal && self.is_dominated(self.goal, f))
    }

    fn is_dominated(&mut self, v: VertexId, f: &CostVector) -> bool {
        match self.frontiers.get(v) {
            Some(Some(frontier)) => frontier.check(f, &mut self.n_dom_checks),
            _ => false,
        }
    }

    fn at_label_ceiling(&self) -> bool {
        self.max_labels
            .is_some_and(|max| u64::try_from(self.store.len()).unwrap_or(u64::MAX) >= max)
    }

    fn finish(self, reason: TerminationReason, started: Instant) -> SearchResult {
        let rt_search = started.elapsed().as_secs_f64();

        let mut accepted = self.accepted;
        accepted.sort_unstable();
        let solutions = accepted
            .into_iter()
            .filter_map(|id| {
                self.store.get(id).map(|label| Solution {
                    label_id: id,
                    path: self.store.path_to(id),
                    cost: label.g.clone(),
                })
            })
            .collect();

        let sizes: Vec<usize> = self
            .frontiers
            .iter()
            .flatten()
            .filter(|f| !f.is_empty())
            .map(|f| f.len())
            .collect();
        #[allow(clippy::cast_precision_loss)]
        let frontier_size_avg = if sizes.is_empty() {
            0.0
        } else {
            sizes.iter().sum::<usize>() as f64 / sizes.len() as f64
        };

        SearchResult {
            solutions,
            stats: SearchStats {
                n_generated: u64::try_from(self.store.len()).unwrap_or(u64::MAX),
                n_expanded: self.n_expanded,
                n_dom_checks: self.n_dom_checks,
                rt_init_heuristic: self.heuristic.build_time().as_secs_f64(),
                rt_search,
                frontier_size_avg,
                frontier_size_max: sizes.iter().copied().max().unwrap_or(0),
                open_size_max: self.open.high_water(),
            },
            timeout: reason.is_budget_exceeded(),
            reason,
        }
    }
}
