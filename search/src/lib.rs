//! emoa search: Pareto-optimal multi-objective shortest paths (BOA*-lex).
//!
//! This crate provides the search layer. It depends only on `emoa_kernel`;
//! it does NOT depend on `emoa_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! emoa_kernel  ←  emoa_search  ←  emoa_harness
//! (costs, graphs)  (labels, frontiers)  (files, runner, CLI)
//! ```
//!
//! # Key types
//!
//! - [`BoaLex`] — reusable engine: set a graph, search start/goal pairs
//! - [`run_boalex`] — one-shot search on a fresh engine
//! - [`SearchPolicy`] — frontier strategy and label ceiling
//! - [`SearchResult`] — Pareto solutions, counters, termination reason
//! - [`Frontier`] — per-vertex dominance pruning ([`LexFrontier`], [`FullFrontier`])
//! - [`PotentialHeuristic`] — per-objective lower bounds toward the goal

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod label;
pub mod open;
pub mod policy;
pub mod result;
pub mod search;
pub mod store;

pub use error::{Endpoint, SearchError};
pub use frontier::{Frontier, FrontierEntry, FrontierKind, FullFrontier, LexFrontier};
pub use heuristic::PotentialHeuristic;
pub use label::{Label, LabelId, OpenKey};
pub use policy::SearchPolicy;
pub use result::{SearchResult, SearchStats, Solution, TerminationReason};
pub use search::{run_boalex, BoaLex};
