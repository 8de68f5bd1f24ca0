//! emoa kernel: cost vectors, graphs, and single-objective potentials.
//!
//! # API Surface
//!
//! - [`cost::CostVector`] -- fixed-dimension objective vector with dominance tests
//! - [`graph::PlannerGraph`] -- graph capability trait consumed by the search layer
//! - [`graph::sparse::SparseGraph`], [`graph::grid::GridGraph`] -- concrete graphs
//! - [`graph::dimacs`] -- DIMACS `.gr` loading and rendering
//! - [`dijkstra::distances_to`] -- backward single-objective distances
//!
//! # Module Dependency Direction
//!
//! `cost` ← `graph` ← `dijkstra`
//!
//! One-way only. The kernel knows nothing about labels or Pareto search.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cost;
pub mod dijkstra;
pub mod error;
pub mod graph;
