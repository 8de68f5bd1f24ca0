//! emoa harness: files, runs, and the command line around the search.
//!
//! The harness loads DIMACS cost files through the kernel, runs the search
//! crate's engine, and writes results. It does NOT implement search logic.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cli;
pub mod config;
pub mod error;
pub mod result_file;
pub mod runner;
pub mod worlds;

pub use config::RunConfig;
pub use error::HarnessError;
pub use runner::{run, RunOutcome};
