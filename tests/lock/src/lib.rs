//! Shared helpers for the lock tests: seeded random graphs and a
//! brute-force Pareto front to check the engine against.

pub mod pareto_helpers;
