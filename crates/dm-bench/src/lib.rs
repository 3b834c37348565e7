//! `dm-bench` - Timing and correctness comparison of the `dm-matrix`
//! multiplication strategies.
//!
//! Operands are generated from a seeded RNG so runs are reproducible. Each
//! strategy is timed over several repeats and checked against the naive
//! reference product.

pub mod config;
pub mod error;
pub mod harness;
pub mod report;
pub mod strategy;

pub use config::{BenchArgs, BenchConfig};
pub use error::{BenchError, Result};
pub use harness::{random_matrix, run, run_case};
pub use report::{BenchReport, Measurement};
pub use strategy::Strategy;
