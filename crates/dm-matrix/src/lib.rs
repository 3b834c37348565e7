//! `dm-matrix` - Column-major dense f64 matrices with interchangeable
//! multiplication strategies.
//!
//! This crate provides:
//! - A `Matrix` type owning a contiguous column-major buffer
//! - A `DenseMultiplyBackend` trait for pluggable multiplication
//! - `NaiveBackend`: the unguarded triple loop, used as the reference
//! - `TiledBackend`: cache-blocked multiplication with dimension checks
//! - `AcceleratedBackend`: an adapter over an external GEMM routine

pub mod accelerated;
pub mod backend;
pub mod cpu;
pub mod error;
pub mod matrix;
pub mod storage;

// Re-export primary types at the crate root for convenience.
pub use accelerated::{multiply_accelerated, AcceleratedBackend};
pub use backend::DenseMultiplyBackend;
pub use cpu::{multiply_naive, multiply_tiled, NaiveBackend, TiledBackend};
pub use error::{MatrixError, Result};
pub use matrix::Matrix;
pub use storage::ColumnMajorStorage;
