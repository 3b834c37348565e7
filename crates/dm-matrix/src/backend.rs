use std::fmt::Debug;

use crate::error::Result;
use crate::matrix::Matrix;

/// A dense matrix-multiply capability.
///
/// Every implementation computes `C = A @ B` for `A: [m x k]` and
/// `B: [k x n]`, returning a freshly allocated `[m x n]` matrix and leaving
/// its operands untouched. In-process strategies (naive, tiled) and the
/// delegating GEMM adapter share this contract; they differ only in
/// summation order and in how much input validation they perform.
pub trait DenseMultiplyBackend: Send + Sync + Debug {
    /// Returns the name of this backend (e.g., "naive", "tiled").
    fn name(&self) -> &str;

    /// Matrix multiplication: C = A @ B.
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix>;
}
