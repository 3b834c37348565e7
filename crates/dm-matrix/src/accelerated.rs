//! Adapter over an external dense GEMM routine.
//!
//! By default the product is delegated to `matrixmultiply::dgemm`. With the
//! `blas` feature enabled it goes through `cblas::dgemm` instead, which links
//! against whatever BLAS implementation the final binary provides.
//!
//! Both paths describe the operands with this crate's column-major layout:
//! row stride 1, column stride `nrow`.

use crate::backend::DenseMultiplyBackend;
use crate::error::Result;
use crate::matrix::Matrix;

/// Multiply through the external GEMM: `C = 1.0 * A @ B + 0.0 * C`.
///
/// Like [`multiply_naive`](crate::cpu::multiply_naive) this does not report
/// dimension mismatches as errors.
///
/// # Panics
/// Panics if `mat1.ncol() != mat2.nrow()`. The GEMM reads through raw
/// pointers, so mismatched operands are never handed to it.
pub fn multiply_accelerated(mat1: &Matrix, mat2: &Matrix) -> Matrix {
    assert_eq!(
        mat1.ncol(),
        mat2.nrow(),
        "accelerated multiply: [{}x{}] @ [{}x{}]",
        mat1.nrow(),
        mat1.ncol(),
        mat2.nrow(),
        mat2.ncol()
    );

    let (m, k, n) = (mat1.nrow(), mat1.ncol(), mat2.ncol());
    log::trace!("accelerated multiply [{}x{}] @ [{}x{}]", m, k, k, n);

    let mut ret = Matrix::new(m, n);
    // Empty output or empty contraction: the zero-filled result is already
    // the answer.
    if m == 0 || n == 0 || k == 0 {
        return ret;
    }

    gemm(mat1, mat2, &mut ret);
    ret
}

#[cfg(not(feature = "blas"))]
fn gemm(a: &Matrix, b: &Matrix, c: &mut Matrix) {
    let (m, k, n) = (a.nrow(), a.ncol(), b.ncol());
    // SAFETY: a is m*k, b is k*n and c is m*n, all contiguous column-major
    // buffers owned by distinct matrices, so every strided access stays in
    // bounds and c does not alias the inputs.
    unsafe {
        matrixmultiply::dgemm(
            m,
            k,
            n,
            1.0,
            a.as_ptr(),
            1,
            m as isize,
            b.as_ptr(),
            1,
            k as isize,
            0.0,
            c.as_mut_ptr(),
            1,
            m as isize,
        );
    }
}

#[cfg(feature = "blas")]
fn gemm(a: &Matrix, b: &Matrix, c: &mut Matrix) {
    use cblas::{Layout, Transpose};

    let (m, k, n) = (a.nrow(), a.ncol(), b.ncol());
    // SAFETY: slice lengths match the declared shapes and leading dimensions.
    unsafe {
        cblas::dgemm(
            Layout::ColumnMajor,
            Transpose::None,
            Transpose::None,
            m as i32,
            n as i32,
            k as i32,
            1.0,
            a.as_slice(),
            m.max(1) as i32,
            b.as_slice(),
            k.max(1) as i32,
            0.0,
            c.as_mut_slice(),
            m.max(1) as i32,
        );
    }
}

/// Backend delegating to the external GEMM.
#[derive(Debug, Clone, Default)]
pub struct AcceleratedBackend;

impl AcceleratedBackend {
    pub fn new() -> Self {
        AcceleratedBackend
    }

    /// Name of the GEMM implementation this build links against.
    pub fn provider(&self) -> &'static str {
        if cfg!(feature = "blas") {
            "cblas"
        } else {
            "matrixmultiply"
        }
    }
}

impl DenseMultiplyBackend for AcceleratedBackend {
    fn name(&self) -> &str {
        "accelerated"
    }

    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        Ok(multiply_accelerated(a, b))
    }
}
