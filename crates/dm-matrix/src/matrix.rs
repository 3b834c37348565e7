use std::fmt;

use crate::error::{MatrixError, Result};
use crate::storage::ColumnMajorStorage;

/// A dense `nrow x ncol` matrix of f64 values stored in column-major order.
///
/// Element `(row, col)` lives at flat offset `row + col * nrow`. The matrix
/// exclusively owns its buffer; `clone` performs a deep copy.
#[derive(Debug, Clone)]
pub struct Matrix {
    nrow: usize,
    ncol: usize,
    storage: ColumnMajorStorage,
}

impl Matrix {
    /// Create a new `nrow x ncol` matrix.
    ///
    /// Contents are zero-filled. A matrix with either dimension equal to 0
    /// holds no buffer.
    pub fn new(nrow: usize, ncol: usize) -> Self {
        Matrix {
            nrow,
            ncol,
            storage: ColumnMajorStorage::zeros(nrow * ncol),
        }
    }

    /// Alias for [`Matrix::new`], for call sites that rely on the zero fill.
    pub fn zeros(nrow: usize, ncol: usize) -> Self {
        Self::new(nrow, ncol)
    }

    /// The `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::new(n, n);
        for i in 0..n {
            *m.at_mut(i, i) = 1.0;
        }
        m
    }

    /// Build a matrix from a buffer already laid out in column-major order.
    ///
    /// # Errors
    /// Returns `LengthMismatch` if `data.len() != nrow * ncol`.
    pub fn from_col_major(nrow: usize, ncol: usize, data: Vec<f64>) -> Result<Self> {
        let storage = ColumnMajorStorage::from_vec(data, nrow * ncol)?;
        Ok(Matrix {
            nrow,
            ncol,
            storage,
        })
    }

    /// Build a matrix from a row-major buffer, transposing the layout.
    ///
    /// # Errors
    /// Returns `LengthMismatch` if `data.len() != nrow * ncol`.
    pub fn from_row_major(nrow: usize, ncol: usize, data: &[f64]) -> Result<Self> {
        if data.len() != nrow * ncol {
            return Err(MatrixError::LengthMismatch {
                expected: nrow * ncol,
                got: data.len(),
            });
        }
        let mut m = Self::new(nrow, ncol);
        for i in 0..nrow {
            for j in 0..ncol {
                *m.at_mut(i, j) = data[i * ncol + j];
            }
        }
        Ok(m)
    }

    /// Build a matrix from a list of rows.
    ///
    /// # Errors
    /// Returns `LengthMismatch` if the rows are ragged.
    pub fn from_rows(rows: &[&[f64]]) -> Result<Self> {
        let nrow = rows.len();
        let ncol = rows.first().map_or(0, |r| r.len());
        let flat: Vec<f64> = rows.iter().flat_map(|r| r.iter().copied()).collect();
        Self::from_row_major(nrow, ncol, &flat)
    }

    pub fn nrow(&self) -> usize {
        self.nrow
    }

    pub fn ncol(&self) -> usize {
        self.ncol
    }

    /// Total number of elements (`nrow * ncol`).
    pub fn size(&self) -> usize {
        self.nrow * self.ncol
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row + col * self.nrow
    }

    /// Read element `(row, col)`.
    ///
    /// Row and column are only checked in debug builds; callers must keep
    /// `row < nrow` and `col < ncol`. The flat offset is still checked
    /// against the buffer, so misuse panics rather than reading foreign
    /// memory.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f64 {
        debug_assert!(
            row < self.nrow && col < self.ncol,
            "index ({}, {}) out of range for [{}x{}] matrix",
            row,
            col,
            self.nrow,
            self.ncol
        );
        self.storage.as_slice()[self.index(row, col)]
    }

    /// Mutable access to element `(row, col)`. Same preconditions as [`Matrix::at`].
    #[inline]
    pub fn at_mut(&mut self, row: usize, col: usize) -> &mut f64 {
        debug_assert!(
            row < self.nrow && col < self.ncol,
            "index ({}, {}) out of range for [{}x{}] matrix",
            row,
            col,
            self.nrow,
            self.ncol
        );
        let idx = self.index(row, col);
        &mut self.storage.as_mut_slice()[idx]
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.nrow || col >= self.ncol {
            return Err(MatrixError::OutOfRange {
                row,
                col,
                nrow: self.nrow,
                ncol: self.ncol,
            });
        }
        Ok(())
    }

    /// Bounds-checked read.
    ///
    /// # Errors
    /// Returns `OutOfRange` if `row >= nrow` or `col >= ncol`.
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        self.check_bounds(row, col)?;
        Ok(self.at(row, col))
    }

    /// Bounds-checked write.
    ///
    /// # Errors
    /// Returns `OutOfRange` if `row >= nrow` or `col >= ncol`.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        self.check_bounds(row, col)?;
        *self.at_mut(row, col) = value;
        Ok(())
    }

    /// The backing buffer in storage (column-major) order.
    pub fn as_slice(&self) -> &[f64] {
        self.storage.as_slice()
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        self.storage.as_mut_slice()
    }

    /// Raw pointer to the backing buffer, for external kernels.
    ///
    /// The pointer is valid only while `self` is alive and not re-dimensioned.
    pub fn as_ptr(&self) -> *const f64 {
        self.storage.as_slice().as_ptr()
    }

    pub fn as_mut_ptr(&mut self) -> *mut f64 {
        self.storage.as_mut_slice().as_mut_ptr()
    }

    /// Copy of the buffer contents in storage order, length `size()`.
    pub fn to_vec(&self) -> Vec<f64> {
        self.storage.as_slice().to_vec()
    }

    /// Re-dimension the matrix, releasing the old buffer. Contents are zeroed.
    pub fn reset(&mut self, nrow: usize, ncol: usize) {
        self.storage.reset(nrow * ncol);
        self.nrow = nrow;
        self.ncol = ncol;
    }

    /// Largest absolute elementwise difference, or `None` if the shapes differ.
    ///
    /// Returns `Some(0.0)` for two empty matrices of the same shape.
    pub fn max_abs_diff(&self, other: &Matrix) -> Option<f64> {
        if self.nrow != other.nrow || self.ncol != other.ncol {
            return None;
        }
        Some(
            self.as_slice()
                .iter()
                .zip(other.as_slice())
                .map(|(a, b)| (a - b).abs())
                .fold(0.0, f64::max),
        )
    }

    /// Elementwise comparison with a mixed absolute/relative tolerance:
    /// `|a - b| <= tol * max(1, |a|, |b|)` for every pair.
    pub fn approx_eq(&self, other: &Matrix, tol: f64) -> bool {
        if self.nrow != other.nrow || self.ncol != other.ncol {
            return false;
        }
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| (a - b).abs() <= tol * 1.0f64.max(a.abs()).max(b.abs()))
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        if self.nrow != other.nrow || self.ncol != other.ncol {
            return false;
        }
        self.as_slice() == other.as_slice()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}x{}]", self.nrow, self.ncol)?;
        for i in 0..self.nrow {
            let row: Vec<String> = (0..self.ncol).map(|j| format!("{}", self.at(i, j))).collect();
            writeln!(f, "  [{}]", row.join(", "))?;
        }
        Ok(())
    }
}
