use crate::error::{MatrixError, Result};

/// Owned, contiguous f64 buffer backing a [`Matrix`](crate::Matrix).
///
/// The buffer is released when the storage is dropped, and `reset` drops the
/// old allocation before installing a new one. A zero-length storage holds no
/// heap allocation.
#[derive(Debug, Clone, Default)]
pub struct ColumnMajorStorage {
    data: Vec<f64>,
}

impl ColumnMajorStorage {
    /// Create zero-filled storage with `n` elements.
    pub fn zeros(n: usize) -> Self {
        if n == 0 {
            return Self::default();
        }
        ColumnMajorStorage { data: vec![0.0; n] }
    }

    /// Take ownership of an existing buffer.
    ///
    /// # Errors
    /// Returns `LengthMismatch` if `data.len() != expected`.
    pub fn from_vec(data: Vec<f64>, expected: usize) -> Result<Self> {
        if data.len() != expected {
            return Err(MatrixError::LengthMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(ColumnMajorStorage { data })
    }

    /// Number of elements in this storage.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the storage contains no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Release the current buffer and allocate a fresh zeroed one of `n`
    /// elements.
    pub fn reset(&mut self, n: usize) {
        *self = Self::zeros(n);
    }
}
