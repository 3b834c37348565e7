use crate::backend::DenseMultiplyBackend;
use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// Cache-blocked multiplication.
///
/// The iteration space is cut into `tile_size`-wide blocks along the output
/// rows, the output columns and the contraction axis, visited in that
/// nesting order. Blocks at the edges are clamped to the true extent of each
/// axis. Partial sums are formed per contraction block and then added into
/// the output, so results may differ from [`multiply_naive`] in the last
/// bits.
///
/// [`multiply_naive`]: crate::cpu::multiply_naive
///
/// # Errors
/// - `InvalidTileSize` if `tile_size == 0`.
/// - `DimensionMismatch` if `mat1.ncol() != mat2.nrow()`; no result buffer is
///   allocated in that case.
pub fn multiply_tiled(mat1: &Matrix, mat2: &Matrix, tile_size: usize) -> Result<Matrix> {
    if tile_size == 0 {
        return Err(MatrixError::InvalidTileSize(tile_size));
    }
    if mat1.ncol() != mat2.nrow() {
        return Err(MatrixError::DimensionMismatch {
            m: mat1.nrow(),
            k: mat1.ncol(),
            k2: mat2.nrow(),
            n: mat2.ncol(),
        });
    }

    let (m, k, n) = (mat1.nrow(), mat1.ncol(), mat2.ncol());
    log::trace!("tiled multiply [{}x{}] @ [{}x{}], tile {}", m, k, k, n, tile_size);

    // Accumulation below is `+=`, so the output must start at zero.
    let mut ret = Matrix::zeros(m, n);

    for i in (0..m).step_by(tile_size) {
        let i_end = (i + tile_size).min(m);
        for j in (0..n).step_by(tile_size) {
            let j_end = (j + tile_size).min(n);
            for p in (0..k).step_by(tile_size) {
                let p_end = (p + tile_size).min(k);

                for ti in i..i_end {
                    for tj in j..j_end {
                        let mut v = 0.0;
                        for tp in p..p_end {
                            v += mat1.at(ti, tp) * mat2.at(tp, tj);
                        }
                        *ret.at_mut(ti, tj) += v;
                    }
                }
            }
        }
    }

    Ok(ret)
}

/// Cache-blocked backend with a fixed tile size.
#[derive(Debug, Clone)]
pub struct TiledBackend {
    tile_size: usize,
}

impl TiledBackend {
    /// # Errors
    /// Returns `InvalidTileSize` if `tile_size == 0`.
    pub fn new(tile_size: usize) -> Result<Self> {
        if tile_size == 0 {
            return Err(MatrixError::InvalidTileSize(tile_size));
        }
        Ok(TiledBackend { tile_size })
    }

    pub fn tile_size(&self) -> usize {
        self.tile_size
    }
}

impl DenseMultiplyBackend for TiledBackend {
    fn name(&self) -> &str {
        "tiled"
    }

    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        multiply_tiled(a, b, self.tile_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::multiply_naive;

    /// Integer-valued entries keep every partial sum exact.
    fn int_matrix(nrow: usize, ncol: usize, seed: usize) -> Matrix {
        let mut m = Matrix::new(nrow, ncol);
        for i in 0..nrow {
            for j in 0..ncol {
                *m.at_mut(i, j) = ((i * 7 + j * 3 + seed) % 11) as f64 - 5.0;
            }
        }
        m
    }

    #[test]
    fn test_tiled_basic() {
        let a = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]).unwrap();
        let b = Matrix::from_rows(&[&[5.0, 6.0], &[7.0, 8.0]]).unwrap();
        let expected = Matrix::from_rows(&[&[19.0, 22.0], &[43.0, 50.0]]).unwrap();
        for tile in [1, 2, 3, 64] {
            assert_eq!(multiply_tiled(&a, &b, tile).unwrap(), expected);
        }
    }

    #[test]
    fn test_tiled_ragged_edges_match_naive() {
        // Non-square and not a multiple of any tested tile size.
        let a = int_matrix(7, 5, 1);
        let b = int_matrix(5, 9, 2);
        let expected = multiply_naive(&a, &b);
        for tile in [1, 2, 3, 4, 5, 7, 14] {
            assert_eq!(multiply_tiled(&a, &b, tile).unwrap(), expected, "tile {}", tile);
        }
    }

    #[test]
    fn test_contraction_longer_than_rows() {
        // k > m: every contraction block must be visited.
        let a = int_matrix(2, 10, 3);
        let b = int_matrix(10, 3, 4);
        assert_eq!(multiply_tiled(&a, &b, 3).unwrap(), multiply_naive(&a, &b));
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = Matrix::new(2, 3);
        let b = Matrix::new(2, 2);
        assert_eq!(
            multiply_tiled(&a, &b, 2).unwrap_err(),
            MatrixError::DimensionMismatch { m: 2, k: 3, k2: 2, n: 2 }
        );
    }

    #[test]
    fn test_zero_tile_size() {
        let a = Matrix::identity(2);
        assert_eq!(
            multiply_tiled(&a, &a, 0).unwrap_err(),
            MatrixError::InvalidTileSize(0)
        );
        assert!(TiledBackend::new(0).is_err());
    }

    #[test]
    fn test_empty_contraction_is_zero() {
        let c = multiply_tiled(&Matrix::new(4, 0), &Matrix::new(0, 3), 2).unwrap();
        assert_eq!(c, Matrix::zeros(4, 3));
    }

    #[test]
    fn test_backend() {
        let backend = TiledBackend::new(16).unwrap();
        assert_eq!(backend.name(), "tiled");
        assert_eq!(backend.tile_size(), 16);
        let a = int_matrix(3, 3, 0);
        assert_eq!(backend.multiply(&a, &Matrix::identity(3)).unwrap(), a);
    }
}
