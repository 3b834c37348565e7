use crate::backend::DenseMultiplyBackend;
use crate::error::Result;
use crate::matrix::Matrix;

/// Textbook triple-loop multiplication.
///
/// No dimension validation is performed: `mat1.ncol()` is taken as the
/// contraction length. Mismatched operands either panic on an out-of-buffer
/// read or produce a meaningless result.
pub fn multiply_naive(mat1: &Matrix, mat2: &Matrix) -> Matrix {
    let (m, k, n) = (mat1.nrow(), mat1.ncol(), mat2.ncol());
    log::trace!("naive multiply [{}x{}] @ [{}x{}]", m, k, mat2.nrow(), n);

    let mut ret = Matrix::new(m, n);
    for i in 0..m {
        for j in 0..n {
            let mut v = 0.0;
            for p in 0..k {
                v += mat1.at(i, p) * mat2.at(p, j);
            }
            *ret.at_mut(i, j) = v;
        }
    }
    ret
}

/// Pure-Rust reference backend wrapping [`multiply_naive`].
#[derive(Debug, Clone, Default)]
pub struct NaiveBackend;

impl NaiveBackend {
    pub fn new() -> Self {
        NaiveBackend
    }
}

impl DenseMultiplyBackend for NaiveBackend {
    fn name(&self) -> &str {
        "naive"
    }

    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        Ok(multiply_naive(a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naive_basic() {
        // [1,2;3,4] @ [5,6;7,8] = [19,22;43,50]
        let a = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]).unwrap();
        let b = Matrix::from_rows(&[&[5.0, 6.0], &[7.0, 8.0]]).unwrap();
        let c = multiply_naive(&a, &b);
        let expected = Matrix::from_rows(&[&[19.0, 22.0], &[43.0, 50.0]]).unwrap();
        assert_eq!(c, expected);
    }

    #[test]
    fn test_naive_rectangular() {
        let a = Matrix::from_rows(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]).unwrap();
        let b = Matrix::from_rows(&[&[7.0, 8.0], &[9.0, 10.0], &[11.0, 12.0]]).unwrap();
        let c = multiply_naive(&a, &b);
        assert_eq!(c.nrow(), 2);
        assert_eq!(c.ncol(), 2);
        assert_eq!(c, Matrix::from_rows(&[&[58.0, 64.0], &[139.0, 154.0]]).unwrap());
    }

    #[test]
    fn test_naive_empty_contraction() {
        let c = multiply_naive(&Matrix::new(3, 0), &Matrix::new(0, 2));
        assert_eq!(c, Matrix::zeros(3, 2));
    }

    #[test]
    fn test_naive_does_not_mutate_operands() {
        let a = Matrix::identity(2);
        let b = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]).unwrap();
        let (a0, b0) = (a.clone(), b.clone());
        let _ = multiply_naive(&a, &b);
        assert_eq!(a, a0);
        assert_eq!(b, b0);
    }

    #[test]
    fn test_backend_name() {
        let backend = NaiveBackend::new();
        assert_eq!(backend.name(), "naive");
        let c = backend.multiply(&Matrix::identity(2), &Matrix::identity(2)).unwrap();
        assert_eq!(c, Matrix::identity(2));
    }
}
