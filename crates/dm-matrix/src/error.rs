use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("matmul dimension mismatch: [{m}x{k}] @ [{k2}x{n}]")]
    DimensionMismatch {
        m: usize,
        k: usize,
        k2: usize,
        n: usize,
    },
    #[error("invalid tile size {0}: must be at least 1")]
    InvalidTileSize(usize),
    #[error("index ({row}, {col}) out of range for [{nrow}x{ncol}] matrix")]
    OutOfRange {
        row: usize,
        col: usize,
        nrow: usize,
        ncol: usize,
    },
    #[error("buffer length mismatch: expected {expected}, got {got}")]
    LengthMismatch { expected: usize, got: usize },
}

pub type Result<T> = std::result::Result<T, MatrixError>;
