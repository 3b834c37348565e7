use dm_matrix::MatrixError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("unknown strategy '{0}': expected naive, tiled:<n> or accelerated")]
    UnknownStrategy(String),
    #[error("matrix error: {0}")]
    Matrix(#[from] MatrixError),
}

pub type Result<T> = std::result::Result<T, BenchError>;
