use std::fmt;
use std::str::FromStr;

use dm_matrix::{AcceleratedBackend, DenseMultiplyBackend, NaiveBackend, TiledBackend};

use crate::error::{BenchError, Result};

/// One of the interchangeable multiplication strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Naive,
    Tiled(usize),
    Accelerated,
}

impl Strategy {
    /// Instantiate the backend implementing this strategy.
    ///
    /// # Errors
    /// Returns an error for `Tiled(0)`.
    pub fn backend(&self) -> Result<Box<dyn DenseMultiplyBackend>> {
        Ok(match *self {
            Strategy::Naive => Box::new(NaiveBackend::new()),
            Strategy::Tiled(tile) => Box::new(TiledBackend::new(tile)?),
            Strategy::Accelerated => Box::new(AcceleratedBackend::new()),
        })
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Naive => write!(f, "naive"),
            Strategy::Tiled(tile) => write!(f, "tiled:{}", tile),
            Strategy::Accelerated => write!(f, "accelerated"),
        }
    }
}

impl FromStr for Strategy {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "naive" => return Ok(Strategy::Naive),
            "accelerated" | "blas" | "mkl" => return Ok(Strategy::Accelerated),
            _ => {}
        }
        if let Some(tile) = lower.strip_prefix("tiled:") {
            let tile: usize = tile
                .parse()
                .map_err(|_| BenchError::UnknownStrategy(s.to_string()))?;
            if tile == 0 {
                return Err(BenchError::InvalidConfig(
                    "tile size must be at least 1".to_string(),
                ));
            }
            return Ok(Strategy::Tiled(tile));
        }
        Err(BenchError::UnknownStrategy(s.to_string()))
    }
}
