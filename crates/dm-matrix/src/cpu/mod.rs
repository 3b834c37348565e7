pub mod naive;
pub mod tiled;

pub use naive::{multiply_naive, NaiveBackend};
pub use tiled::{multiply_tiled, TiledBackend};
