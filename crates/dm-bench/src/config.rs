use clap::Parser;

use crate::error::{BenchError, Result};
use crate::strategy::Strategy;

/// Compare timings and results of the naive, tiled and accelerated
/// multiplication strategies on random matrices.
#[derive(Parser, Debug, Default)]
#[command(name = "dm-bench")]
#[command(version, about, long_about = None)]
pub struct BenchArgs {
    /// Output sizes to benchmark; each case is [size x inner] @ [inner x size]
    #[arg(short, long = "size", value_name = "N", value_delimiter = ',')]
    pub sizes: Vec<usize>,

    /// Contraction length (defaults to the output size, i.e. square operands)
    #[arg(short = 'k', long, value_name = "K")]
    pub inner: Option<usize>,

    /// Strategies to run: naive, tiled:<n>, accelerated
    #[arg(long = "strategy", value_name = "NAME", value_delimiter = ',')]
    pub strategies: Vec<Strategy>,

    /// Tile sizes; each adds a tiled:<n> strategy
    #[arg(short, long = "tile", value_name = "N", value_delimiter = ',')]
    pub tiles: Vec<usize>,

    /// Timed runs per strategy and case
    #[arg(short, long)]
    pub repeats: Option<usize>,

    /// Seed for operand generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Relative tolerance when comparing against the naive reference
    #[arg(long)]
    pub tolerance: Option<f64>,
}

/// Validated benchmark configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    /// Output dimensions; each case multiplies `[m x k] @ [k x n]` with `m = n = size`.
    pub sizes: Vec<usize>,
    /// Fixed contraction length; `None` means `k = size`.
    pub inner: Option<usize>,
    pub strategies: Vec<Strategy>,
    pub repeats: usize,
    pub seed: u64,
    pub tolerance: f64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            sizes: vec![64, 128, 256],
            inner: None,
            strategies: vec![
                Strategy::Naive,
                Strategy::Tiled(16),
                Strategy::Tiled(64),
                Strategy::Accelerated,
            ],
            repeats: 3,
            seed: 0,
            tolerance: 1e-9,
        }
    }
}

impl BenchConfig {
    /// Build a configuration from parsed command-line arguments, filling in
    /// defaults for anything not given.
    ///
    /// `--tile` values are appended as `tiled:<n>` strategies. When only
    /// tiles are given, the naive and accelerated strategies bracket them.
    pub fn from_args(args: BenchArgs) -> Result<Self> {
        let defaults = BenchConfig::default();

        let mut strategies = args.strategies;
        if strategies.is_empty() && !args.tiles.is_empty() {
            strategies.push(Strategy::Naive);
            strategies.extend(args.tiles.iter().map(|&t| Strategy::Tiled(t)));
            strategies.push(Strategy::Accelerated);
        } else if strategies.is_empty() {
            strategies = defaults.strategies;
        } else {
            strategies.extend(args.tiles.iter().map(|&t| Strategy::Tiled(t)));
        }
        let mut seen = Vec::with_capacity(strategies.len());
        strategies.retain(|s| {
            if seen.contains(s) {
                false
            } else {
                seen.push(*s);
                true
            }
        });

        let config = BenchConfig {
            sizes: if args.sizes.is_empty() {
                defaults.sizes
            } else {
                args.sizes
            },
            inner: args.inner,
            strategies,
            repeats: args.repeats.unwrap_or(defaults.repeats),
            seed: args.seed.unwrap_or(defaults.seed),
            tolerance: args.tolerance.unwrap_or(defaults.tolerance),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values the harness cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(BenchError::InvalidConfig("no sizes given".to_string()));
        }
        if self.strategies.is_empty() {
            return Err(BenchError::InvalidConfig("no strategies given".to_string()));
        }
        if self.repeats == 0 {
            return Err(BenchError::InvalidConfig(
                "repeats must be at least 1".to_string(),
            ));
        }
        if self.strategies.contains(&Strategy::Tiled(0)) {
            return Err(BenchError::InvalidConfig(
                "tile size must be at least 1".to_string(),
            ));
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(BenchError::InvalidConfig(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }

    /// The `(m, k, n)` shape of every case, in run order.
    pub fn cases(&self) -> Vec<(usize, usize, usize)> {
        self.sizes
            .iter()
            .map(|&size| (size, self.inner.unwrap_or(size), size))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> BenchArgs {
        BenchArgs::try_parse_from(std::iter::once("dm-bench").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = BenchConfig::from_args(parse(&[])).unwrap();
        assert_eq!(config, BenchConfig::default());
    }

    #[test]
    fn test_full_args() {
        let config = BenchConfig::from_args(parse(&[
            "--size", "8,16", "-k", "5", "--strategy", "naive,tiled:4",
            "--tile", "2", "-r", "2", "--seed", "7", "--tolerance", "1e-6",
        ]))
        .unwrap();
        assert_eq!(config.sizes, vec![8, 16]);
        assert_eq!(config.inner, Some(5));
        assert_eq!(
            config.strategies,
            vec![Strategy::Naive, Strategy::Tiled(4), Strategy::Tiled(2)]
        );
        assert_eq!(config.repeats, 2);
        assert_eq!(config.seed, 7);
        assert_eq!(config.cases(), vec![(8, 5, 8), (16, 5, 16)]);
    }

    #[test]
    fn test_tiles_only_brackets_with_reference_strategies() {
        let config = BenchConfig::from_args(parse(&["-t", "8,8,32"])).unwrap();
        assert_eq!(
            config.strategies,
            vec![
                Strategy::Naive,
                Strategy::Tiled(8),
                Strategy::Tiled(32),
                Strategy::Accelerated
            ]
        );
    }

    #[test]
    fn test_invalid_strategy_rejected_by_parser() {
        let res = BenchArgs::try_parse_from(["dm-bench", "--strategy", "strassen"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_validate() {
        let mut config = BenchConfig::default();
        config.repeats = 0;
        assert!(config.validate().is_err());

        let mut config = BenchConfig::default();
        config.tolerance = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = BenchConfig::default();
        config.strategies.push(Strategy::Tiled(0));
        assert!(config.validate().is_err());

        let mut config = BenchConfig::default();
        config.sizes.clear();
        assert!(config.validate().is_err());

        assert!(BenchConfig::from_args(parse(&["--tile", "0"])).is_err());
    }
}
