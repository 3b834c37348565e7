use std::time::{Duration, Instant};

use dm_matrix::{multiply_naive, Matrix};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::BenchConfig;
use crate::error::Result;
use crate::report::{BenchReport, Measurement};

/// A matrix with entries drawn uniformly from `[-1, 1)`.
pub fn random_matrix<R: Rng + ?Sized>(nrow: usize, ncol: usize, rng: &mut R) -> Matrix {
    let mut m = Matrix::new(nrow, ncol);
    for v in m.as_mut_slice() {
        *v = rng.gen_range(-1.0..1.0);
    }
    m
}

/// Floating-point operations of an `[m x k] @ [k x n]` product.
fn flops(m: usize, k: usize, n: usize) -> f64 {
    2.0 * m as f64 * k as f64 * n as f64
}

/// Run every configured strategy on one `[m x k] @ [k x n]` operand pair.
///
/// The naive product is computed once up front as the reference; every
/// strategy's result is compared against it with the configured tolerance.
pub fn run_case<R: Rng + ?Sized>(
    config: &BenchConfig,
    m: usize,
    k: usize,
    n: usize,
    rng: &mut R,
) -> Result<Vec<Measurement>> {
    log::info!("case [{}x{}] @ [{}x{}]", m, k, k, n);
    let a = random_matrix(m, k, rng);
    let b = random_matrix(k, n, rng);
    let reference = multiply_naive(&a, &b);

    let mut measurements = Vec::with_capacity(config.strategies.len());
    for strategy in &config.strategies {
        let backend = strategy.backend()?;

        let mut best = Duration::MAX;
        let mut total = Duration::ZERO;
        let mut result = None;
        for _ in 0..config.repeats {
            let start = Instant::now();
            let c = backend.multiply(&a, &b)?;
            let elapsed = start.elapsed();
            best = best.min(elapsed);
            total += elapsed;
            result = Some(c);
        }
        let mean = total / config.repeats as u32;

        let (max_abs_diff, agrees) = match result {
            Some(c) => (
                c.max_abs_diff(&reference).unwrap_or(f64::INFINITY),
                c.approx_eq(&reference, config.tolerance),
            ),
            None => (f64::INFINITY, false),
        };

        let secs = best.as_secs_f64();
        let gflops = if secs > 0.0 {
            flops(m, k, n) / secs / 1e9
        } else {
            0.0
        };

        log::debug!(
            "{} [{}x{}x{}]: best {:?}, mean {:?}, {:.3} GFLOP/s, max diff {:e}",
            strategy,
            m,
            k,
            n,
            best,
            mean,
            gflops,
            max_abs_diff
        );
        if !agrees {
            log::warn!(
                "{} disagrees with naive reference on [{}x{}x{}]: max diff {:e}",
                strategy,
                m,
                k,
                n,
                max_abs_diff
            );
        }

        measurements.push(Measurement {
            strategy: *strategy,
            m,
            k,
            n,
            best,
            mean,
            gflops,
            max_abs_diff,
            agrees,
        });
    }
    Ok(measurements)
}

/// Run all cases in the configuration.
pub fn run(config: &BenchConfig) -> Result<BenchReport> {
    config.validate()?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut report = BenchReport::default();
    for (m, k, n) in config.cases() {
        report.extend(run_case(config, m, k, n, &mut rng)?);
    }
    Ok(report)
}
