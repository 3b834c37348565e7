use std::time::Duration;

use prettytable::{row, Table};

use crate::strategy::Strategy;

/// Timing and agreement for one strategy on one case.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub strategy: Strategy,
    pub m: usize,
    pub k: usize,
    pub n: usize,
    /// Fastest of the timed runs.
    pub best: Duration,
    pub mean: Duration,
    /// Throughput at the best time.
    pub gflops: f64,
    /// Largest absolute difference from the naive reference.
    pub max_abs_diff: f64,
    pub agrees: bool,
}

#[derive(Debug, Clone, Default)]
pub struct BenchReport {
    measurements: Vec<Measurement>,
}

impl BenchReport {
    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    pub fn extend<I: IntoIterator<Item = Measurement>>(&mut self, iter: I) {
        self.measurements.extend(iter);
    }

    /// True if every strategy matched the naive reference within tolerance.
    pub fn all_agree(&self) -> bool {
        self.measurements.iter().all(|m| m.agrees)
    }

    pub fn disagreements(&self) -> impl Iterator<Item = &Measurement> {
        self.measurements.iter().filter(|m| !m.agrees)
    }

    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.set_titles(row![
            "shape",
            "strategy",
            "best (ms)",
            "mean (ms)",
            "GFLOP/s",
            "max |diff|",
            "ok"
        ]);
        for m in &self.measurements {
            let shape = format!("{}x{}x{}", m.m, m.k, m.n);
            let strategy = m.strategy.to_string();
            let best = format!("{:.3}", m.best.as_secs_f64() * 1e3);
            let mean = format!("{:.3}", m.mean.as_secs_f64() * 1e3);
            let gflops = format!("{:.3}", m.gflops);
            let diff = format!("{:.2e}", m.max_abs_diff);
            let ok = if m.agrees { "yes" } else { "NO" };
            table.add_row(row![shape, strategy, best, mean, gflops, diff, ok]);
        }
        table
    }

    /// Print the table to stdout.
    pub fn print(&self) {
        self.to_table().printstd();
    }
}
