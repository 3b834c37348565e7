use anyhow::{bail, Context, Result};
use clap::Parser;

use dm_bench::{run, BenchArgs, BenchConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = BenchConfig::from_args(BenchArgs::parse()).context("invalid arguments")?;
    log::info!(
        "running {} case(s) x {} strategies, {} repeat(s), seed {}",
        config.sizes.len(),
        config.strategies.len(),
        config.repeats,
        config.seed
    );

    let report = run(&config)?;
    report.print();

    let failed = report.disagreements().count();
    if failed > 0 {
        bail!(
            "{} measurement(s) disagreed with the naive reference beyond tolerance {:e}",
            failed,
            config.tolerance
        );
    }
    Ok(())
}
