use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use geno_stats::SeriesStatistics;

use crate::common::{Report, load_series, required};

pub fn run_correlate(matches: &ArgMatches) -> Result<()> {
    let x_path = required(matches, "FUN_X")?;
    let y_path = required(matches, "FUN_Y")?;
    let json = matches.get_flag("json");

    let correlation = compute_correlation(x_path, y_path)?;

    Report {
        correlation: Some(correlation),
        ..Default::default()
    }
    .emit(json)
}

pub fn compute_correlation(x_path: &str, y_path: &str) -> Result<f64> {
    let x = load_series(x_path)?;
    let y = load_series(y_path)?;

    info!("Correlating {} and {} ({} values)", x_path, y_path, x.len());

    x.pearson(&y)
        .with_context(|| format!("Failed to correlate {} and {}", x_path, y_path))
}
