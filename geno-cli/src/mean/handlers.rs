use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use geno_stats::SeriesStatistics;

use crate::common::{Report, load_intervals, load_series, required};

pub fn run_mean(matches: &ArgMatches) -> Result<()> {
    let segs_path = required(matches, "SEGS")?;
    let fun_path = required(matches, "FUN")?;
    let strict = matches.get_flag("strict");
    let json = matches.get_flag("json");

    let mean = compute_mean(segs_path, fun_path, strict)?;

    Report {
        mean: Some(mean),
        ..Default::default()
    }
    .emit(json)
}

pub fn compute_mean(segs_path: &str, fun_path: &str, strict: bool) -> Result<f64> {
    let segs = load_intervals(segs_path, strict)?;
    let values = load_series(fun_path)?;

    info!(
        "Averaging {} ({} values) inside {} ({} intervals)",
        fun_path,
        values.len(),
        segs_path,
        segs.len()
    );

    values
        .mean_within(&segs)
        .with_context(|| format!("Failed to average {} within {}", fun_path, segs_path))
}
