use anyhow::Result;
use clap::ArgMatches;
use log::info;

use geno_overlap::OverlapLength;

use crate::common::{Report, load_intervals, required};

pub fn run_overlap(matches: &ArgMatches) -> Result<()> {
    let a_path = required(matches, "SEG_A")?;
    let b_path = required(matches, "SEG_B")?;
    let strict = matches.get_flag("strict");
    let json = matches.get_flag("json");

    let overlap = compute_overlap(a_path, b_path, strict)?;

    Report {
        overlap: Some(overlap),
        ..Default::default()
    }
    .emit(json)
}

pub fn compute_overlap(a_path: &str, b_path: &str, strict: bool) -> Result<u64> {
    let a = load_intervals(a_path, strict)?;
    let b = load_intervals(b_path, strict)?;

    info!(
        "Computing overlap of {} ({} intervals) and {} ({} intervals)",
        a_path,
        a.len(),
        b_path,
        b.len()
    );

    Ok(a.overlap_length(&b))
}
