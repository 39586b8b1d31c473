use anyhow::Result;
use clap::ArgMatches;

use crate::common::{Report, required};
use crate::correlate::handlers::compute_correlation;
use crate::mean::handlers::compute_mean;
use crate::overlap::handlers::compute_overlap;

pub fn run_all(matches: &ArgMatches) -> Result<()> {
    let seg_a = required(matches, "seg-a")?;
    let seg_b = required(matches, "seg-b")?;
    let fun_a = required(matches, "fun-a")?;
    let fun_b = required(matches, "fun-b")?;
    let strict = matches.get_flag("strict");
    let json = matches.get_flag("json");

    compute_all(seg_a, seg_b, fun_a, fun_b, strict)?.emit(json)
}

///
/// Overlap of the two segment files, correlation of the two function files and
/// the mean of `fun_b` inside `seg_a`. Stops at the first failure.
///
pub fn compute_all(
    seg_a: &str,
    seg_b: &str,
    fun_a: &str,
    fun_b: &str,
    strict: bool,
) -> Result<Report> {
    Ok(Report {
        overlap: Some(compute_overlap(seg_a, seg_b, strict)?),
        correlation: Some(compute_correlation(fun_a, fun_b)?),
        mean: Some(compute_mean(seg_a, fun_b, strict)?),
    })
}
