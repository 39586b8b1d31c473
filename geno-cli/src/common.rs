use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::debug;
use serde::Serialize;

use geno_core::models::{IntervalSet, Series, SortedIntervalSet};

///
/// Fetch a required string argument. clap enforces presence, so a miss here
/// means the command definition and the handler disagree on the id.
///
pub fn required<'a>(matches: &'a ArgMatches, id: &str) -> Result<&'a String> {
    matches
        .get_one::<String>(id)
        .with_context(|| format!("Missing required argument: {}", id))
}

///
/// Read a segment file. With `strict`, the intervals must also be sorted and
/// non-overlapping.
///
pub fn load_intervals(path: &str, strict: bool) -> Result<IntervalSet> {
    let set = IntervalSet::try_from(path)
        .with_context(|| format!("Failed to load segment file: {}", path))?;

    if !strict {
        return Ok(set);
    }

    let sorted = SortedIntervalSet::try_from(set)
        .with_context(|| format!("Segment file is not sorted and disjoint: {}", path))?;
    debug!("{} passed ordering checks", path);

    Ok(sorted.into_inner())
}

pub fn load_series(path: &str) -> Result<Series> {
    Series::try_from(path).with_context(|| format!("Failed to load function file: {}", path))
}

///
/// Results of one invocation. Only the computations that ran are filled in.
///
#[derive(Serialize, Default, Debug, PartialEq)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlap: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean: Option<f64>,
}

impl Report {
    ///
    /// Write the report to `out`, either as pretty JSON or one bare number per line.
    ///
    pub fn write<W: Write>(&self, out: &mut W, json: bool) -> Result<()> {
        if json {
            let body =
                serde_json::to_string_pretty(self).context("Failed to serialize output to JSON")?;
            writeln!(out, "{}", body)?;
            return Ok(());
        }

        if let Some(overlap) = self.overlap {
            writeln!(out, "{}", overlap)?;
        }
        if let Some(correlation) = self.correlation {
            writeln!(out, "{}", correlation)?;
        }
        if let Some(mean) = self.mean {
            writeln!(out, "{}", mean)?;
        }
        Ok(())
    }

    pub fn emit(&self, json: bool) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write(&mut out, json)?;
        out.flush()?;
        Ok(())
    }
}
