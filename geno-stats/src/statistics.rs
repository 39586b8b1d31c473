//! Series statistics exposed as methods on [`Series`].

use geno_core::models::{IntervalSet, Series};

use crate::alignment::mean_within_intervals;
use crate::correlation::pearson;
use crate::errors::GenoStatsError;

/// Trait for computing statistics of a position-indexed series.
pub trait SeriesStatistics {
    /// Pearson correlation against another series of the same length.
    fn pearson(&self, other: &Series) -> Result<f64, GenoStatsError>;

    /// Mean of the values at positions covered by `segs`.
    ///
    /// `segs` must be sorted; see [`mean_within_intervals`].
    fn mean_within(&self, segs: &IntervalSet) -> Result<f64, GenoStatsError>;
}

impl SeriesStatistics for Series {
    fn pearson(&self, other: &Series) -> Result<f64, GenoStatsError> {
        pearson(&self.values, &other.values)
    }

    fn mean_within(&self, segs: &IntervalSet) -> Result<f64, GenoStatsError> {
        mean_within_intervals(&segs.intervals, &self.values)
    }
}
