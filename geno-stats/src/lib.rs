//! Statistics relating position-indexed series to each other and to interval sets.
//!
//! - [`pearson`]: Pearson correlation between two series of equal length
//! - [`mean_within_intervals`]: mean of a series over the positions covered by a sorted interval set
//!
//! Both are pure functions over borrowed slices. [`SeriesStatistics`] offers the
//! same computations as methods on [`geno_core::models::Series`].
//!
//! # Example
//!
//! ```no_run
//! use geno_core::models::{IntervalSet, Series};
//! use geno_stats::SeriesStatistics;
//!
//! let segs = IntervalSet::try_from("peaks.s").unwrap();
//! let x = Series::try_from("x.f").unwrap();
//! let y = Series::try_from("y.f").unwrap();
//!
//! let r = x.pearson(&y).unwrap();
//! let covered_mean = y.mean_within(&segs).unwrap();
//! ```

pub mod alignment;
pub mod correlation;
pub mod errors;
pub mod statistics;

// re-exports
pub use alignment::mean_within_intervals;
pub use correlation::pearson;
pub use errors::GenoStatsError;
pub use statistics::SeriesStatistics;
