//! Align a position-indexed series against an interval set.

use geno_core::models::Interval;

use crate::errors::GenoStatsError;

/// Mean of the values whose position (their index in `values`) lies inside
/// any interval of `segs`.
///
/// One forward pass over `values`. The interval cursor never moves backwards:
/// for each position it first skips intervals that end at or before it, then
/// tests the current interval. `segs` must be sorted by start with
/// non-decreasing ends; otherwise covered positions can be missed silently.
///
/// # Errors
///
/// [`GenoStatsError::NoCoverage`] if no position is covered.
///
/// ```
/// use geno_core::models::Interval;
/// use geno_stats::mean_within_intervals;
///
/// let segs = [Interval { start: 1, end: 3 }];
/// let values = [100.0, 2.0, 4.0, 100.0];
/// assert_eq!(mean_within_intervals(&segs, &values).unwrap(), 3.0);
/// ```
pub fn mean_within_intervals(segs: &[Interval], values: &[f64]) -> Result<f64, GenoStatsError> {
    let mut sum = 0.0;
    let mut count = 0usize;
    let mut seg_index = 0;

    for (i, value) in values.iter().enumerate() {
        let pos = i as i64;

        while seg_index < segs.len() && segs[seg_index].end <= pos {
            seg_index += 1;
        }

        if seg_index < segs.len() && segs[seg_index].contains(pos) {
            sum += value;
            count += 1;
        }
    }

    if count == 0 {
        return Err(GenoStatsError::NoCoverage);
    }

    Ok(sum / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    const VALUES: [f64; 7] = [10.5, 11.5, 12.0, 13.0, 13.5, 15.0, 14.0];

    fn make_intervals(pairs: &[(i64, i64)]) -> Vec<Interval> {
        pairs
            .iter()
            .map(|&(start, end)| Interval { start, end })
            .collect()
    }

    #[rstest]
    fn test_known_sample() {
        let segs = make_intervals(&[(1, 2), (3, 6)]);
        let mean = mean_within_intervals(&segs, &VALUES).unwrap();
        assert!((mean - 13.25).abs() < 1e-9, "mean={}", mean);
    }

    #[rstest]
    fn test_no_coverage() {
        let segs = make_intervals(&[(10, 11), (20, 21)]);
        assert_eq!(
            mean_within_intervals(&segs, &[1.0, 2.0, 3.0]),
            Err(GenoStatsError::NoCoverage)
        );
    }

    #[rstest]
    #[case(&[], &VALUES)]
    #[case(&[(0, 5)], &[])]
    fn test_empty_inputs(#[case] segs: &[(i64, i64)], #[case] values: &[f64]) {
        let segs = make_intervals(segs);
        assert_eq!(
            mean_within_intervals(&segs, values),
            Err(GenoStatsError::NoCoverage)
        );
    }

    #[rstest]
    fn test_interval_past_series_end_is_clipped() {
        // only index 6 is inside the series
        let segs = make_intervals(&[(6, 100)]);
        assert_eq!(mean_within_intervals(&segs, &VALUES).unwrap(), 14.0);
    }

    #[rstest]
    fn test_negative_start_covers_from_zero() {
        let segs = make_intervals(&[(-5, 2)]);
        assert_eq!(mean_within_intervals(&segs, &VALUES).unwrap(), 11.0);
    }

    #[rstest]
    fn test_skips_intervals_behind_position() {
        // the first two intervals end at or before index 0
        let segs = make_intervals(&[(-10, -5), (-4, 0), (2, 3), (5, 6)]);
        let mean = mean_within_intervals(&segs, &VALUES).unwrap();
        assert_eq!(mean, (12.0 + 15.0) / 2.0);
    }

    #[rstest]
    fn test_repeat_calls_identical() {
        let segs = make_intervals(&[(1, 2), (3, 6)]);
        let first = mean_within_intervals(&segs, &VALUES).unwrap();
        let second = mean_within_intervals(&segs, &VALUES).unwrap();
        assert_eq!(first.to_bits(), second.to_bits());
    }
}
