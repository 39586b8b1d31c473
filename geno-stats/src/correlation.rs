//! Pearson correlation between two position-matched series.

use crate::errors::GenoStatsError;

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Square root of the sum of squared deviations from `mean`.
///
/// Unlike a standard deviation this is not divided by the length; the factor
/// cancels in the correlation ratio.
fn sqrt_sum_squares(values: &[f64], mean: f64) -> f64 {
    values
        .iter()
        .map(|v| (v - mean) * (v - mean))
        .sum::<f64>()
        .sqrt()
}

/// Pearson correlation coefficient between `x` and `y`.
///
/// # Errors
///
/// - [`GenoStatsError::LengthMismatch`] if the series differ in length.
/// - [`GenoStatsError::ZeroVariance`] if either series has no spread. The check
///   is an exact `== 0.0` comparison, so a series that is constant only up to
///   rounding is not caught and yields a very large or non-finite ratio.
///   Empty and single-value series always land here.
///
/// ```
/// use geno_stats::pearson;
///
/// let x = [1.0, 2.0, 3.0];
/// let y = [2.0, 4.0, 6.0];
/// assert!((pearson(&x, &y).unwrap() - 1.0).abs() < 1e-12);
/// ```
pub fn pearson(x: &[f64], y: &[f64]) -> Result<f64, GenoStatsError> {
    if x.len() != y.len() {
        return Err(GenoStatsError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }

    let mean_x = mean(x);
    let mean_y = mean(y);

    let ss_x = sqrt_sum_squares(x, mean_x);
    let ss_y = sqrt_sum_squares(y, mean_y);

    if ss_x == 0.0 || ss_y == 0.0 {
        return Err(GenoStatsError::ZeroVariance);
    }

    let cross: f64 = x
        .iter()
        .zip(y.iter())
        .map(|(xi, yi)| (xi - mean_x) * (yi - mean_y))
        .sum();

    Ok(cross / (ss_x * ss_y))
}
