use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GenoStatsError {
    #[error("Series must have the same size: {left} != {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("Standard deviation is zero, cannot calculate correlation")]
    ZeroVariance,

    #[error("No function values fall within the segments")]
    NoCoverage,
}
