use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid line format at line {line}: {content}")]
    InvalidLineFormat { line: usize, content: String },

    #[error("Invalid start position at line {line}: {token}")]
    InvalidStart { line: usize, token: String },

    #[error("Invalid end position at line {line}: {token}")]
    InvalidEnd { line: usize, token: String },

    #[error("Start position must be less than end position at line {line}: {start} {end}")]
    InvertedInterval { line: usize, start: i64, end: i64 },

    #[error("Invalid value at line {line}: {content}")]
    InvalidValue { line: usize, content: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Violations reported by [`crate::models::SortedIntervalSet`].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum OrderError {
    #[error("Interval at index {index} starts before the previous interval")]
    Unsorted { index: usize },

    #[error("Interval at index {index} overlaps the previous interval")]
    Overlapping { index: usize },
}
