use std::io::BufRead;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::debug;

use crate::errors::{OrderError, ParseError};
use crate::models::Interval;
use crate::utils::get_dynamic_reader;

///
/// IntervalSet struct, the representation of a segment file: one `start end`
/// pair per line.
///
/// Intervals are kept in file order. Nothing here checks that they are sorted
/// or disjoint; see [SortedIntervalSet] for that.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IntervalSet {
    pub intervals: Vec<Interval>,
    pub path: Option<PathBuf>,
}

impl IntervalSet {
    ///
    /// Parse an interval listing from any buffered reader.
    ///
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, ParseError> {
        let mut intervals = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            intervals.push(parse_interval_line(&line, idx + 1)?);
        }

        Ok(IntervalSet {
            intervals,
            path: None,
        })
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}

/// Parse one `start end` line. `line_num` is 1-based.
///
/// Tokens are separated by any run of whitespace, but the line itself must not
/// start or end with whitespace.
fn parse_interval_line(line: &str, line_num: usize) -> Result<Interval, ParseError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() != 2 || line.trim() != line {
        return Err(ParseError::InvalidLineFormat {
            line: line_num,
            content: line.to_string(),
        });
    }

    let start = parts[0]
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidStart {
            line: line_num,
            token: parts[0].to_string(),
        })?;
    let end = parts[1]
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidEnd {
            line: line_num,
            token: parts[1].to_string(),
        })?;

    Interval::new(start, end, line_num)
}

impl TryFrom<&Path> for IntervalSet {
    type Error = ParseError;

    ///
    /// Create a new [IntervalSet] from a segment file.
    ///
    /// # Arguments:
    /// - value: path to the file on disk, optionally gzipped.
    fn try_from(value: &Path) -> Result<Self, ParseError> {
        let reader = get_dynamic_reader(value)?;
        let mut set = IntervalSet::from_reader(reader)?;
        set.path = Some(value.to_owned());

        debug!("Read {} intervals from {}", set.len(), value.display());

        Ok(set)
    }
}

impl TryFrom<&str> for IntervalSet {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, ParseError> {
        IntervalSet::try_from(Path::new(value))
    }
}

impl TryFrom<PathBuf> for IntervalSet {
    type Error = ParseError;

    fn try_from(value: PathBuf) -> Result<Self, ParseError> {
        IntervalSet::try_from(value.as_path())
    }
}

impl FromStr for IntervalSet {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IntervalSet::from_reader(s.as_bytes())
    }
}

impl From<Vec<Interval>> for IntervalSet {
    fn from(intervals: Vec<Interval>) -> Self {
        IntervalSet {
            intervals,
            path: None,
        }
    }
}

impl Deref for IntervalSet {
    type Target = [Interval];

    fn deref(&self) -> &Self::Target {
        &self.intervals
    }
}

///
/// An [IntervalSet] that has been checked to be sorted by start and free of
/// overlaps. Touching intervals (`a.end == b.start`) are allowed.
///
/// Construction never reorders anything: out-of-order input is rejected with
/// the index of the first offending interval.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortedIntervalSet(IntervalSet);

impl SortedIntervalSet {
    pub fn into_inner(self) -> IntervalSet {
        self.0
    }
}

impl TryFrom<IntervalSet> for SortedIntervalSet {
    type Error = OrderError;

    fn try_from(set: IntervalSet) -> Result<Self, Self::Error> {
        for (index, pair) in set.intervals.windows(2).enumerate() {
            let (prev, curr) = (&pair[0], &pair[1]);
            if curr.start < prev.start {
                return Err(OrderError::Unsorted { index: index + 1 });
            }
            if curr.start < prev.end {
                return Err(OrderError::Overlapping { index: index + 1 });
            }
        }
        Ok(SortedIntervalSet(set))
    }
}

impl Deref for SortedIntervalSet {
    type Target = IntervalSet;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
