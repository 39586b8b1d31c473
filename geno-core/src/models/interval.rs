use crate::errors::ParseError;

/// Represent a range from [start, end)
/// Inclusive start, exclusive of end
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
pub struct Interval {
    pub start: i64,
    pub end: i64,
}

impl Interval {
    ///
    /// Create a new interval, rejecting empty or inverted bounds.
    ///
    /// `line` is only used to label the error.
    pub fn new(start: i64, end: i64, line: usize) -> Result<Self, ParseError> {
        if start >= end {
            return Err(ParseError::InvertedInterval { line, start, end });
        }
        Ok(Interval { start, end })
    }

    /// Compute the length of the intersection between two intervals.
    /// Touching intervals intersect in zero positions.
    #[inline]
    pub fn intersect(&self, other: &Interval) -> u64 {
        let s = self.start.max(other.start);
        let e = self.end.min(other.end);
        if s < e { e.abs_diff(s) } else { 0 }
    }

    /// Check if `pos` lies inside the interval
    #[inline]
    pub fn contains(&self, pos: i64) -> bool {
        self.start <= pos && pos < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_new_rejects_inverted() {
        assert!(Interval::new(5, 5, 1).is_err());
        assert!(Interval::new(6, 5, 1).is_err());
        assert!(Interval::new(-3, 5, 1).is_ok());
    }

    #[rstest]
    #[case((10, 50), (20, 30), 10)]
    #[case((100, 200), (200, 300), 0)]
    #[case((0, 5), (3, 9), 2)]
    #[case((0, 5), (7, 9), 0)]
    fn test_intersect(#[case] a: (i64, i64), #[case] b: (i64, i64), #[case] expected: u64) {
        let a = Interval { start: a.0, end: a.1 };
        let b = Interval { start: b.0, end: b.1 };
        assert_eq!(a.intersect(&b), expected);
        assert_eq!(b.intersect(&a), expected);
    }

    #[rstest]
    fn test_contains_is_half_open() {
        let iv = Interval { start: 3, end: 6 };
        assert!(!iv.contains(2));
        assert!(iv.contains(3));
        assert!(iv.contains(5));
        assert!(!iv.contains(6));
    }
}
