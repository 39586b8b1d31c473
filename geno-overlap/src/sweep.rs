use geno_core::models::Interval;

/// Total number of integer positions covered by both `a` and `b`.
///
/// Two-pointer merge sweep: at each step the current pair is intersected and
/// the pointer whose interval ends first moves on. On equal ends `b` advances.
///
/// Both slices must be sorted ascending by start, with no overlaps inside a
/// slice and non-decreasing ends. This is not checked; unsorted input gives an
/// undefined (but finite) result.
///
/// ```
/// use geno_core::models::Interval;
/// use geno_overlap::total_overlap;
///
/// let a = [Interval { start: 10, end: 50 }];
/// let b = [Interval { start: 20, end: 30 }];
/// assert_eq!(total_overlap(&a, &b), 10);
/// ```
pub fn total_overlap(a: &[Interval], b: &[Interval]) -> u64 {
    let mut total = 0u64;
    let mut i = 0;
    let mut j = 0;

    while i < a.len() && j < b.len() {
        total += a[i].intersect(&b[j]);

        if a[i].end < b[j].end {
            i += 1;
        } else {
            j += 1;
        }
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn make_intervals(pairs: &[(i64, i64)]) -> Vec<Interval> {
        pairs
            .iter()
            .map(|&(start, end)| Interval { start, end })
            .collect()
    }

    #[rstest]
    fn test_worked_example() {
        let a = make_intervals(&[(1, 2), (3, 6)]);
        let b = make_intervals(&[(0, 1), (1, 5)]);
        assert_eq!(total_overlap(&a, &b), 3);
    }

    #[rstest]
    fn test_touching_intervals_do_not_count() {
        let a = make_intervals(&[(100, 200)]);
        let b = make_intervals(&[(200, 300)]);
        assert_eq!(total_overlap(&a, &b), 0);
    }

    #[rstest]
    fn test_full_containment() {
        let a = make_intervals(&[(10, 50)]);
        let b = make_intervals(&[(20, 30)]);
        assert_eq!(total_overlap(&a, &b), 10);
    }

    #[rstest]
    fn test_empty_inputs() {
        let a = make_intervals(&[(0, 10)]);
        assert_eq!(total_overlap(&a, &[]), 0);
        assert_eq!(total_overlap(&[], &a), 0);
        assert_eq!(total_overlap(&[], &[]), 0);
    }

    #[rstest]
    fn test_disjoint_sets() {
        let a = make_intervals(&[(0, 5), (10, 15), (20, 25)]);
        let b = make_intervals(&[(5, 10), (15, 20), (25, 30)]);
        assert_eq!(total_overlap(&a, &b), 0);
    }

    #[rstest]
    fn test_one_interval_spans_many() {
        // [0,100) covers 2 + 3 + 4 positions of b
        let a = make_intervals(&[(0, 100)]);
        let b = make_intervals(&[(10, 12), (20, 23), (96, 100)]);
        assert_eq!(total_overlap(&a, &b), 9);
    }

    #[rstest]
    fn test_equal_ends() {
        let a = make_intervals(&[(0, 10), (12, 20)]);
        let b = make_intervals(&[(5, 10), (10, 20)]);
        // 5 from [5,10) and 8 from [12,20)
        assert_eq!(total_overlap(&a, &b), 13);
    }

    #[rstest]
    fn test_negative_coordinates() {
        let a = make_intervals(&[(-10, -2)]);
        let b = make_intervals(&[(-5, 3)]);
        assert_eq!(total_overlap(&a, &b), 3);
    }

    #[rstest]
    #[case(&[(1, 2), (3, 6)], &[(0, 1), (1, 5)])]
    #[case(&[(0, 100)], &[(10, 12), (20, 23), (96, 100)])]
    #[case(&[(0, 10), (12, 20)], &[(5, 10), (10, 20)])]
    #[case(&[(0, 3), (4, 8), (9, 30)], &[(2, 5), (7, 9), (10, 11), (29, 40)])]
    fn test_symmetric(#[case] a: &[(i64, i64)], #[case] b: &[(i64, i64)]) {
        let a = make_intervals(a);
        let b = make_intervals(b);
        assert_eq!(total_overlap(&a, &b), total_overlap(&b, &a));
    }

    #[rstest]
    fn test_repeat_calls_identical() {
        let a = make_intervals(&[(0, 3), (4, 8), (9, 30)]);
        let b = make_intervals(&[(2, 5), (7, 9), (10, 11), (29, 40)]);
        let first = total_overlap(&a, &b);
        assert_eq!(first, total_overlap(&a, &b));
        // positions 2, 4, 7, 10 and 29
        assert_eq!(first, 5);
    }
}
