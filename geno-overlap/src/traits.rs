use geno_core::models::{IntervalSet, SortedIntervalSet};

use crate::sweep::total_overlap;

/// Overlap length against another interval set, as a method.
pub trait OverlapLength {
    /// Number of integer positions covered by both `self` and `other`.
    fn overlap_length(&self, other: &Self) -> u64;
}

impl OverlapLength for IntervalSet {
    fn overlap_length(&self, other: &Self) -> u64 {
        total_overlap(&self.intervals, &other.intervals)
    }
}

impl OverlapLength for SortedIntervalSet {
    fn overlap_length(&self, other: &Self) -> u64 {
        total_overlap(&self.intervals, &other.intervals)
    }
}
