//! Overlap length between two interval sets.
//!
//! Both inputs are walked once with a two-pointer merge sweep, so the cost is
//! linear in the total number of intervals. This only gives the right answer
//! when each input is sorted by start, free of self-overlaps and has
//! non-decreasing ends. Nothing here checks that. Callers that cannot vouch
//! for their input should build a [`geno_core::models::SortedIntervalSet`] first.
//!
//! ## Quick Start
//!
//! ```rust
//! use geno_core::models::{Interval, IntervalSet};
//! use geno_overlap::{OverlapLength, total_overlap};
//!
//! let a = IntervalSet::from(vec![
//!     Interval { start: 1, end: 2 },
//!     Interval { start: 3, end: 6 },
//! ]);
//! let b = IntervalSet::from(vec![
//!     Interval { start: 0, end: 1 },
//!     Interval { start: 1, end: 5 },
//! ]);
//!
//! // positions 1, 3 and 4 are covered by both sets
//! assert_eq!(total_overlap(&a, &b), 3);
//! assert_eq!(a.overlap_length(&b), 3);
//! ```

pub mod sweep;
pub mod traits;

// re-exports
pub use self::sweep::total_overlap;
pub use self::traits::OverlapLength;
