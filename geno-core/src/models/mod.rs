pub mod interval;
pub mod interval_set;
pub mod series;

// re-export for cleaner imports
pub use self::interval::Interval;
pub use self::interval_set::{IntervalSet, SortedIntervalSet};
pub use self::series::Series;
