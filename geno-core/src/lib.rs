//! Core models for geno.
//!
//! Two kinds of flat text inputs are modelled here:
//!
//! - segment files (`.s`): one half-open interval `start end` per line, read into an [`IntervalSet`]
//! - function files (`.f`): one real value per line, read into a [`Series`] whose index is the position
//!
//! Both readers accept gzip-compressed files (`.gz`).
//!
//! # Example
//!
//! ```no_run
//! use geno_core::models::{IntervalSet, Series, SortedIntervalSet};
//!
//! let segs = IntervalSet::try_from("peaks.s").unwrap();
//! let signal = Series::try_from("signal.f").unwrap();
//!
//! // opt in to ordering checks before handing the set to an engine
//! let segs = SortedIntervalSet::try_from(segs).unwrap();
//! ```
pub mod errors;
pub mod models;
pub mod utils;

pub use errors::{OrderError, ParseError};
