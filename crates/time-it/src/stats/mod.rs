//! Statistical reduction of timing samples
//!
//! This module turns raw elapsed-time samples into a [`Summary`] and derives
//! comparisons between two summaries.
//!
//! # Examples
//!
//! ```
//! use time_it::stats::Summary;
//!
//! let before = Summary::from_samples("Before", &[4.0, 5.0, 6.0]).unwrap();
//! let after = Summary::from_samples("After", &[1.0, 2.0, 3.0]).unwrap();
//!
//! let diff = before.compare_to(&after);
//! assert_eq!(diff.name, "Before => After");
//! assert_eq!(diff.stats.average, -3.0);
//! ```

pub mod compare;
pub mod summary;

pub use summary::{Stat, Stats, Summary, SummaryKind, DEFAULT_REPORT_NAME};
