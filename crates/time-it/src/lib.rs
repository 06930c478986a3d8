//! Micro-benchmarking for closures
//!
//! This crate times how long a callback takes, either once or over many
//! sequential runs, reduces the samples to a summary (average, median, low,
//! high) and renders it as a text report with configurable units and
//! notation. Two summaries can be compared to see how much faster or slower
//! one is than the other.
//!
//! # Features
//!
//! - **Single runs**: [`time_it`] returns the elapsed seconds of one call
//! - **Reports**: [`time_it_report`] runs a callback 10,000 times and
//!   summarizes the samples
//! - **Comparisons**: [`Summary::compare_to`] diffs two summaries, rendered as
//!   signed deltas or percent change
//! - **Formatting**: automatic or fixed units (`ns` to `m`), float, scientific
//!   or shortest notation, precision and thousands separators
//! - **Deterministic testing**: [`clock::FakeClock`] can be injected into a
//!   [`runner::Sampler`] in place of the system clock
//!
//! # Example
//!
//! ```no_run
//! use time_it::{FormatOptions, Notation, ReportOptions};
//!
//! # fn example() -> time_it::Result<()> {
//! let data: Vec<u32> = (0..1_000).rev().collect();
//!
//! let unstable = time_it::time_it_report_with(ReportOptions::new().name("sort_unstable"), || {
//!     let mut v = data.clone();
//!     v.sort_unstable();
//! })?;
//! let stable = time_it::time_it_report_with(ReportOptions::new().name("sort"), || {
//!     let mut v = data.clone();
//!     v.sort();
//! })?;
//!
//! println!("{}", unstable.format(&FormatOptions::new().with_precision(2)));
//! println!("{}", unstable.compare_to(&stable).format(
//!     &FormatOptions::new().with_notation(Notation::Shortest).with_percent(true),
//! ));
//! # Ok(())
//! # }
//! ```
//!
//! # Output
//!
//! ```text
//!
//! =========== sort_unstable ===========
//! Total Runs: 10,000
//!
//! Average: 4.21 μs
//! Median: 4.18 μs
//!
//! Low: 3.95 μs
//! High: 31.40 μs
//! =====================================
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod reporter;
pub mod runner;
pub mod stats;
pub mod units;

// Re-export main types for convenience
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{Config, FormatOptions, Notation};
pub use error::{Result, TimeItError};
pub use reporter::{OutputFormat, Reporter};
pub use runner::{
    time_it, time_it_named, time_it_report, time_it_report_with, ReportOptions, Sampler, TimedRun,
};
pub use stats::{Stat, Stats, Summary, SummaryKind};
pub use units::{TimeUnit, UnitChoice};
