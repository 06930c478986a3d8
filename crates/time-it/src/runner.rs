//! Sampling of callbacks
//!
//! A [`Sampler`] times a callback against a [`Clock`]. Every run reads the
//! clock, invokes the callback on the caller's thread, and reads the clock
//! again; repeated runs are strictly sequential so that no two callbacks
//! share a measurement window.
//!
//! The free functions [`time_it`], [`time_it_named`], [`time_it_report`] and
//! [`time_it_report_with`] use a fresh [`SystemClock`].
//!
//! # Example
//!
//! ```
//! use time_it::runner::ReportOptions;
//!
//! # fn example() -> time_it::Result<()> {
//! let summary = time_it::time_it_report_with(
//!     ReportOptions::new().name("Vec push").runs(500),
//!     || {
//!         let mut v = Vec::new();
//!         v.push(1u8);
//!         std::hint::black_box(v);
//!     },
//! )?;
//! assert_eq!(summary.runs, 500);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use crate::clock::{Clock, SystemClock};
use crate::error::{Result, TimeItError};
use crate::stats::{Summary, DEFAULT_REPORT_NAME};

/// Number of runs used when a report does not specify one.
pub const DEFAULT_RUNS: usize = 10_000;

/// The time a single callback invocation took.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedRun {
    /// Optional title; single runs have no default name
    pub name: Option<String>,
    /// Elapsed seconds
    pub seconds: f64,
}

/// Settings for a repeated-run report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportOptions {
    /// Report title (default: "Timed Run Report")
    pub name: Option<String>,
    /// Number of runs (default: 10,000)
    pub runs: Option<usize>,
}

impl ReportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn runs(mut self, runs: usize) -> Self {
        self.runs = Some(runs);
        self
    }

    pub fn resolved_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_REPORT_NAME)
    }

    pub fn resolved_runs(&self) -> usize {
        self.runs.unwrap_or(DEFAULT_RUNS)
    }
}

/// Times callbacks against an injected clock.
#[derive(Debug, Clone, Default)]
pub struct Sampler<C> {
    clock: C,
}

impl<C: Clock> Sampler<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Run `callback` once and return the elapsed seconds.
    ///
    /// The result is the raw difference of two clock readings and is not
    /// clamped.
    pub fn run_once<F: FnOnce()>(&self, callback: F) -> f64 {
        let start = self.clock.now();
        callback();
        self.clock.now() - start
    }

    /// Run `callback` `runs` times in sequence, returning one sample per run
    /// in execution order.
    ///
    /// # Errors
    ///
    /// Returns [`TimeItError::InvalidRunCount`] if `runs` is zero; the
    /// callback is not invoked in that case.
    pub fn run_many<F: FnMut()>(&self, runs: usize, callback: F) -> Result<Vec<f64>> {
        if runs == 0 {
            return Err(TimeItError::InvalidRunCount(runs));
        }
        Ok(self.collect(runs, callback))
    }

    /// Time a single unnamed run.
    pub fn time_it<F: FnOnce()>(&self, callback: F) -> TimedRun {
        TimedRun {
            name: None,
            seconds: self.run_once(callback),
        }
    }

    /// Time a single named run.
    pub fn time_it_named<F: FnOnce()>(&self, name: impl Into<String>, callback: F) -> TimedRun {
        TimedRun {
            name: Some(name.into()),
            seconds: self.run_once(callback),
        }
    }

    /// Run `callback` [`DEFAULT_RUNS`] times and summarize under
    /// [`DEFAULT_REPORT_NAME`].
    pub fn report<F: FnMut()>(&self, callback: F) -> Summary {
        debug!("Sampling '{}' for {} runs", DEFAULT_REPORT_NAME, DEFAULT_RUNS);
        let samples = self.collect(DEFAULT_RUNS, callback);
        Summary::from_nonempty(DEFAULT_REPORT_NAME, &samples)
    }

    /// Run `callback` as configured by `options` and summarize.
    ///
    /// # Errors
    ///
    /// Returns [`TimeItError::InvalidRunCount`] before any sampling if the
    /// configured run count is zero.
    #[instrument(skip_all, fields(report = %options.resolved_name(), runs = options.resolved_runs()))]
    pub fn report_with<F: FnMut()>(&self, options: &ReportOptions, callback: F) -> Result<Summary> {
        let name = options.resolved_name();
        let samples = self.run_many(options.resolved_runs(), callback)?;
        debug!("Collected {} samples for '{}'", samples.len(), name);
        Ok(Summary::from_nonempty(name, &samples))
    }

    fn collect<F: FnMut()>(&self, runs: usize, mut callback: F) -> Vec<f64> {
        let mut samples = Vec::with_capacity(runs);
        for i in 0..runs {
            let elapsed = self.run_once(&mut callback);
            trace!(run = i, seconds = elapsed, "Collected sample");
            samples.push(elapsed);
        }
        samples
    }
}

/// Time a single unnamed run of `callback` with the system clock.
pub fn time_it<F: FnOnce()>(callback: F) -> TimedRun {
    Sampler::new(SystemClock::new()).time_it(callback)
}

/// Time a single named run of `callback` with the system clock.
pub fn time_it_named<F: FnOnce()>(name: impl Into<String>, callback: F) -> TimedRun {
    Sampler::new(SystemClock::new()).time_it_named(name, callback)
}

/// Run `callback` 10,000 times with the system clock and summarize.
pub fn time_it_report<F: FnMut()>(callback: F) -> Summary {
    Sampler::new(SystemClock::new()).report(callback)
}

/// Run `callback` as configured by `options` with the system clock and
/// summarize.
///
/// # Errors
///
/// Returns [`TimeItError::InvalidRunCount`] if `options` asks for zero runs.
pub fn time_it_report_with<F: FnMut()>(options: ReportOptions, callback: F) -> Result<Summary> {
    Sampler::new(SystemClock::new()).report_with(&options, callback)
}
