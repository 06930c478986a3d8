//! Time sources for the sampler
//!
//! Every reading is a number of seconds with sub-microsecond resolution.
//! Only differences between two readings are meaningful.
//!
//! [`SystemClock`] is backed by a monotonic [`Instant`]. [`FakeClock`] is
//! fully controlled by the caller and exists so that reports can be tested
//! deterministically:
//!
//! ```
//! use time_it::clock::FakeClock;
//! use time_it::runner::Sampler;
//!
//! let clock = FakeClock::new();
//! let sampler = Sampler::new(&clock);
//!
//! let run = sampler.time_it(|| clock.advance_by(100.0));
//! assert_eq!(run.seconds, 100.0);
//! ```

use std::cell::Cell;
use std::time::Instant;

/// A source of elapsed-time readings, in seconds.
pub trait Clock {
    /// Read the current time in seconds.
    fn now(&self) -> f64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> f64 {
        (**self).now()
    }
}

/// Wall clock backed by [`Instant`].
///
/// Readings are seconds elapsed since the clock was created.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Manually driven clock for tests.
///
/// The clock only moves when told to: either explicitly through
/// [`set_time`](Self::set_time) / [`advance_by`](Self::advance_by), or
/// implicitly on every read once [`advance_for_each_call`](Self::advance_for_each_call)
/// has been configured.
#[derive(Debug, Default)]
pub struct FakeClock {
    current: Cell<f64>,
    per_read: Cell<f64>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jump to an absolute time.
    pub fn set_time(&self, seconds: f64) {
        self.current.set(seconds);
    }

    /// Move the clock forward by `seconds`.
    pub fn advance_by(&self, seconds: f64) {
        self.current.set(self.current.get() + seconds);
    }

    /// Advance by `seconds` every time the clock is read.
    ///
    /// The increment is applied before the reading is returned.
    pub fn advance_for_each_call(&self, seconds: f64) {
        self.per_read.set(seconds);
    }

    /// Current time without triggering the per-read advance.
    pub fn time(&self) -> f64 {
        self.current.get()
    }

    /// Back to time zero with no per-read advance.
    pub fn reset(&self) {
        self.current.set(0.0);
        self.per_read.set(0.0);
    }
}

impl Clock for FakeClock {
    fn now(&self) -> f64 {
        self.advance_by(self.per_read.get());
        self.current.get()
    }
}
