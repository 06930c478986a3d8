//! Differences between two summaries.

use super::summary::{Stat, Summary, SummaryKind};
use crate::units::{convert, TimeUnit};

impl Summary {
    /// Compare this summary (the baseline) against `other`.
    ///
    /// The result's statistics are `other - self`. Its name is the shared
    /// name when both summaries have the same one, otherwise
    /// `"{self.name} => {other.name}"`.
    pub fn compare_to(&self, other: &Summary) -> Summary {
        let name = if self.name == other.name {
            self.name.clone()
        } else {
            format!("{} => {}", self.name, other.name)
        };
        self.compare_to_named(name, other)
    }

    /// Compare against `other`, using `name` for the result verbatim.
    pub fn compare_to_named(&self, name: impl Into<String>, other: &Summary) -> Summary {
        Summary {
            name: name.into(),
            runs: self.runs,
            stats: self.stats.delta_to(&other.stats),
            kind: SummaryKind::Comparison {
                from: Box::new(self.clone()),
                to: Box::new(other.clone()),
            },
        }
    }

    /// Relative change of `stat` between the compared summaries, in percent.
    ///
    /// Returns `None` for base summaries. Both sides are converted to
    /// nanoseconds before the ratio is taken; a zero baseline yields an
    /// infinite or NaN result.
    pub fn percent_change(&self, stat: Stat) -> Option<f64> {
        match &self.kind {
            SummaryKind::Base => None,
            SummaryKind::Comparison { from, to } => {
                let from = convert(from.stats.get(stat), TimeUnit::Nanoseconds);
                let to = convert(to.stats.get(stat), TimeUnit::Nanoseconds);
                Some((to / from - 1.0) * 100.0)
            }
        }
    }
}
