//! Summary statistics over a set of timing samples.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::FormatOptions;
use crate::error::{Result, TimeItError};
use crate::reporter::text;

/// Name given to reports when the caller does not provide one.
pub const DEFAULT_REPORT_NAME: &str = "Timed Run Report";

/// One of the four statistics carried by a [`Summary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stat {
    Average,
    Median,
    Low,
    High,
}

impl Stat {
    /// All statistics, in report order.
    pub const ALL: [Stat; 4] = [Stat::Average, Stat::Median, Stat::Low, Stat::High];

    /// Label used in the text report.
    pub fn label(&self) -> &'static str {
        match self {
            Stat::Average => "Average",
            Stat::Median => "Median",
            Stat::Low => "Low",
            Stat::High => "High",
        }
    }
}

/// The statistic values of a summary, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub average: f64,
    pub median: f64,
    pub low: f64,
    pub high: f64,
}

impl Stats {
    pub fn get(&self, stat: Stat) -> f64 {
        match stat {
            Stat::Average => self.average,
            Stat::Median => self.median,
            Stat::Low => self.low,
            Stat::High => self.high,
        }
    }

    /// Element-wise `other - self`.
    pub fn delta_to(&self, other: &Stats) -> Stats {
        Stats {
            average: other.average - self.average,
            median: other.median - self.median,
            low: other.low - self.low,
            high: other.high - self.high,
        }
    }
}

/// What a summary was derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SummaryKind {
    /// Reduced directly from samples.
    Base,
    /// Difference between two summaries; the stats are `to - from`.
    Comparison { from: Box<Summary>, to: Box<Summary> },
}

/// Aggregated statistics for a timed callback.
///
/// All statistics are stored in seconds. A summary is immutable once built;
/// comparisons produce new summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Title printed in the report header
    pub name: String,
    /// Number of samples the summary was built from
    pub runs: usize,
    /// Statistic values, in seconds
    pub stats: Stats,
    /// Base summary or comparison
    pub kind: SummaryKind,
}

impl Summary {
    /// Reduce samples to a summary.
    ///
    /// The median is the element at index `len / 2` of the sorted samples,
    /// so even-length sets report the upper of the two middle values rather
    /// than their mean.
    ///
    /// # Errors
    ///
    /// Returns [`TimeItError::EmptySamples`] if `samples` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use time_it::stats::Summary;
    ///
    /// let summary = Summary::from_samples("Sorting", &[3.0, 1.0, 4.0, 2.0]).unwrap();
    /// assert_eq!(summary.runs, 4);
    /// assert_eq!(summary.stats.low, 1.0);
    /// assert_eq!(summary.stats.median, 3.0);
    /// assert_eq!(summary.stats.high, 4.0);
    /// assert_eq!(summary.stats.average, 2.5);
    /// ```
    pub fn from_samples(name: impl Into<String>, samples: &[f64]) -> Result<Self> {
        if samples.is_empty() {
            return Err(TimeItError::EmptySamples);
        }
        Ok(Self::from_nonempty(name, samples))
    }

    /// Reduce samples the caller guarantees to be non-empty.
    pub(crate) fn from_nonempty(name: impl Into<String>, samples: &[f64]) -> Self {
        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let low = sorted[0];
        let high = sorted[count - 1];
        let sum: f64 = sorted.iter().sum();
        // rounding in the sum can push the mean an ulp past either bound
        let average = (sum / count as f64).max(low).min(high);

        Summary {
            name: name.into(),
            runs: count,
            stats: Stats {
                average,
                median: sorted[count / 2],
                low,
                high,
            },
            kind: SummaryKind::Base,
        }
    }

    pub fn is_comparison(&self) -> bool {
        matches!(self.kind, SummaryKind::Comparison { .. })
    }

    /// Render the text report.
    pub fn format(&self, options: &FormatOptions) -> String {
        text::render(self, options)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        text::write_report(f, self, &FormatOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_empty_samples() {
        assert_eq!(
            Summary::from_samples("Empty", &[]),
            Err(TimeItError::EmptySamples)
        );
    }

    #[test]
    fn test_summary_single_sample() {
        let summary = Summary::from_samples("One", &[42.0]).unwrap();

        assert_eq!(summary.name, "One");
        assert_eq!(summary.runs, 1);
        assert_eq!(summary.stats.average, 42.0);
        assert_eq!(summary.stats.median, 42.0);
        assert_eq!(summary.stats.low, 42.0);
        assert_eq!(summary.stats.high, 42.0);
        assert_eq!(summary.kind, SummaryKind::Base);
    }

    #[test]
    fn test_summary_basic() {
        let samples: Vec<f64> = (1..=10).map(f64::from).collect();
        let summary = Summary::from_samples("Basic", &samples).unwrap();

        assert_eq!(summary.runs, 10);
        assert_eq!(summary.stats.low, 1.0);
        assert_eq!(summary.stats.high, 10.0);
        assert_eq!(summary.stats.average, 5.5);
        // upper middle element, not 5.5
        assert_eq!(summary.stats.median, 6.0);
    }

    #[test]
    fn test_summary_odd_median() {
        let summary = Summary::from_samples("Odd", &[9.0, 1.0, 5.0]).unwrap();
        assert_eq!(summary.stats.median, 5.0);
    }

    #[test]
    fn test_summary_unsorted_matches_sorted() {
        let sorted = Summary::from_samples("S", &[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        let shuffled = Summary::from_samples("S", &[4.0, 1.0, 5.0, 3.0, 2.0]).unwrap();
        assert_eq!(sorted, shuffled);
    }

    #[test]
    fn test_summary_extreme_values() {
        let summary = Summary::from_samples("Spiky", &[1.0, 1000.0, 2.0, 3.0, 4.0]).unwrap();

        assert_eq!(summary.stats.low, 1.0);
        assert_eq!(summary.stats.high, 1000.0);
        assert_eq!(summary.stats.median, 3.0);
        assert!(summary.stats.average > 100.0);
    }

    #[test]
    fn test_summary_average_stays_within_bounds() {
        let summary = Summary::from_samples("Tenths", &[0.1, 0.1, 0.1]).unwrap();

        assert_eq!(summary.stats.low, 0.1);
        assert_eq!(summary.stats.high, 0.1);
        assert_eq!(summary.stats.average, 0.1);
    }

    #[test]
    fn test_stats_get() {
        let stats = Stats {
            average: 1.0,
            median: 2.0,
            low: 3.0,
            high: 4.0,
        };
        let values: Vec<f64> = Stat::ALL.iter().map(|s| stats.get(*s)).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_stat_labels() {
        let labels: Vec<&str> = Stat::ALL.iter().map(Stat::label).collect();
        assert_eq!(labels, vec!["Average", "Median", "Low", "High"]);
    }

    #[test]
    fn test_summary_json_roundtrip() {
        let summary = Summary::from_samples("Json", &[1.0, 2.0]).unwrap();
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"type\":\"base\""));

        let parsed: Summary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, summary);
    }
}
