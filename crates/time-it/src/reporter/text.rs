//! Fixed-layout text report
//!
//! ```text
//!
//! =========== Timed Run Report ===========
//! Total Runs: 10,000
//!
//! Average: 2.594390 μs
//! Median: 2.600020 μs
//!
//! Low: 1.899898 μs
//! High: 9.999843 μs
//! ========================================
//! ```

use std::fmt::{self, Write};

use super::number::{self, group_thousands, with_sign};
use crate::config::{FormatOptions, Notation};
use crate::stats::{Stat, Summary};
use crate::units::convert;

const BORDER: &str = "===========";

/// A summary paired with the options it is rendered with.
pub struct TextReport<'a> {
    pub summary: &'a Summary,
    pub options: &'a FormatOptions,
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_report(f, self.summary, self.options)
    }
}

/// Render `summary` as a text report.
pub fn render(summary: &Summary, options: &FormatOptions) -> String {
    TextReport { summary, options }.to_string()
}

/// Write the text report for `summary` into `output`.
pub fn write_report<W: Write>(
    output: &mut W,
    summary: &Summary,
    options: &FormatOptions,
) -> fmt::Result {
    let [average, median, low, high] = Stat::ALL.map(|stat| format_stat(summary, stat, options));

    let runs = summary.runs.to_string();
    let runs = if options.commas {
        group_thousands(&runs)
    } else {
        runs
    };

    let padding = "=".repeat(summary.name.chars().count() + 2);

    writeln!(output)?;
    writeln!(output, "{BORDER} {} {BORDER}", summary.name)?;
    writeln!(output, "Total Runs: {}", runs)?;
    writeln!(output)?;
    writeln!(output, "{}: {}", Stat::Average.label(), average)?;
    writeln!(output, "{}: {}", Stat::Median.label(), median)?;
    writeln!(output)?;
    writeln!(output, "{}: {}", Stat::Low.label(), low)?;
    writeln!(output, "{}: {}", Stat::High.label(), high)?;
    writeln!(output, "{BORDER}{padding}{BORDER}")?;
    Ok(())
}

/// Render a single statistic, including its unit or percent suffix.
fn format_stat(summary: &Summary, stat: Stat, options: &FormatOptions) -> String {
    if options.percent {
        if let Some(change) = summary.percent_change(stat) {
            return format!("{}%", with_sign(number::float(change, options.precision)));
        }
    }

    let seconds = summary.stats.get(stat);
    let unit = options.unit.resolve(seconds);
    let mut value = number::render(convert(seconds, unit), options.notation, options.precision);

    if summary.is_comparison() {
        value = with_sign(value);
    }
    if options.commas && options.notation == Notation::Float {
        value = group_thousands(&value);
    }

    format!("{} {}", value, unit)
}
