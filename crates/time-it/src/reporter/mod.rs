//! Summary reporting
//!
//! This module renders summaries either as the fixed-layout text block or as
//! JSON, and writes them to stdout or a file.
//!
//! # Example
//!
//! ```no_run
//! use time_it::config::FormatOptions;
//! use time_it::reporter::{OutputFormat, Reporter};
//!
//! # fn example() -> anyhow::Result<()> {
//! let summary = time_it::time_it_report(|| {
//!     std::hint::black_box((0..100).sum::<u64>());
//! });
//!
//! Reporter::new(OutputFormat::Text)
//!     .with_options(FormatOptions::new().with_precision(2))
//!     .report(&summary)?;
//!
//! Reporter::new(OutputFormat::JsonPretty).write_to_file(&summary, "summary.json")?;
//! # Ok(())
//! # }
//! ```

mod json;
pub mod number;
pub mod text;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::config::FormatOptions;
use crate::stats::Summary;

pub use json::JsonReporter;

/// Output format for summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Fixed-layout text block
    #[default]
    Text,
    /// Compact JSON
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

/// Reporter for summaries
#[derive(Debug, Clone, Default)]
pub struct Reporter {
    format: OutputFormat,
    options: FormatOptions,
}

impl Reporter {
    /// Create a new reporter with the specified output format
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            options: FormatOptions::default(),
        }
    }

    /// Text rendering options; ignored by the JSON formats
    pub fn with_options(mut self, options: FormatOptions) -> Self {
        self.options = options;
        self
    }

    /// Report a summary to stdout
    pub fn report(&self, summary: &Summary) -> Result<()> {
        let output = self.format_summary(summary)?;
        let mut stdout = io::stdout().lock();
        write!(stdout, "{}", output)?;
        stdout.flush()?;
        Ok(())
    }

    /// Write a summary to a file
    pub fn write_to_file<P: AsRef<Path>>(&self, summary: &Summary, path: P) -> Result<()> {
        let path = path.as_ref();
        let output = self.format_summary(summary)?;
        fs::write(path, output)
            .with_context(|| format!("Failed to write report: {}", path.display()))?;
        Ok(())
    }

    /// Format a summary as a string
    pub fn format_summary(&self, summary: &Summary) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(text::render(summary, &self.options)),
            OutputFormat::Json => JsonReporter::format(summary, false),
            OutputFormat::JsonPretty => JsonReporter::format(summary, true),
        }
    }
}
