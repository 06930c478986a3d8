//! Configuration for report rendering and sampling
//!
//! [`FormatOptions`] controls how a [`Summary`](crate::stats::Summary) is
//! rendered. Every field has a default, so a partial configuration (a TOML
//! table with only some keys, or a builder chain touching only some fields)
//! is always merged over the defaults.
//!
//! A [`Config`] file bundles sampling and rendering settings:
//!
//! ```toml
//! output = "text"
//!
//! [report]
//! name = "Vec push"
//! runs = 5000
//!
//! [format]
//! unit = "μs"
//! notation = "float"
//! precision = 3
//! commas = true
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

use crate::error::TimeItError;
use crate::reporter::OutputFormat;
use crate::runner::ReportOptions;
use crate::units::UnitChoice;

/// Numeric rendering style for statistic values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Notation {
    /// Fixed-point, e.g. `2.594390 μs`
    #[default]
    Float,
    /// Exponential, e.g. `1.63e+01 ms`
    Scientific,
    /// Whichever of float or scientific is shorter for each value
    Shortest,
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Notation::Float => "float",
            Notation::Scientific => "scientific",
            Notation::Shortest => "shortest",
        };
        f.write_str(name)
    }
}

impl FromStr for Notation {
    type Err = TimeItError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "float" | "f" => Ok(Notation::Float),
            "scientific" | "e" => Ok(Notation::Scientific),
            "shortest" | "g" => Ok(Notation::Shortest),
            _ => Err(TimeItError::UnknownNotation(s.to_string())),
        }
    }
}

impl TryFrom<String> for Notation {
    type Error = TimeItError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Notation> for String {
    fn from(notation: Notation) -> Self {
        notation.to_string()
    }
}

/// Options for rendering a summary as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatOptions {
    /// Display unit, or `auto` to pick one per value (default: auto)
    pub unit: UnitChoice,
    /// Numeric notation (default: float)
    pub notation: Notation,
    /// Insert thousands separators in float output (default: true)
    pub commas: bool,
    /// Render comparisons as percent change (default: false)
    pub percent: bool,
    /// Digits after the decimal point; full precision when unset
    pub precision: Option<usize>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            unit: UnitChoice::Auto,
            notation: Notation::Float,
            commas: true,
            percent: false,
            precision: None,
        }
    }
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unit(mut self, unit: impl Into<UnitChoice>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn with_notation(mut self, notation: Notation) -> Self {
        self.notation = notation;
        self
    }

    pub fn with_commas(mut self, commas: bool) -> Self {
        self.commas = commas;
        self
    }

    pub fn with_percent(mut self, percent: bool) -> Self {
        self.percent = percent;
        self
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Report output format
    pub output: OutputFormat,
    /// Sampling settings
    pub report: ReportOptions,
    /// Rendering settings
    pub format: FormatOptions,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse. Unknown
    /// units or notations are reported here, before anything is measured.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        debug!("Loaded config file: {}", path.display());
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    ///
    /// # Example
    ///
    /// ```
    /// use time_it::config::{Config, Notation};
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = Config::from_str(r#"
    ///     [format]
    ///     notation = "scientific"
    ///     precision = 2
    /// "#)?;
    /// assert_eq!(config.format.notation, Notation::Scientific);
    /// assert!(config.format.commas);
    /// # Ok(())
    /// # }
    /// # example().unwrap();
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("Failed to parse TOML configuration")
    }
}
