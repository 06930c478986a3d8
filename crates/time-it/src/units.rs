//! Display units for elapsed time
//!
//! Raw measurements are always seconds. Before rendering, each value is
//! converted into a [`TimeUnit`], either fixed by configuration or picked
//! per value by [`pick_unit`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TimeItError;

/// A unit of time that values can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    #[serde(rename = "ns")]
    Nanoseconds,
    #[serde(rename = "μs", alias = "us")]
    Microseconds,
    #[serde(rename = "ms")]
    Milliseconds,
    #[serde(rename = "s")]
    Seconds,
    #[serde(rename = "m")]
    Minutes,
}

impl TimeUnit {
    /// Symbol printed after a value.
    pub fn symbol(&self) -> &'static str {
        match self {
            TimeUnit::Nanoseconds => "ns",
            TimeUnit::Microseconds => "μs",
            TimeUnit::Milliseconds => "ms",
            TimeUnit::Seconds => "s",
            TimeUnit::Minutes => "m",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for TimeUnit {
    type Err = TimeItError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ns" | "nanoseconds" => Ok(TimeUnit::Nanoseconds),
            "μs" | "us" | "microseconds" => Ok(TimeUnit::Microseconds),
            "ms" | "milliseconds" => Ok(TimeUnit::Milliseconds),
            "s" | "seconds" => Ok(TimeUnit::Seconds),
            "m" | "minutes" => Ok(TimeUnit::Minutes),
            _ => Err(TimeItError::UnknownUnit(s.to_string())),
        }
    }
}

/// Unit selection for a report: a fixed unit or the best fit per value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum UnitChoice {
    #[default]
    Auto,
    Fixed(TimeUnit),
}

impl UnitChoice {
    /// The unit a particular value will be rendered in.
    pub fn resolve(&self, seconds: f64) -> TimeUnit {
        match self {
            UnitChoice::Auto => pick_unit(seconds),
            UnitChoice::Fixed(unit) => *unit,
        }
    }
}

impl From<TimeUnit> for UnitChoice {
    fn from(unit: TimeUnit) -> Self {
        UnitChoice::Fixed(unit)
    }
}

impl FromStr for UnitChoice {
    type Err = TimeItError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("auto") {
            Ok(UnitChoice::Auto)
        } else {
            s.parse().map(UnitChoice::Fixed)
        }
    }
}

impl TryFrom<String> for UnitChoice {
    type Error = TimeItError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<UnitChoice> for String {
    fn from(choice: UnitChoice) -> Self {
        match choice {
            UnitChoice::Auto => "auto".to_string(),
            UnitChoice::Fixed(unit) => unit.symbol().to_string(),
        }
    }
}

/// Pick the unit that reads best for a value in seconds.
///
/// ```
/// use time_it::units::{pick_unit, TimeUnit};
///
/// assert_eq!(pick_unit(5e-7), TimeUnit::Nanoseconds);
/// assert_eq!(pick_unit(0.5), TimeUnit::Milliseconds);
/// assert_eq!(pick_unit(90.0), TimeUnit::Minutes);
/// ```
pub fn pick_unit(seconds: f64) -> TimeUnit {
    let magnitude = seconds.abs();
    if magnitude <= 1e-6 {
        TimeUnit::Nanoseconds
    } else if magnitude <= 1e-4 {
        TimeUnit::Microseconds
    } else if magnitude < 10.0 {
        TimeUnit::Milliseconds
    } else if magnitude < 60.0 {
        TimeUnit::Seconds
    } else {
        TimeUnit::Minutes
    }
}

/// Convert seconds into `unit`.
pub fn convert(seconds: f64, unit: TimeUnit) -> f64 {
    match unit {
        TimeUnit::Nanoseconds => seconds * 1e9,
        TimeUnit::Microseconds => seconds * 1e6,
        TimeUnit::Milliseconds => seconds * 1e3,
        TimeUnit::Seconds => seconds,
        TimeUnit::Minutes => seconds / 60.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_unit_boundaries() {
        assert_eq!(pick_unit(0.0), TimeUnit::Nanoseconds);
        assert_eq!(pick_unit(1e-6), TimeUnit::Nanoseconds);
        assert_eq!(pick_unit(2e-6), TimeUnit::Microseconds);
        assert_eq!(pick_unit(1e-4), TimeUnit::Microseconds);
        assert_eq!(pick_unit(2e-4), TimeUnit::Milliseconds);
        assert_eq!(pick_unit(9.999), TimeUnit::Milliseconds);
        assert_eq!(pick_unit(10.0), TimeUnit::Seconds);
        assert_eq!(pick_unit(59.9), TimeUnit::Seconds);
        assert_eq!(pick_unit(60.0), TimeUnit::Minutes);
    }

    #[test]
    fn test_pick_unit_uses_magnitude() {
        assert_eq!(pick_unit(-5e-7), TimeUnit::Nanoseconds);
        assert_eq!(pick_unit(-15.0), TimeUnit::Seconds);
    }

    #[test]
    fn test_convert() {
        assert_eq!(convert(2.0, TimeUnit::Nanoseconds), 2e9);
        assert_eq!(convert(2.0, TimeUnit::Microseconds), 2e6);
        assert_eq!(convert(2.0, TimeUnit::Milliseconds), 2000.0);
        assert_eq!(convert(2.0, TimeUnit::Seconds), 2.0);
        assert_eq!(convert(120.0, TimeUnit::Minutes), 2.0);
    }

    #[test]
    fn test_parse_units() {
        assert_eq!("ns".parse::<TimeUnit>(), Ok(TimeUnit::Nanoseconds));
        assert_eq!("us".parse::<TimeUnit>(), Ok(TimeUnit::Microseconds));
        assert_eq!("μs".parse::<TimeUnit>(), Ok(TimeUnit::Microseconds));
        assert_eq!("MS".parse::<TimeUnit>(), Ok(TimeUnit::Milliseconds));
        assert_eq!("minutes".parse::<TimeUnit>(), Ok(TimeUnit::Minutes));
        assert_eq!(
            "hours".parse::<TimeUnit>(),
            Err(TimeItError::UnknownUnit("hours".to_string()))
        );
    }

    #[test]
    fn test_parse_unit_choice() {
        assert_eq!("auto".parse::<UnitChoice>(), Ok(UnitChoice::Auto));
        assert_eq!("Auto".parse::<UnitChoice>(), Ok(UnitChoice::Auto));
        assert_eq!(
            "s".parse::<UnitChoice>(),
            Ok(UnitChoice::Fixed(TimeUnit::Seconds))
        );
        assert!("fortnights".parse::<UnitChoice>().is_err());
    }

    #[test]
    fn test_unit_choice_resolve() {
        assert_eq!(UnitChoice::Auto.resolve(15.0), TimeUnit::Seconds);
        assert_eq!(
            UnitChoice::Fixed(TimeUnit::Nanoseconds).resolve(15.0),
            TimeUnit::Nanoseconds
        );
    }

    #[test]
    fn test_unit_choice_string_roundtrip() {
        let s: String = UnitChoice::Fixed(TimeUnit::Microseconds).into();
        assert_eq!(s, "μs");
        assert_eq!(
            UnitChoice::try_from(s),
            Ok(UnitChoice::Fixed(TimeUnit::Microseconds))
        );
    }
}
