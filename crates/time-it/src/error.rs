use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeItError {
    #[error("Invalid run count: {0} (at least one run is required)")]
    InvalidRunCount(usize),

    #[error("Cannot summarize an empty sample set")]
    EmptySamples,

    #[error("Unknown time unit: {0}")]
    UnknownUnit(String),

    #[error("Unknown notation: {0}")]
    UnknownNotation(String),
}

pub type Result<T> = std::result::Result<T, TimeItError>;
