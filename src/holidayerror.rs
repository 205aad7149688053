use chrono::{NaiveDate, Weekday};
use thiserror::Error;

use crate::time::ordinal::Ordinal;

#[derive(Debug, Error)]
pub enum HolidayError {
    #[error("jurisdiction '{0}' has no registered rule set")]
    UnsupportedJurisdiction(String),

    #[error("subdivision '{code}' is not supported by jurisdiction '{jurisdiction}'")]
    InvalidSubdivision {
        jurisdiction: String,
        code: String,
    },

    #[error("{ordinal} {weekday} does not exist in {year}-{month:02}")]
    InvalidOrdinal {
        year: i32,
        month: u32,
        weekday: Weekday,
        ordinal: Ordinal,
    },

    #[error("rule '{name}' failed to evaluate: {source}")]
    Rule {
        name: String,
        #[source]
        source: Box<HolidayError>,
    },

    #[error("invalid holiday rule: {0}")]
    InvalidRule(String),

    #[error("no business day within {0} days of {1}")]
    NoBusinessDays(u32, NaiveDate),

    #[error("weekend configuration covers the whole week")]
    FullWeekend,

    #[error("month {0} is outside 1..=12")]
    InvalidMonth(u32),

    #[error("date arithmetic from {0} leaves the supported calendar range")]
    DateOutOfRange(NaiveDate),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

impl HolidayError {
    pub fn invalid_rule<S: Into<String>>(message: S) -> HolidayError {
        HolidayError::InvalidRule(message.into())
    }
}

pub type Result<T> = std::result::Result<T, HolidayError>;
