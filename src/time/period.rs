use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use chrono::{
    Months,
    NaiveDate
};
use serde::{
    Deserialize,
    Serialize
};
use thiserror::Error;

use crate::time::calendarmath::add_days;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TimeUnit {
    Days,
    Weeks,
    Months,
    Years
}

impl TimeUnit {
    pub fn to_char(&self) -> char {
        match self {
            TimeUnit::Days => 'D',
            TimeUnit::Weeks => 'W',
            TimeUnit::Months => 'M',
            TimeUnit::Years => 'Y'
        }
    }
}

#[derive(Debug, Error)]
pub enum ParsePeriodError {
    #[error("empty period string")]
    Empty,
    #[error("unknown time unit '{0}' found")]
    UnknownTimeUnit(char),
    #[error("{0}")]
    Parse(#[from] ParseIntError)
}

/// A calendar interval such as `1D`, `2W`, `3M` or `1Y`.
///
/// Serialized in its string form.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Period {
    number: i32,
    unit: TimeUnit
}

impl Period {
    pub fn new(number: i32, unit: TimeUnit) -> Period {
        Period { number, unit }
    }

    pub fn days(number: i32) -> Period {
        Period::new(number, TimeUnit::Days)
    }

    pub fn weeks(number: i32) -> Period {
        Period::new(number, TimeUnit::Weeks)
    }

    pub fn months(number: i32) -> Period {
        Period::new(number, TimeUnit::Months)
    }

    pub fn years(number: i32) -> Period {
        Period::new(number, TimeUnit::Years)
    }

    pub fn parse(period_str: &str) -> Result<Period, ParsePeriodError> {
        let unit_chr = period_str.chars().last().ok_or(ParsePeriodError::Empty)?;
        let number = period_str[..period_str.len() - unit_chr.len_utf8()].parse::<i32>()?;
        match unit_chr.to_ascii_uppercase() {
            'D' => Ok(Period::days(number)),
            'W' => Ok(Period::weeks(number)),
            'M' => Ok(Period::months(number)),
            'Y' => Ok(Period::years(number)),
            _ => Err(ParsePeriodError::UnknownTimeUnit(unit_chr))
        }
    }

    pub fn number(&self) -> i32 {
        self.number
    }

    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// The same unit repeated `k` times, e.g. `3M * 2 = 6M`.
    pub fn times(&self, k: i32) -> Option<Period> {
        self.number.checked_mul(k).map(|number| Period::new(number, self.unit))
    }

    /// Shifts `horizon` by this period. Month and year shifts clamp the day to
    /// the end of the target month (Jan 31 + 1M = Feb 28/29).
    pub fn add_to(&self, horizon: NaiveDate) -> Option<NaiveDate> {
        match self.unit {
            TimeUnit::Days => add_days(horizon, self.number as i64).ok(),
            TimeUnit::Weeks => add_days(horizon, 7 * self.number as i64).ok(),
            TimeUnit::Months => shift_months(horizon, self.number),
            TimeUnit::Years => shift_months(horizon, self.number.checked_mul(12)?)
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.number, self.unit.to_char())
    }
}

impl FromStr for Period {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::parse(s)
    }
}

impl TryFrom<String> for Period {
    type Error = ParsePeriodError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Period::parse(&value)
    }
}

impl From<Period> for String {
    fn from(period: Period) -> String {
        period.to_string()
    }
}

fn shift_months(horizon: NaiveDate, number: i32) -> Option<NaiveDate> {
    let months = Months::new(number.unsigned_abs());
    if number >= 0 {
        horizon.checked_add_months(months)
    } else {
        horizon.checked_sub_months(months)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse() {
        assert_eq!(Period::parse("3M").unwrap(), Period::months(3));
        assert_eq!(Period::parse("10Y").unwrap(), Period::years(10));
        assert_eq!(Period::parse("-2w").unwrap(), Period::weeks(-2));
        assert!(matches!(Period::parse(""), Err(ParsePeriodError::Empty)));
        assert!(matches!(Period::parse("3X"), Err(ParsePeriodError::UnknownTimeUnit('X'))));
        assert!(matches!(Period::parse("M"), Err(ParsePeriodError::Parse(_))));
    }

    #[test]
    fn test_add_to_clamps_month_end() {
        assert_eq!(Period::months(1).add_to(ymd(2024, 1, 31)), Some(ymd(2024, 2, 29)));
        assert_eq!(Period::months(1).add_to(ymd(2023, 1, 31)), Some(ymd(2023, 2, 28)));
        assert_eq!(Period::months(-2).add_to(ymd(2024, 1, 15)), Some(ymd(2023, 11, 15)));
        assert_eq!(Period::years(1).add_to(ymd(2024, 2, 29)), Some(ymd(2025, 2, 28)));
        assert_eq!(Period::weeks(2).add_to(ymd(2024, 12, 25)), Some(ymd(2025, 1, 8)));
        assert_eq!(Period::months(-1).add_to(ymd(2024, 3, 31)), Some(ymd(2024, 2, 29)));
        assert_eq!(Period::years(i32::MAX).add_to(ymd(2024, 1, 1)), None);
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Period::weeks(2)).unwrap();
        assert_eq!(json, "\"2W\"");
        let parsed: Period = serde_json::from_str("\"6M\"").unwrap();
        assert_eq!(parsed, Period::months(6));
    }
}
