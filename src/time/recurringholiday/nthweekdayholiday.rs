use chrono::{
    NaiveDate,
    Weekday
};
use serde::{
    Deserialize,
    Serialize
};

use crate::holidayerror::{HolidayError, Result};
use crate::time::calendarmath::nth_weekday_of_month;
use crate::time::ordinal::Ordinal;

/// A holiday on the n-th (or last) given weekday of a month, e.g. the 4th
/// Thursday of November.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct NthWeekdayHoliday {
    month: u32,
    weekday: Weekday,
    ordinal: Ordinal
}

impl NthWeekdayHoliday {
    pub const fn new(month: u32, weekday: Weekday, ordinal: Ordinal) -> NthWeekdayHoliday {
        NthWeekdayHoliday { month, weekday, ordinal }
    }

    pub const fn last(month: u32, weekday: Weekday) -> NthWeekdayHoliday {
        NthWeekdayHoliday::new(month, weekday, Ordinal::Last)
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    pub fn ordinal(&self) -> Ordinal {
        self.ordinal
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=12).contains(&self.month) {
            return Err(HolidayError::invalid_rule(format!("month {} is outside 1..=12", self.month)));
        }
        if let Ordinal::Nth(n) = self.ordinal {
            if !(1..=5).contains(&n) {
                return Err(HolidayError::invalid_rule(format!("ordinal {} is outside 1..=5", n)));
            }
        }
        Ok(())
    }

    pub fn date_in(&self, year: i32) -> Result<NaiveDate> {
        nth_weekday_of_month(year, self.month, self.weekday, self.ordinal)
    }
}
