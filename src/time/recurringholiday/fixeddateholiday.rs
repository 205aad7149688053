use chrono::NaiveDate;
use serde::{
    Deserialize,
    Serialize
};

use crate::holidayerror::{HolidayError, Result};

/// A holiday on the same month and day every year.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct FixedDateHoliday {
    month: u32,
    day: u32
}

impl FixedDateHoliday {
    pub const fn new(month: u32, day: u32) -> FixedDateHoliday {
        FixedDateHoliday { month, day }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn validate(&self) -> Result<()> {
        // 2000 is a leap year, so Feb 29 passes
        if NaiveDate::from_ymd_opt(2000, self.month, self.day).is_none() {
            return Err(HolidayError::invalid_rule(format!(
                "month {} day {} is not a calendar date", self.month, self.day
            )));
        }
        Ok(())
    }

    /// `None` for Feb 29 outside leap years.
    pub fn date_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_in() {
        let holiday = FixedDateHoliday::new(7, 4);
        assert_eq!(holiday.date_in(2024), NaiveDate::from_ymd_opt(2024, 7, 4));
    }

    #[test]
    fn test_leap_day_only_in_leap_years() {
        let holiday = FixedDateHoliday::new(2, 29);
        assert!(holiday.validate().is_ok());
        assert!(holiday.date_in(2024).is_some());
        assert!(holiday.date_in(2023).is_none());
    }

    #[test]
    fn test_validate_rejects_impossible_dates() {
        assert!(FixedDateHoliday::new(4, 31).validate().is_err());
        assert!(FixedDateHoliday::new(13, 1).validate().is_err());
        assert!(FixedDateHoliday::new(0, 1).validate().is_err());
    }
}
