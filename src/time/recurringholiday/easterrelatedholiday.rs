use chrono::{
    Datelike,
    NaiveDate
};
use serde::{
    Deserialize,
    Serialize
};

use crate::time::calendarmath::{add_days, easter_sunday, orthodox_easter_sunday};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
pub enum EasterType {
    #[default]
    Western,
    Orthodox
}

/// A moveable feast at a fixed day offset from Easter Sunday.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct EasterRelatedHoliday {
    #[serde(default)]
    easter_type: EasterType,
    shift_days: i32
}

impl EasterRelatedHoliday {
    pub const fn new(easter_type: EasterType, shift_days: i32) -> EasterRelatedHoliday {
        EasterRelatedHoliday { easter_type, shift_days }
    }

    pub const fn western(shift_days: i32) -> EasterRelatedHoliday {
        EasterRelatedHoliday::new(EasterType::Western, shift_days)
    }

    pub fn easter_type(&self) -> EasterType {
        self.easter_type
    }

    pub fn shift_days(&self) -> i32 {
        self.shift_days
    }

    pub fn easter_day(&self, year: i32) -> Option<NaiveDate> {
        match self.easter_type {
            EasterType::Western => easter_sunday(year),
            EasterType::Orthodox => orthodox_easter_sunday(year)
        }
    }

    /// `None` when Easter is undefined for `year` or the shifted date leaves
    /// that year.
    pub fn date_in(&self, year: i32) -> Option<NaiveDate> {
        self.easter_day(year)
            .and_then(|easter| add_days(easter, self.shift_days as i64).ok())
            .filter(|d| d.year() == year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_good_friday_and_easter_monday() {
        assert_eq!(EasterRelatedHoliday::western(-2).date_in(2024), Some(ymd(2024, 3, 29)));
        assert_eq!(EasterRelatedHoliday::western(1).date_in(2025), Some(ymd(2025, 4, 21)));
    }

    #[test]
    fn test_corpus_christi() {
        assert_eq!(EasterRelatedHoliday::western(60).date_in(2024), Some(ymd(2024, 5, 30)));
    }

    #[test]
    fn test_orthodox_good_friday() {
        let holiday = EasterRelatedHoliday::new(EasterType::Orthodox, -2);
        assert_eq!(holiday.date_in(2024), Some(ymd(2024, 5, 3)));
    }

    #[test]
    fn test_offset_leaving_the_year_yields_nothing() {
        assert_eq!(EasterRelatedHoliday::western(300).date_in(2024), None);
    }
}
