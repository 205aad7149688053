use chrono::NaiveDate;
use serde::{
    Deserialize,
    Serialize
};

use crate::holidayerror::Result;
use super::easterrelatedholiday::EasterRelatedHoliday;
use super::fixeddateholiday::FixedDateHoliday;
use super::nthweekdayholiday::NthWeekdayHoliday;

/// The date part of a holiday rule.
///
/// The set of kinds is closed, so evaluation is a plain `match` rather than a
/// trait object per kind.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(tag = "holiday_type")]
pub enum RecurringHoliday {
    FixedDate(FixedDateHoliday),
    NthWeekday(NthWeekdayHoliday),
    EasterRelated(EasterRelatedHoliday)
}

impl RecurringHoliday {
    pub fn validate(&self) -> Result<()> {
        match self {
            RecurringHoliday::FixedDate(holiday) => holiday.validate(),
            RecurringHoliday::NthWeekday(holiday) => holiday.validate(),
            RecurringHoliday::EasterRelated(_) => Ok(())
        }
    }

    /// The single date the rule resolves to in `year`, if any.
    ///
    /// Only an nth-weekday rule asking for a nonexistent ordinal produces an
    /// error; the caller decides whether that skips or fails.
    pub fn date_in(&self, year: i32) -> Result<Option<NaiveDate>> {
        match self {
            RecurringHoliday::FixedDate(holiday) => Ok(holiday.date_in(year)),
            RecurringHoliday::NthWeekday(holiday) => holiday.date_in(year).map(Some),
            RecurringHoliday::EasterRelated(holiday) => Ok(holiday.date_in(year))
        }
    }
}

impl From<FixedDateHoliday> for RecurringHoliday {
    fn from(holiday: FixedDateHoliday) -> Self {
        RecurringHoliday::FixedDate(holiday)
    }
}

impl From<NthWeekdayHoliday> for RecurringHoliday {
    fn from(holiday: NthWeekdayHoliday) -> Self {
        RecurringHoliday::NthWeekday(holiday)
    }
}

impl From<EasterRelatedHoliday> for RecurringHoliday {
    fn from(holiday: EasterRelatedHoliday) -> Self {
        RecurringHoliday::EasterRelated(holiday)
    }
}
