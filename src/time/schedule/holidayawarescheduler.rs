use chrono::{
    Datelike,
    NaiveDate
};

use crate::holidayerror::{HolidayError, Result};
use crate::time::businessdayadjuster::BusinessDayConvention;
use crate::time::calendar::businessdaycalculator::BusinessDayCalculator;
use crate::time::calendarmath::last_day_of_month;
use crate::time::period::Period;

/// Generates date sequences that avoid non-business days.
///
/// Holds no state of its own; every call depends only on its arguments and
/// the borrowed calculator.
#[derive(Clone, Copy)]
pub struct HolidayAwareScheduler<'a> {
    calculator: &'a BusinessDayCalculator
}

impl<'a> HolidayAwareScheduler<'a> {
    pub fn new(calculator: &'a BusinessDayCalculator) -> HolidayAwareScheduler<'a> {
        HolidayAwareScheduler { calculator }
    }

    pub fn calculator(&self) -> &'a BusinessDayCalculator {
        self.calculator
    }

    /// `count` dates `anchor + k * interval`, each rolled forward to the next
    /// business day when it falls on a non-business day.
    pub fn schedule_recurring(&self, anchor: NaiveDate, interval: Period, count: usize) -> Result<Vec<NaiveDate>> {
        self.schedule_recurring_with(anchor, interval, count, BusinessDayConvention::Following)
    }

    /// Like [`schedule_recurring`](Self::schedule_recurring) with a chosen
    /// convention. Occurrences are computed from the anchor, not from the
    /// previous adjusted date, so month-end clamping does not drift.
    pub fn schedule_recurring_with(&self,
                                   anchor: NaiveDate,
                                   interval: Period,
                                   count: usize,
                                   convention: BusinessDayConvention) -> Result<Vec<NaiveDate>> {
        let mut dates = Vec::with_capacity(count);
        for k in 0..count {
            let raw = i32::try_from(k)
                .ok()
                .and_then(|k| interval.times(k))
                .and_then(|shift| shift.add_to(anchor))
                .ok_or(HolidayError::DateOutOfRange(anchor))?;
            dates.push(convention.adjust(raw, self.calculator)?);
        }
        Ok(dates)
    }

    /// The last business day of each of `count` consecutive months starting
    /// at `month` of `year`. Month ends roll backward so the date stays in its
    /// month.
    pub fn schedule_monthly_end_of_month(&self, year: i32, month: u32, count: usize) -> Result<Vec<NaiveDate>> {
        let anchor = NaiveDate::from_ymd_opt(year, month, 1).ok_or(HolidayError::InvalidMonth(month))?;
        let mut dates = Vec::with_capacity(count);
        for k in 0..count {
            let first = i32::try_from(k)
                .ok()
                .and_then(|k| Period::months(k).add_to(anchor))
                .ok_or(HolidayError::DateOutOfRange(anchor))?;
            let eom = last_day_of_month(first.year(), first.month())
                .ok_or(HolidayError::DateOutOfRange(first))?;
            dates.push(BusinessDayConvention::Preceding.adjust(eom, self.calculator)?);
        }
        Ok(dates)
    }
}
