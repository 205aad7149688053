use std::collections::HashSet;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Weekday};
use log::debug;

use crate::holidayerror::{HolidayError, Result};
use crate::time::calendar::holidayprovider::HolidayProvider;
use crate::time::calendar::holidayset::HolidaySet;
use crate::time::calendar::weekendmask::WeekendMask;
use crate::time::calendarmath::{add_days, last_day_of_month};

/// Longest run of non-business days a walk tolerates before giving up.
const MAX_NON_BUSINESS_RUN: u32 = 366;

/// Business-day membership and date walking over a shared holiday provider.
///
/// The weekend set belongs to the calculator; changing it leaves the
/// provider's holiday cache untouched.
pub struct BusinessDayCalculator {
    provider: Arc<HolidayProvider>,
    weekends: WeekendMask,
    subdivisions: Vec<String>
}

impl BusinessDayCalculator {
    /// Saturday/Sunday weekends and nationwide holidays.
    pub fn new(provider: Arc<HolidayProvider>) -> BusinessDayCalculator {
        BusinessDayCalculator {
            provider,
            weekends: WeekendMask::default(),
            subdivisions: Vec::new()
        }
    }

    /// Also treats holidays of `subdivisions` as non-business days.
    pub fn with_subdivisions<I, S>(provider: Arc<HolidayProvider>, subdivisions: I) -> Result<BusinessDayCalculator>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>
    {
        let filter = provider.rule_set().check_subdivisions(subdivisions)?;
        Ok(BusinessDayCalculator {
            provider,
            weekends: WeekendMask::default(),
            subdivisions: filter.into_iter().collect()
        })
    }

    pub fn provider(&self) -> &Arc<HolidayProvider> {
        &self.provider
    }

    pub fn subdivisions(&self) -> &[String] {
        &self.subdivisions
    }

    /// Replaces the weekend set. A weekend covering all seven days is
    /// rejected since no date could ever be a business day.
    pub fn set_weekends<I: IntoIterator<Item = Weekday>>(&mut self, weekdays: I) -> Result<()> {
        let mask = WeekendMask::new(weekdays);
        if mask.covers_full_week() {
            return Err(HolidayError::FullWeekend);
        }
        debug!("{}: weekends set to {:?}", self.provider.jurisdiction(), mask.weekend_list());
        self.weekends = mask;
        Ok(())
    }

    pub fn weekends(&self) -> HashSet<Weekday> {
        self.weekends.to_hashset()
    }

    #[inline]
    pub fn is_weekend(&self, d: NaiveDate) -> bool {
        self.weekends.is_weekend(d.weekday())
    }

    /// Holidays of `year` under this calculator's subdivision filter.
    pub fn holiday_set(&self, year: i32) -> Result<Arc<HolidaySet>> {
        if self.subdivisions.is_empty() {
            self.provider.load_holidays(year)
        } else {
            self.provider.holidays_with_subdivisions(year, &self.subdivisions)
        }
    }

    pub fn is_holiday(&self, d: NaiveDate) -> Result<bool> {
        Ok(self.holiday_set(d.year())?.contains(&d))
    }

    pub fn is_business_day(&self, d: NaiveDate) -> Result<bool> {
        BusinessDayCursor::new(self).is_business_day(d)
    }

    /// Walks `n` business days forward (`n > 0`) or backward (`n < 0`).
    /// `n == 0` returns `d` as is, business day or not.
    pub fn add_business_days(&self, d: NaiveDate, n: i32) -> Result<NaiveDate> {
        let step = if n >= 0 { 1 } else { -1 };
        let mut cursor = BusinessDayCursor::new(self);
        let mut m = n.unsigned_abs();
        let mut current = d;
        let mut run = 0;
        while m > 0 {
            current = add_days(current, step)?;
            if cursor.is_business_day(current)? {
                m -= 1;
                run = 0;
            } else {
                run += 1;
                if run > MAX_NON_BUSINESS_RUN {
                    return Err(HolidayError::NoBusinessDays(MAX_NON_BUSINESS_RUN, d));
                }
            }
        }
        Ok(current)
    }

    /// The first business day strictly after `d`.
    pub fn next_business_day(&self, d: NaiveDate) -> Result<NaiveDate> {
        self.add_business_days(d, 1)
    }

    /// The last business day strictly before `d`.
    pub fn previous_business_day(&self, d: NaiveDate) -> Result<NaiveDate> {
        self.add_business_days(d, -1)
    }

    /// Counts business days in `[start, end]`, both ends included. An
    /// inverted range counts zero.
    pub fn business_days_between(&self, start: NaiveDate, end: NaiveDate) -> Result<i64> {
        let mut cursor = BusinessDayCursor::new(self);
        let mut count = 0;
        let mut current = start;
        while current <= end {
            if cursor.is_business_day(current)? {
                count += 1;
            }
            match current.succ_opt() {
                Some(next) => current = next,
                None => break
            }
        }
        Ok(count)
    }

    pub fn last_business_day_of_month(&self, year: i32, month: u32) -> Result<NaiveDate> {
        let eom = last_day_of_month(year, month).ok_or(HolidayError::InvalidMonth(month))?;
        if self.is_business_day(eom)? {
            Ok(eom)
        } else {
            self.previous_business_day(eom)
        }
    }

    pub fn first_business_day_of_month(&self, year: i32, month: u32) -> Result<NaiveDate> {
        let fom = NaiveDate::from_ymd_opt(year, month, 1).ok_or(HolidayError::InvalidMonth(month))?;
        if self.is_business_day(fom)? {
            Ok(fom)
        } else {
            self.next_business_day(fom)
        }
    }
}

/// Keeps the current year's holiday set at hand while walking day by day.
struct BusinessDayCursor<'a> {
    calculator: &'a BusinessDayCalculator,
    holidays: Option<Arc<HolidaySet>>
}

impl<'a> BusinessDayCursor<'a> {
    fn new(calculator: &'a BusinessDayCalculator) -> Self {
        BusinessDayCursor { calculator, holidays: None }
    }

    fn is_business_day(&mut self, d: NaiveDate) -> Result<bool> {
        if self.calculator.is_weekend(d) {
            return Ok(false);
        }
        let stale = self.holidays.as_ref().is_none_or(|set| set.year() != d.year());
        if stale {
            self.holidays = Some(self.calculator.holiday_set(d.year())?);
        }
        Ok(self.holidays.as_ref().is_some_and(|set| !set.contains(&d)))
    }
}
