use chrono::{Datelike, Days, NaiveDate, TimeDelta, Weekday};

use crate::holidayerror::{HolidayError, Result};
use crate::time::ordinal::Ordinal;

#[inline]
pub const fn is_leap (year: i32) -> bool {
    ((year % 4 == 0) && (year % 100 != 0)) || (year % 400 == 0)
}

/// Number of days in `month` (1..=12) of `year`.
pub const fn days_of_month (year: i32, month: u32) -> u32 {
    const NO_LEAP_EOM: [u32; 13] = [
        0, 31, 28, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    const LEAP_EOM: [u32; 13] = [
        0, 31, 29, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    if is_leap(year) {
        LEAP_EOM[month as usize]
    } else {
        NO_LEAP_EOM[month as usize]
    }
}

pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    if !(1..=12).contains(&month) {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, days_of_month(year, month))
}

/// Western (Gregorian) Easter Sunday using the anonymous Meeus/Jones/Butcher
/// algorithm. Exact for every proleptic Gregorian year from 1 onwards.
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    if year < 1 {
        return None;
    }

    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;

    NaiveDate::from_ymd_opt(year, (n / 31) as u32, (n % 31 + 1) as u32)
}

/// Orthodox Easter Sunday: the Julian computus shifted onto the Gregorian
/// calendar.
pub fn orthodox_easter_sunday(year: i32) -> Option<NaiveDate> {
    if !(1583..=4099).contains(&year) {
        return None;
    }

    let g = year % 19;
    let i = (19 * g + 15) % 30;
    let j = (year + year / 4 + i) % 7;
    let e = if year <= 1600 {
        10
    } else {
        10 + year / 100 - 16 - (year / 100 - 16) / 4
    };
    let p = (i - j + e) as u32;

    let day = 1 + (p + 27 + (p + 6) / 40) % 31;
    let month = 3 + (p + 26) / 30;

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Resolves the `ordinal` occurrence of `weekday` within `month` of `year`.
///
/// Fails with [`HolidayError::InvalidOrdinal`] when the month has no such
/// occurrence (a 5th weekday in a month that only has four).
pub fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, ordinal: Ordinal) -> Result<NaiveDate> {
    let invalid = || HolidayError::InvalidOrdinal { year, month, weekday, ordinal };

    match ordinal {
        Ordinal::Nth(n) => {
            NaiveDate::from_weekday_of_month_opt(year, month, weekday, n).ok_or_else(invalid)
        },
        Ordinal::Last => {
            let eom = last_day_of_month(year, month).ok_or_else(invalid)?;
            let days_back = (eom.weekday().num_days_from_monday() + 7
                             - weekday.num_days_from_monday()) % 7;
            eom.checked_sub_days(Days::new(days_back as u64)).ok_or_else(invalid)
        }
    }
}

pub fn add_days(d: NaiveDate, n: i64) -> Result<NaiveDate> {
    TimeDelta::try_days(n)
        .and_then(|delta| d.checked_add_signed(delta))
        .ok_or(HolidayError::DateOutOfRange(d))
}

/// Day of week with Monday = 0 through Sunday = 6.
#[inline]
pub fn weekday(d: NaiveDate) -> u8 {
    d.weekday().num_days_from_monday() as u8
}

/// Signed number of days from `a` to `b`.
#[inline]
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days()
}
