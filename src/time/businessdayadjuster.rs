use chrono::{
    Datelike,
    NaiveDate
};
use serde::{
    Serialize,
    Deserialize
};

use crate::holidayerror::Result;
use crate::time::calendar::businessdaycalculator::BusinessDayCalculator;

fn following(d: NaiveDate, calculator: &BusinessDayCalculator) -> Result<NaiveDate> {
    calculator.next_business_day(d)
}

fn preceding(d: NaiveDate, calculator: &BusinessDayCalculator) -> Result<NaiveDate> {
    calculator.previous_business_day(d)
}

fn modified_following(d: NaiveDate, calculator: &BusinessDayCalculator) -> Result<NaiveDate> {
    let adjusted = calculator.next_business_day(d)?;
    if adjusted.month() != d.month() {
        calculator.previous_business_day(d)
    } else {
        Ok(adjusted)
    }
}

fn modified_preceding(d: NaiveDate, calculator: &BusinessDayCalculator) -> Result<NaiveDate> {
    let adjusted = calculator.previous_business_day(d)?;
    if adjusted.month() != d.month() {
        calculator.next_business_day(d)
    } else {
        Ok(adjusted)
    }
}

fn nearest(d: NaiveDate, calculator: &BusinessDayCalculator) -> Result<NaiveDate> {
    let previous_day = calculator.previous_business_day(d)?;
    let next_day = calculator.next_business_day(d)?;
    // ties go forward
    if (next_day - d).num_days() <= (d - previous_day).num_days() {
        Ok(next_day)
    } else {
        Ok(previous_day)
    }
}

/// How a date falling on a non-business day is moved.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
pub enum BusinessDayConvention {
    Unadjusted,
    #[default]
    Following,
    Preceding,
    ModifiedFollowing,
    ModifiedPreceding,
    Nearest
}

impl BusinessDayConvention {
    /// Returns `d` when it is already a business day, otherwise rolls it per
    /// the convention.
    pub fn adjust(&self, d: NaiveDate, calculator: &BusinessDayCalculator) -> Result<NaiveDate> {
        if *self == BusinessDayConvention::Unadjusted || calculator.is_business_day(d)? {
            return Ok(d);
        }
        match self {
            BusinessDayConvention::Unadjusted => Ok(d),
            BusinessDayConvention::Following => following(d, calculator),
            BusinessDayConvention::Preceding => preceding(d, calculator),
            BusinessDayConvention::ModifiedFollowing => modified_following(d, calculator),
            BusinessDayConvention::ModifiedPreceding => modified_preceding(d, calculator),
            BusinessDayConvention::Nearest => nearest(d, calculator)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::time::calendar::holidayprovider::HolidayProvider;
    use crate::time::holiday::holidayrule::HolidayRule;
    use crate::time::holiday::holidayruleset::HolidayRuleSet;
    use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn calculator() -> BusinessDayCalculator {
        let rule_set = HolidayRuleSet::new("XX", Vec::<String>::new(), vec![
            HolidayRule::new("Month End Day", FixedDateHoliday::new(5, 31)),
            HolidayRule::new("Labour Day", FixedDateHoliday::new(5, 1)),
        ]).unwrap();
        BusinessDayCalculator::new(Arc::new(HolidayProvider::new(rule_set).unwrap()))
    }

    #[test]
    fn test_business_day_is_left_alone() {
        let calc = calculator();
        for convention in [
            BusinessDayConvention::Following,
            BusinessDayConvention::Preceding,
            BusinessDayConvention::Nearest
        ] {
            assert_eq!(convention.adjust(ymd(2024, 5, 15), &calc).unwrap(), ymd(2024, 5, 15));
        }
    }

    #[test]
    fn test_conventions_at_month_end() {
        let calc = calculator();
        // Fri May 31 2024 is a holiday; next business day is Mon Jun 3
        let d = ymd(2024, 5, 31);
        assert_eq!(BusinessDayConvention::Unadjusted.adjust(d, &calc).unwrap(), d);
        assert_eq!(BusinessDayConvention::Following.adjust(d, &calc).unwrap(), ymd(2024, 6, 3));
        assert_eq!(BusinessDayConvention::ModifiedFollowing.adjust(d, &calc).unwrap(), ymd(2024, 5, 30));
        assert_eq!(BusinessDayConvention::Preceding.adjust(d, &calc).unwrap(), ymd(2024, 5, 30));
        assert_eq!(BusinessDayConvention::Nearest.adjust(d, &calc).unwrap(), ymd(2024, 5, 30));
    }

    #[test]
    fn test_modified_preceding_at_month_start() {
        let calc = calculator();
        // Wed May 1 2024 is a holiday; previous business day is in April
        let d = ymd(2024, 5, 1);
        assert_eq!(BusinessDayConvention::Preceding.adjust(d, &calc).unwrap(), ymd(2024, 4, 30));
        assert_eq!(BusinessDayConvention::ModifiedPreceding.adjust(d, &calc).unwrap(), ymd(2024, 5, 2));
    }

    #[test]
    fn test_nearest_on_weekend() {
        let calc = calculator();
        // Saturday goes back to Friday, Sunday forward to Monday
        assert_eq!(BusinessDayConvention::Nearest.adjust(ymd(2024, 6, 8), &calc).unwrap(), ymd(2024, 6, 7));
        assert_eq!(BusinessDayConvention::Nearest.adjust(ymd(2024, 6, 9), &calc).unwrap(), ymd(2024, 6, 10));
    }
}
