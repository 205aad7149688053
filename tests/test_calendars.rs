//! End-to-end checks against the built-in jurisdiction tables.

use std::sync::Arc;
use std::thread;

use chrono::{NaiveDate, Weekday};

use holidaycal::configuration::CalendarConfiguration;
use holidaycal::holidayerror::HolidayError;
use holidaycal::jurisdiction::registry::JurisdictionRegistry;
use holidaycal::time::businessdayadjuster::BusinessDayConvention;
use holidaycal::time::calendar::businessdaycalculator::BusinessDayCalculator;
use holidaycal::time::holiday::holiday::HolidayCategory;
use holidaycal::time::period::Period;
use holidaycal::time::schedule::holidayawarescheduler::HolidayAwareScheduler;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn calculator(code: &str) -> BusinessDayCalculator {
    let registry = JurisdictionRegistry::builtin().unwrap();
    BusinessDayCalculator::new(registry.provider(code).unwrap())
}

/// Every date in `[from, to]` that is not a business day and not a weekend.
fn holiday_list(calc: &BusinessDayCalculator, from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
    from.iter_days()
        .take_while(|d| *d <= to)
        .filter(|d| !calc.is_weekend(*d) && calc.is_holiday(*d).unwrap())
        .collect()
}

#[test]
fn us_independence_day_2024() {
    let calc = calculator("US");
    let holiday = calc.provider().is_holiday(date(2024, 7, 4)).unwrap().unwrap();
    assert_eq!(holiday.name(), "Independence Day");
    assert_eq!(holiday.category(), HolidayCategory::Public);
    assert!(!calc.is_business_day(date(2024, 7, 4)).unwrap());
    assert!(calc.is_business_day(date(2024, 7, 5)).unwrap());
    assert_eq!(calc.add_business_days(date(2024, 7, 3), 1).unwrap(), date(2024, 7, 5));
}

#[test]
fn custom_weekend() {
    let mut calc = calculator("US");
    calc.set_weekends([Weekday::Fri, Weekday::Sat]).unwrap();
    assert!(calc.is_business_day(date(2024, 7, 7)).unwrap());
    assert!(!calc.is_business_day(date(2024, 7, 5)).unwrap());
    // the holiday cache is unaffected by weekend changes
    assert!(!calc.is_business_day(date(2024, 7, 4)).unwrap());
}

#[test]
fn end_of_month_roll_from_sunday() {
    // Mar 31 2024 is a Sunday and Mar 29 is Good Friday
    let us = calculator("US");
    let gb = calculator("GB");
    assert_eq!(HolidayAwareScheduler::new(&us).schedule_monthly_end_of_month(2024, 3, 1).unwrap(), vec![date(2024, 3, 29)]);
    assert_eq!(HolidayAwareScheduler::new(&gb).schedule_monthly_end_of_month(2024, 3, 1).unwrap(), vec![date(2024, 3, 28)]);
}

#[test]
fn quarterly_schedule() {
    let calc = calculator("US");
    let scheduler = HolidayAwareScheduler::new(&calc);
    let dates = scheduler.schedule_recurring(date(2024, 1, 15), Period::months(3), 4).unwrap();
    // Jan 15 is MLK day; Apr 15, Jul 15, Oct 15 are ordinary weekdays
    assert_eq!(dates, vec![date(2024, 1, 16), date(2024, 4, 15), date(2024, 7, 15), date(2024, 10, 15)]);

    let modified = scheduler
        .schedule_recurring_with(date(2024, 6, 30), Period::months(1), 2, BusinessDayConvention::ModifiedFollowing)
        .unwrap();
    assert_eq!(modified, vec![date(2024, 6, 28), date(2024, 7, 30)]);
}

#[test]
fn subdivision_filtering() {
    let registry = JurisdictionRegistry::builtin().unwrap();
    let provider = registry.provider("DE").unwrap();
    let nationwide = BusinessDayCalculator::new(Arc::clone(&provider));
    let bavaria = BusinessDayCalculator::with_subdivisions(Arc::clone(&provider), ["BY"]).unwrap();

    // Corpus Christi 2024
    assert!(nationwide.is_business_day(date(2024, 5, 30)).unwrap());
    assert!(!bavaria.is_business_day(date(2024, 5, 30)).unwrap());
    let lowercase = BusinessDayCalculator::with_subdivisions(Arc::clone(&provider), ["by"]).unwrap();
    assert!(!lowercase.is_business_day(date(2024, 5, 30)).unwrap());

    assert!(matches!(
        BusinessDayCalculator::with_subdivisions(provider, ["CA"]),
        Err(HolidayError::InvalidSubdivision { .. })
    ));
}

#[test]
fn observed_date_in_previous_year() {
    let calc = calculator("US");
    // New Year's Day 2022 is a Saturday, observed on Fri Dec 31 2021
    let observed = calc.provider().is_holiday(date(2021, 12, 31)).unwrap().unwrap();
    assert!(observed.is_observed());
    assert_eq!(observed.name(), "New Year's Day (observed)");
    assert!(!calc.is_business_day(date(2021, 12, 31)).unwrap());
    assert_eq!(calc.business_days_between(date(2021, 12, 27), date(2022, 1, 3)).unwrap(), 5);
}

#[test]
fn england_holiday_list_2022() {
    let registry = JurisdictionRegistry::builtin().unwrap();
    let calc = BusinessDayCalculator::with_subdivisions(registry.provider("GB").unwrap(), ["ENG"]).unwrap();
    assert_eq!(holiday_list(&calc, date(2022, 1, 1), date(2022, 12, 31)), vec![
        date(2022, 1, 3),
        date(2022, 4, 15),
        date(2022, 4, 18),
        date(2022, 5, 2),
        date(2022, 6, 2),
        date(2022, 6, 3),
        date(2022, 8, 29),
        date(2022, 9, 19),
        date(2022, 12, 26),
        date(2022, 12, 27),
    ]);
}

#[test]
fn holidays_between_spans_years() {
    let registry = JurisdictionRegistry::builtin().unwrap();
    let provider = registry.provider("US").unwrap();
    let names: Vec<String> = provider
        .holidays_between(date(2024, 12, 20), date(2025, 1, 25), Vec::<String>::new())
        .unwrap()
        .iter()
        .map(|h| h.name().to_string())
        .collect();
    assert_eq!(names, vec!["Christmas Day", "New Year's Day", "Martin Luther King Jr. Day"]);
}

#[test]
fn localized_names() {
    let registry = JurisdictionRegistry::builtin().unwrap();
    let provider = registry.provider("DE").unwrap();
    let unity = provider.is_holiday(date(2024, 10, 3)).unwrap().unwrap();
    assert_eq!(unity.name(), "German Unity Day");
    assert_eq!(unity.localized_name("de"), "Tag der Deutschen Einheit");
    assert_eq!(unity.localized_name("it"), "German Unity Day");
}

#[test]
fn evaluation_is_deterministic() {
    let registry = JurisdictionRegistry::builtin().unwrap();
    for code in ["US", "GB", "DE"] {
        let first = registry.provider(code).unwrap();
        let second = registry.provider(code).unwrap();
        for year in [1999, 2017, 2024, 2050] {
            assert_eq!(first.load_holidays(year).unwrap(), second.load_holidays(year).unwrap());
        }
    }
}

#[test]
fn shared_provider_across_threads() {
    let registry = JurisdictionRegistry::builtin().unwrap();
    let provider = registry.provider("US").unwrap();
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let provider = Arc::clone(&provider);
            thread::spawn(move || {
                let calc = BusinessDayCalculator::new(provider);
                calc.add_business_days(date(2024, 1, 2), 20 * i).unwrap()
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap() >= date(2024, 1, 2));
    }
    assert!(provider.cached_len() >= 1);
}

#[test]
fn calendar_from_configuration() {
    let config = CalendarConfiguration::from_json_value(serde_json::json!({
        "jurisdiction": "GB",
        "subdivisions": ["SCT"]
    })).unwrap();
    let registry = JurisdictionRegistry::builtin().unwrap();
    let (_, calc) = config.build(&registry).unwrap();
    // St Andrew's Day 2024 is a Saturday, substituted on Mon Dec 2
    assert!(!calc.is_business_day(date(2024, 12, 2)).unwrap());
    assert!(calc.is_business_day(date(2024, 4, 1)).unwrap());
}
