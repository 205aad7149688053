use chrono::Weekday;

use crate::holidayerror::Result;
use crate::jurisdiction::ruletable::{build_rule_set, ObservedRow, RuleRow};
use crate::time::holiday::holiday::HolidayCategory;
use crate::time::holiday::holidayruleset::{HolidayRuleSet, SubdivisionCollision};
use crate::time::recurringholiday::weekendadjustment::{SubstitutionMode, OBSERVED_SUFFIX};

pub const CODE: &str = "US";

pub const SUBDIVISIONS: &[&str] = &[
    "AK", "AL", "AR", "AZ", "CA", "CO", "CT", "DC", "DE", "FL", "GA", "HI", "IA", "ID", "IL", "IN",
    "KS", "KY", "LA", "MA", "MD", "ME", "MI", "MN", "MO", "MS", "MT", "NC", "ND", "NE", "NH", "NJ",
    "NM", "NV", "NY", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VA", "VT", "WA",
    "WI", "WV", "WY"
];

/// Saturday holidays are observed on Friday, Sunday holidays on Monday, in
/// addition to the actual date.
const NEAREST_WEEKDAY: ObservedRow = ObservedRow::new(
    [None, None, None, None, None, Some(-1), Some(1)],
    SubstitutionMode::Add,
    OBSERVED_SUFFIX
);

/// Sunday-only observance used by some state holidays.
const SUNDAY_TO_MONDAY: ObservedRow = ObservedRow::new(
    [None, None, None, None, None, None, Some(1)],
    SubstitutionMode::Add,
    OBSERVED_SUFFIX
);

static RULES: &[RuleRow] = &[
    RuleRow::fixed("New Year's Day", 1, 1).since(1871).observed(NEAREST_WEEKDAY),
    RuleRow::nth("Martin Luther King Jr. Day", 1, Weekday::Mon, 3).since(1986),
    RuleRow::fixed("Washington's Birthday", 2, 22).between(1879, 1970).observed(NEAREST_WEEKDAY),
    RuleRow::nth("Washington's Birthday", 2, Weekday::Mon, 3).since(1971),
    RuleRow::fixed("Memorial Day", 5, 30).between(1888, 1970).observed(NEAREST_WEEKDAY),
    RuleRow::last("Memorial Day", 5, Weekday::Mon).since(1971),
    RuleRow::fixed("Juneteenth National Independence Day", 6, 19).since(2021).observed(NEAREST_WEEKDAY),
    RuleRow::fixed("Independence Day", 7, 4).since(1871).observed(NEAREST_WEEKDAY),
    RuleRow::nth("Labor Day", 9, Weekday::Mon, 1).since(1894),
    RuleRow::fixed("Columbus Day", 10, 12).between(1937, 1970).observed(NEAREST_WEEKDAY),
    RuleRow::nth("Columbus Day", 10, Weekday::Mon, 2).since(1971),
    RuleRow::fixed("Armistice Day", 11, 11).between(1938, 1953).observed(NEAREST_WEEKDAY),
    RuleRow::fixed("Veterans Day", 11, 11).between(1954, 1970).observed(NEAREST_WEEKDAY),
    RuleRow::nth("Veterans Day", 10, Weekday::Mon, 4).between(1971, 1977),
    RuleRow::fixed("Veterans Day", 11, 11).since(1978).observed(NEAREST_WEEKDAY),
    RuleRow::nth("Thanksgiving Day", 11, Weekday::Thu, 4).since(1942),
    RuleRow::fixed("Christmas Day", 12, 25).since(1871).observed(NEAREST_WEEKDAY),

    // state holidays
    RuleRow::fixed("Lincoln's Birthday", 2, 12).scoped(&["CT", "IL"]).observed(NEAREST_WEEKDAY),
    RuleRow::easter("Mardi Gras", -47).scoped(&["LA"]).since(1857),
    RuleRow::fixed("Texas Independence Day", 3, 2).scoped(&["TX"]).category(HolidayCategory::Observance),
    RuleRow::fixed("Cesar Chavez Day", 3, 31).scoped(&["CA"]).since(1995).observed(SUNDAY_TO_MONDAY),
    RuleRow::easter("Good Friday", -2).scoped(&["CT", "NJ"]),
    RuleRow::fixed("Emancipation Day", 4, 16).scoped(&["DC"]).since(2005).observed(NEAREST_WEEKDAY),
    RuleRow::nth("Patriots' Day", 4, Weekday::Mon, 3).scoped(&["MA", "ME"]).since(1969),
];

/// Federal holidays plus a selection of state holidays.
pub fn rule_set() -> Result<HolidayRuleSet> {
    build_rule_set(CODE, SUBDIVISIONS, RULES, SubdivisionCollision::Separate)
}
