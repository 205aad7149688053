use chrono::Weekday;

use crate::holidayerror::Result;
use crate::jurisdiction::ruletable::{build_rule_set, ObservedRow, RuleRow};
use crate::time::holiday::holiday::HolidayCategory::Bank;
use crate::time::holiday::holidayruleset::{HolidayRuleSet, SubdivisionCollision};
use crate::time::recurringholiday::weekendadjustment::SubstitutionMode;

pub const CODE: &str = "GB";

pub const SUBDIVISIONS: &[&str] = &["ENG", "NIR", "SCT", "WLS"];

const SUBSTITUTE_SUFFIX: &str = " (substitute day)";

const ENGLAND_WALES_NI: &[&str] = &["ENG", "WLS", "NIR"];

/// A weekend bank holiday moves to the next Monday.
const NEXT_MONDAY: ObservedRow = ObservedRow::new(
    [None, None, None, None, None, Some(2), Some(1)],
    SubstitutionMode::Replace,
    SUBSTITUTE_SUFFIX
);

/// Christmas and Boxing Day: a weekend date moves two days on, so the pair
/// never lands on the same substitute.
const TWO_DAYS_ON: ObservedRow = ObservedRow::new(
    [None, None, None, None, None, Some(2), Some(2)],
    SubstitutionMode::Replace,
    SUBSTITUTE_SUFFIX
);

/// 2 January falls on Monday exactly when New Year's Day took that Monday.
const AFTER_NEW_YEAR: ObservedRow = ObservedRow::new(
    [Some(1), None, None, None, None, Some(2), Some(2)],
    SubstitutionMode::Replace,
    SUBSTITUTE_SUFFIX
);

static RULES: &[RuleRow] = &[
    RuleRow::fixed("New Year's Day", 1, 1).since(1974).observed(NEXT_MONDAY).category(Bank),
    RuleRow::easter("Good Friday", -2),
    RuleRow::easter("Easter Monday", 1).scoped(ENGLAND_WALES_NI).category(Bank),
    RuleRow::nth("Early May bank holiday", 5, Weekday::Mon, 1).between(1978, 1994).category(Bank),
    RuleRow::once("Early May bank holiday (VE Day)", 1995, 5, 8).category(Bank),
    RuleRow::nth("Early May bank holiday", 5, Weekday::Mon, 1).between(1996, 2019).category(Bank),
    RuleRow::once("Early May bank holiday (VE Day)", 2020, 5, 8).category(Bank),
    RuleRow::nth("Early May bank holiday", 5, Weekday::Mon, 1).since(2021).category(Bank),
    RuleRow::easter("Whit Monday", 50).between(1871, 1970).scoped(ENGLAND_WALES_NI).category(Bank),
    RuleRow::last("Spring bank holiday", 5, Weekday::Mon).between(1971, 2001).category(Bank),
    RuleRow::once("Spring bank holiday", 2002, 6, 4).category(Bank),
    RuleRow::last("Spring bank holiday", 5, Weekday::Mon).between(2003, 2011).category(Bank),
    RuleRow::once("Spring bank holiday", 2012, 6, 4).category(Bank),
    RuleRow::last("Spring bank holiday", 5, Weekday::Mon).between(2013, 2021).category(Bank),
    RuleRow::once("Spring bank holiday", 2022, 6, 2).category(Bank),
    RuleRow::last("Spring bank holiday", 5, Weekday::Mon).since(2023).category(Bank),
    RuleRow::last("Summer bank holiday", 8, Weekday::Mon).since(1971).scoped(ENGLAND_WALES_NI).category(Bank),
    RuleRow::fixed("Christmas Day", 12, 25).observed(TWO_DAYS_ON),
    RuleRow::fixed("Boxing Day", 12, 26).observed(TWO_DAYS_ON).category(Bank),

    // one-off bank holidays
    RuleRow::once("Wedding of Prince William and Catherine Middleton", 2011, 4, 29).category(Bank),
    RuleRow::once("Golden Jubilee of Elizabeth II", 2002, 6, 3).category(Bank),
    RuleRow::once("Diamond Jubilee of Elizabeth II", 2012, 6, 5).category(Bank),
    RuleRow::once("Platinum Jubilee of Elizabeth II", 2022, 6, 3).category(Bank),
    RuleRow::once("State Funeral of Queen Elizabeth II", 2022, 9, 19).category(Bank),
    RuleRow::once("Coronation of Charles III", 2023, 5, 8).category(Bank),

    // Scotland
    RuleRow::fixed("2 January", 1, 2).scoped(&["SCT"]).observed(AFTER_NEW_YEAR).category(Bank),
    RuleRow::nth("Summer bank holiday", 8, Weekday::Mon, 1).scoped(&["SCT"]).category(Bank),
    RuleRow::fixed("St Andrew's Day", 11, 30).scoped(&["SCT"]).since(2007).observed(NEXT_MONDAY).category(Bank),

    // Northern Ireland
    RuleRow::fixed("St Patrick's Day", 3, 17).scoped(&["NIR"]).observed(NEXT_MONDAY).category(Bank),
    RuleRow::fixed("Battle of the Boyne", 7, 12).scoped(&["NIR"]).observed(NEXT_MONDAY).category(Bank),
];

/// UK bank holidays. Nationwide rules cover every nation; Scottish and
/// Northern Irish days need the `SCT`/`NIR` filter.
pub fn rule_set() -> Result<HolidayRuleSet> {
    build_rule_set(CODE, SUBDIVISIONS, RULES, SubdivisionCollision::Merge)
}
