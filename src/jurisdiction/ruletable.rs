use chrono::Weekday;

use crate::holidayerror::Result;
use crate::time::holiday::holiday::HolidayCategory;
use crate::time::holiday::holidayrule::HolidayRule;
use crate::time::holiday::holidayruleset::{HolidayRuleSet, SubdivisionCollision};
use crate::time::ordinal::Ordinal;
use crate::time::recurringholiday::easterrelatedholiday::EasterRelatedHoliday;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::nthweekdayholiday::NthWeekdayHoliday;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;
use crate::time::recurringholiday::weekendadjustment::{ObservedPolicy, SubstitutionMode};

/// Compile-time form of an [`ObservedPolicy`].
#[derive(Clone, Copy)]
pub struct ObservedRow {
    shifts: [Option<i32>; 7],
    mode: SubstitutionMode,
    suffix: &'static str
}

impl ObservedRow {
    pub const fn new(shifts: [Option<i32>; 7], mode: SubstitutionMode, suffix: &'static str) -> ObservedRow {
        ObservedRow { shifts, mode, suffix }
    }

    fn to_policy(self) -> ObservedPolicy {
        ObservedPolicy::from_shifts(self.shifts, self.mode, self.suffix)
    }
}

/// One row of a built-in jurisdiction table.
#[derive(Clone, Copy)]
pub struct RuleRow {
    name: &'static str,
    date_rule: RecurringHoliday,
    category: HolidayCategory,
    subdivisions: &'static [&'static str],
    first_year: Option<i32>,
    last_year: Option<i32>,
    observed: Option<ObservedRow>,
    names: &'static [(&'static str, &'static str)]
}

impl RuleRow {
    const fn new(name: &'static str, date_rule: RecurringHoliday) -> RuleRow {
        RuleRow {
            name,
            date_rule,
            category: HolidayCategory::Public,
            subdivisions: &[],
            first_year: None,
            last_year: None,
            observed: None,
            names: &[]
        }
    }

    pub const fn fixed(name: &'static str, month: u32, day: u32) -> RuleRow {
        RuleRow::new(name, RecurringHoliday::FixedDate(FixedDateHoliday::new(month, day)))
    }

    pub const fn nth(name: &'static str, month: u32, weekday: Weekday, n: u8) -> RuleRow {
        RuleRow::new(name, RecurringHoliday::NthWeekday(NthWeekdayHoliday::new(month, weekday, Ordinal::Nth(n))))
    }

    pub const fn last(name: &'static str, month: u32, weekday: Weekday) -> RuleRow {
        RuleRow::new(name, RecurringHoliday::NthWeekday(NthWeekdayHoliday::last(month, weekday)))
    }

    pub const fn easter(name: &'static str, shift_days: i32) -> RuleRow {
        RuleRow::new(name, RecurringHoliday::EasterRelated(EasterRelatedHoliday::western(shift_days)))
    }

    /// A holiday that happened in a single year only.
    pub const fn once(name: &'static str, year: i32, month: u32, day: u32) -> RuleRow {
        RuleRow::fixed(name, month, day).between(year, year)
    }

    pub const fn category(self, category: HolidayCategory) -> RuleRow {
        RuleRow { category, ..self }
    }

    pub const fn scoped(self, subdivisions: &'static [&'static str]) -> RuleRow {
        RuleRow { subdivisions, ..self }
    }

    pub const fn since(self, year: i32) -> RuleRow {
        RuleRow { first_year: Some(year), ..self }
    }

    pub const fn until(self, year: i32) -> RuleRow {
        RuleRow { last_year: Some(year), ..self }
    }

    pub const fn between(self, first_year: i32, last_year: i32) -> RuleRow {
        RuleRow { first_year: Some(first_year), last_year: Some(last_year), ..self }
    }

    pub const fn observed(self, observed: ObservedRow) -> RuleRow {
        RuleRow { observed: Some(observed), ..self }
    }

    pub const fn localized(self, names: &'static [(&'static str, &'static str)]) -> RuleRow {
        RuleRow { names, ..self }
    }

    pub fn to_rule(&self) -> HolidayRule {
        let mut rule = HolidayRule::new(self.name, self.date_rule)
            .with_category(self.category)
            .in_subdivisions(self.subdivisions.iter().copied())
            .valid_between(self.first_year, self.last_year);
        for &(lang, name) in self.names {
            rule = rule.with_localized_name(lang, name);
        }
        if let Some(observed) = self.observed {
            rule = rule.with_observed(observed.to_policy());
        }
        rule
    }
}

pub fn build_rule_set(jurisdiction: &str,
                      subdivisions: &[&str],
                      rows: &[RuleRow],
                      collision: SubdivisionCollision) -> Result<HolidayRuleSet> {
    let rules = rows.iter().map(RuleRow::to_rule).collect();
    Ok(HolidayRuleSet::new(jurisdiction, subdivisions.iter().copied(), rules)?
        .with_subdivision_collision(collision))
}
