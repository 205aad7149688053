use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate};
use log::warn;
use serde::{
    Deserialize,
    Serialize
};

use crate::holidayerror::{HolidayError, Result};
use crate::time::holiday::holiday::{Holiday, HolidayCategory};
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;
use crate::time::recurringholiday::weekendadjustment::{ObservedPolicy, SubstitutionMode};

/// What to do when an nth-weekday rule asks for an occurrence the month does
/// not have.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
pub enum OrdinalPolicy {
    /// The rule contributes nothing for that year.
    #[default]
    Skip,
    /// Evaluation of the whole year fails.
    Fail
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct HolidayRule {
    name: String,
    #[serde(default)]
    names: BTreeMap<String, String>,
    date_rule: RecurringHoliday,
    #[serde(default)]
    category: HolidayCategory,
    #[serde(default)]
    subdivisions: BTreeSet<String>,
    #[serde(default)]
    first_year: Option<i32>,
    #[serde(default)]
    last_year: Option<i32>,
    #[serde(default)]
    observed: Option<ObservedPolicy>,
    #[serde(default)]
    ordinal_policy: OrdinalPolicy
}

impl HolidayRule {
    pub fn new<S: Into<String>, R: Into<RecurringHoliday>>(name: S, date_rule: R) -> HolidayRule {
        HolidayRule {
            name: name.into(),
            names: BTreeMap::new(),
            date_rule: date_rule.into(),
            category: HolidayCategory::Public,
            subdivisions: BTreeSet::new(),
            first_year: None,
            last_year: None,
            observed: None,
            ordinal_policy: OrdinalPolicy::Skip
        }
    }

    pub fn with_category(mut self, category: HolidayCategory) -> HolidayRule {
        self.category = category;
        self
    }

    pub fn with_localized_name<L: Into<String>, S: Into<String>>(mut self, lang: L, name: S) -> HolidayRule {
        self.names.insert(lang.into(), name.into());
        self
    }

    pub fn in_subdivisions<I, S>(mut self, subdivisions: I) -> HolidayRule
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        self.subdivisions.extend(subdivisions.into_iter().map(Into::into));
        self
    }

    /// Restricts the rule to `[first_year, last_year]`, either end open.
    pub fn valid_between(mut self, first_year: Option<i32>, last_year: Option<i32>) -> HolidayRule {
        self.first_year = first_year;
        self.last_year = last_year;
        self
    }

    pub fn with_observed(mut self, policy: ObservedPolicy) -> HolidayRule {
        self.observed = Some(policy);
        self
    }

    pub fn with_ordinal_policy(mut self, policy: OrdinalPolicy) -> HolidayRule {
        self.ordinal_policy = policy;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn names(&self) -> &BTreeMap<String, String> {
        &self.names
    }

    pub fn date_rule(&self) -> &RecurringHoliday {
        &self.date_rule
    }

    pub fn category(&self) -> HolidayCategory {
        self.category
    }

    pub fn subdivisions(&self) -> &BTreeSet<String> {
        &self.subdivisions
    }

    pub fn observed(&self) -> Option<&ObservedPolicy> {
        self.observed.as_ref()
    }

    pub fn ordinal_policy(&self) -> OrdinalPolicy {
        self.ordinal_policy
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(HolidayError::invalid_rule("holiday rule without a name"));
        }
        if let (Some(first), Some(last)) = (self.first_year, self.last_year) {
            if first > last {
                return Err(HolidayError::invalid_rule(format!(
                    "'{}' has validity window {}..={} ending before it starts", self.name, first, last
                )));
            }
        }
        self.date_rule.validate().map_err(|error| HolidayError::Rule {
            name: self.name.clone(),
            source: Box::new(error)
        })
    }

    pub fn is_valid_in(&self, year: i32) -> bool {
        self.first_year.is_none_or(|first| year >= first)
            && self.last_year.is_none_or(|last| year <= last)
    }

    /// Nationwide rules always apply; scoped rules apply when their scope
    /// intersects `filter`.
    pub fn applies_to(&self, filter: &BTreeSet<String>) -> bool {
        self.subdivisions.is_empty() || !self.subdivisions.is_disjoint(filter)
    }

    /// The rule's own date for `year`, before any substitution.
    pub fn occurrence(&self, year: i32) -> Result<Option<NaiveDate>> {
        if !self.is_valid_in(year) {
            return Ok(None);
        }

        match self.date_rule.date_in(year) {
            Ok(date) => Ok(date),
            Err(error @ HolidayError::InvalidOrdinal { .. }) => match self.ordinal_policy {
                OrdinalPolicy::Skip => {
                    warn!("skipping '{}' for {}: {}", self.name, year, error);
                    Ok(None)
                },
                OrdinalPolicy::Fail => Err(HolidayError::Rule {
                    name: self.name.clone(),
                    source: Box::new(error)
                })
            },
            Err(error) => Err(error)
        }
    }

    /// Occurrence in an adjacent year, looked at only for substitutes that
    /// cross the boundary. A missing ordinal there is not an error for the
    /// requested year.
    fn neighbour_occurrence(&self, year: i32) -> Result<Option<NaiveDate>> {
        if !self.is_valid_in(year) {
            return Ok(None);
        }

        match self.date_rule.date_in(year) {
            Ok(date) => Ok(date),
            Err(HolidayError::InvalidOrdinal { .. }) => Ok(None),
            Err(error) => Err(error)
        }
    }

    fn holiday_on(&self, date: NaiveDate) -> Holiday {
        Holiday::new(
            date,
            self.name.clone(),
            self.names.clone(),
            self.category,
            self.subdivisions.clone()
        )
    }

    /// Every holiday this rule places inside `year`.
    ///
    /// With an observed policy the neighbouring years are evaluated too, since
    /// a substitute date can cross the year boundary (Jan 1 on a Saturday
    /// observed on Dec 31).
    pub fn holidays_in(&self, year: i32) -> Result<Vec<Holiday>> {
        let mut holidays = Vec::with_capacity(2);

        let Some(policy) = self.observed.as_ref() else {
            if let Some(date) = self.occurrence(year)? {
                holidays.push(self.holiday_on(date));
            }
            return Ok(holidays);
        };

        let source_years = [year.checked_sub(1), Some(year), year.checked_add(1)];
        for source_year in source_years.into_iter().flatten() {
            let occurrence = if source_year == year {
                self.occurrence(source_year)?
            } else {
                self.neighbour_occurrence(source_year)?
            };
            let Some(date) = occurrence else {
                continue;
            };
            let holiday = self.holiday_on(date);

            match policy.observed_date(date) {
                Some(observed_date) => {
                    if policy.mode() == SubstitutionMode::Add && date.year() == year {
                        holidays.push(holiday.clone());
                    }
                    if observed_date.year() == year {
                        holidays.push(holiday.observed_on(observed_date, policy.suffix()));
                    }
                },
                None => {
                    if date.year() == year {
                        holidays.push(holiday);
                    }
                }
            }
        }

        holidays.sort_by_key(Holiday::date);
        Ok(holidays)
    }
}
