use std::collections::{BTreeSet, HashSet};

use chrono::NaiveDate;
use serde::{
    Deserialize,
    Serialize
};

use crate::holidayerror::{HolidayError, Result};
use crate::time::calendar::holidayset::HolidaySet;
use crate::time::holiday::holiday::{Holiday, HolidayCategory};
use crate::time::holiday::holidayrule::HolidayRule;

/// How a subdivision-scoped holiday sharing its date with a nationwide one
/// is reported.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
pub enum SubdivisionCollision {
    /// Both entries are kept.
    #[default]
    Separate,
    /// The nationwide entry stands for the date; the scoped one is dropped.
    Merge
}

/// All holiday rules of one jurisdiction.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct HolidayRuleSet {
    jurisdiction: String,
    #[serde(default)]
    subdivisions: BTreeSet<String>,
    rules: Vec<HolidayRule>,
    #[serde(default)]
    subdivision_collision: SubdivisionCollision
}

impl HolidayRuleSet {
    pub fn new<S, I, T>(jurisdiction: S, subdivisions: I, rules: Vec<HolidayRule>) -> Result<HolidayRuleSet>
    where
        S: Into<String>,
        I: IntoIterator<Item = T>,
        T: Into<String>
    {
        let rule_set = HolidayRuleSet {
            jurisdiction: jurisdiction.into(),
            subdivisions: subdivisions.into_iter().map(Into::into).collect(),
            rules,
            subdivision_collision: SubdivisionCollision::Separate
        };
        rule_set.validate()?;
        Ok(rule_set)
    }

    pub fn with_subdivision_collision(mut self, collision: SubdivisionCollision) -> HolidayRuleSet {
        self.subdivision_collision = collision;
        self
    }

    /// Checks every rule and that scoped rules only name supported
    /// subdivisions. Deserialized rule sets are not checked until this runs.
    pub fn validate(&self) -> Result<()> {
        if self.jurisdiction.is_empty() {
            return Err(HolidayError::invalid_rule("rule set without a jurisdiction code"));
        }
        for rule in self.rules.iter() {
            rule.validate()?;
            if let Some(code) = rule.subdivisions().difference(&self.subdivisions).next() {
                return Err(HolidayError::InvalidSubdivision {
                    jurisdiction: self.jurisdiction.clone(),
                    code: code.clone()
                });
            }
        }
        Ok(())
    }

    pub fn jurisdiction(&self) -> &str {
        &self.jurisdiction
    }

    pub fn rules(&self) -> &[HolidayRule] {
        &self.rules
    }

    pub fn subdivision_collision(&self) -> SubdivisionCollision {
        self.subdivision_collision
    }

    pub fn supported_subdivisions(&self) -> &BTreeSet<String> {
        &self.subdivisions
    }

    pub fn supported_categories(&self) -> BTreeSet<HolidayCategory> {
        let mut categories: BTreeSet<HolidayCategory> = self.rules
            .iter()
            .map(HolidayRule::category)
            .collect();
        if self.rules.iter().any(|rule| rule.observed().is_some()) {
            categories.insert(HolidayCategory::Observed);
        }
        categories
    }

    /// Normalizes a subdivision filter, rejecting codes the jurisdiction does
    /// not know. Codes are trimmed and matched ignoring ASCII case; the
    /// filter holds the jurisdiction's own spelling.
    pub fn check_subdivisions<I, S>(&self, subdivisions: I) -> Result<BTreeSet<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>
    {
        let mut filter = BTreeSet::new();
        for code in subdivisions {
            let code = code.as_ref();
            let Some(known) = self.subdivisions
                .iter()
                .find(|known| known.eq_ignore_ascii_case(code.trim())) else {
                return Err(HolidayError::InvalidSubdivision {
                    jurisdiction: self.jurisdiction.clone(),
                    code: code.to_owned()
                });
            };
            filter.insert(known.clone());
        }
        Ok(filter)
    }

    /// Evaluates the rules for `year`. An empty `filter` yields nationwide
    /// holidays only; otherwise holidays scoped to any code in `filter` are
    /// added.
    pub fn evaluate(&self, year: i32, filter: &BTreeSet<String>) -> Result<HolidaySet> {
        let mut holidays: Vec<Holiday> = Vec::with_capacity(self.rules.len() + 4);
        for rule in self.rules.iter().filter(|rule| rule.applies_to(filter)) {
            holidays.extend(rule.holidays_in(year)?);
        }

        let mut seen: HashSet<(NaiveDate, String)> = HashSet::with_capacity(holidays.len());
        holidays.retain(|holiday| seen.insert((holiday.date(), holiday.name().to_owned())));

        if self.subdivision_collision == SubdivisionCollision::Merge {
            let nationwide: HashSet<NaiveDate> = holidays
                .iter()
                .filter(|holiday| holiday.is_nationwide())
                .map(Holiday::date)
                .collect();
            holidays.retain(|holiday| holiday.is_nationwide() || !nationwide.contains(&holiday.date()));
        }

        Ok(HolidaySet::new(year, holidays))
    }
}
