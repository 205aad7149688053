use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{Datelike, NaiveDate};
use log::{debug, trace};

use crate::holidayerror::Result;
use crate::time::calendar::holidayset::HolidaySet;
use crate::time::holiday::holiday::{Holiday, HolidayCategory};
use crate::time::holiday::holidayruleset::HolidayRuleSet;

#[derive(PartialEq, Eq, Hash, Clone, Debug)]
struct YearKey {
    year: i32,
    // sorted, so the key does not depend on the caller's ordering
    subdivisions: Vec<String>
}

/// Evaluates a jurisdiction's rule set per year and memoizes the result.
///
/// The cache lives as long as the provider and is never evicted; a year set
/// holds a few dozen entries at most. Concurrent callers share the cache
/// through an `RwLock`, and a missing year is evaluated under the write lock
/// so each key is computed once.
pub struct HolidayProvider {
    rule_set: Arc<HolidayRuleSet>,
    cache: RwLock<HashMap<YearKey, Arc<HolidaySet>>>
}

impl HolidayProvider {
    pub fn new(rule_set: HolidayRuleSet) -> Result<HolidayProvider> {
        HolidayProvider::from_shared(Arc::new(rule_set))
    }

    pub fn from_shared(rule_set: Arc<HolidayRuleSet>) -> Result<HolidayProvider> {
        rule_set.validate()?;
        Ok(HolidayProvider {
            rule_set,
            cache: RwLock::new(HashMap::new())
        })
    }

    pub fn rule_set(&self) -> &HolidayRuleSet {
        &self.rule_set
    }

    pub fn jurisdiction(&self) -> &str {
        self.rule_set.jurisdiction()
    }

    /// Nationwide holidays of `year`.
    pub fn load_holidays(&self, year: i32) -> Result<Arc<HolidaySet>> {
        self.cached_or_evaluate(YearKey { year, subdivisions: Vec::new() })
    }

    /// Nationwide holidays of `year` plus those scoped to any of
    /// `subdivisions`. Unknown codes are rejected.
    pub fn holidays_with_subdivisions<I, S>(&self, year: i32, subdivisions: I) -> Result<Arc<HolidaySet>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>
    {
        let filter = self.rule_set.check_subdivisions(subdivisions)?;
        self.cached_or_evaluate(YearKey { year, subdivisions: filter.into_iter().collect() })
    }

    /// The first nationwide holiday on `d`, if any.
    pub fn is_holiday(&self, d: NaiveDate) -> Result<Option<Holiday>> {
        Ok(self.load_holidays(d.year())?.get(&d).cloned())
    }

    /// Every holiday in `[start, end]` in date order, for the given
    /// subdivision filter.
    pub fn holidays_between<I, S>(&self, start: NaiveDate, end: NaiveDate, subdivisions: I) -> Result<Vec<Holiday>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>
    {
        let filter: Vec<String> = self.rule_set.check_subdivisions(subdivisions)?.into_iter().collect();
        let mut holidays = Vec::new();
        if end < start {
            return Ok(holidays);
        }
        for year in start.year()..=end.year() {
            let set = self.holidays_with_subdivisions(year, &filter)?;
            holidays.extend(
                set.iter()
                    .filter(|holiday| holiday.date() >= start && holiday.date() <= end)
                    .cloned()
            );
        }
        Ok(holidays)
    }

    pub fn supported_subdivisions(&self) -> &BTreeSet<String> {
        self.rule_set.supported_subdivisions()
    }

    pub fn supported_categories(&self) -> BTreeSet<HolidayCategory> {
        self.rule_set.supported_categories()
    }

    /// Number of (year, filter) entries evaluated so far.
    pub fn cached_len(&self) -> usize {
        self.cache.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    fn cached_or_evaluate(&self, key: YearKey) -> Result<Arc<HolidaySet>> {
        // Cached sets are immutable once inserted, so a poisoned lock still
        // guards consistent data.
        if let Some(set) = self.cache.read().unwrap_or_else(PoisonError::into_inner).get(&key) {
            trace!("{} {} {:?}: cache hit", self.jurisdiction(), key.year, key.subdivisions);
            return Ok(Arc::clone(set));
        }

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(set) = cache.get(&key) {
            return Ok(Arc::clone(set));
        }

        let filter: BTreeSet<String> = key.subdivisions.iter().cloned().collect();
        let set = Arc::new(self.rule_set.evaluate(key.year, &filter)?);
        debug!(
            "{} {} {:?}: evaluated {} holidays",
            self.jurisdiction(), key.year, key.subdivisions, set.len()
        );
        cache.insert(key, Arc::clone(&set));
        Ok(set)
    }
}
