use std::collections::HashMap;
use std::sync::Arc;

use log::debug;

use crate::holidayerror::{HolidayError, Result};
use crate::jurisdiction::{germany, unitedkingdom, unitedstates};
use crate::time::calendar::holidayprovider::HolidayProvider;
use crate::time::holiday::holidayruleset::HolidayRuleSet;

fn normalize(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

/// Rule sets keyed by jurisdiction code. Lookups ignore case.
#[derive(Default, Clone)]
pub struct JurisdictionRegistry {
    rule_sets: HashMap<String, Arc<HolidayRuleSet>>
}

impl JurisdictionRegistry {
    pub fn new() -> JurisdictionRegistry {
        JurisdictionRegistry { rule_sets: HashMap::new() }
    }

    /// A registry holding the built-in tables (`US`, `GB`, `DE`).
    pub fn builtin() -> Result<JurisdictionRegistry> {
        let mut registry = JurisdictionRegistry::new();
        registry.register(unitedstates::rule_set()?)?;
        registry.register(unitedkingdom::rule_set()?)?;
        registry.register(germany::rule_set()?)?;
        Ok(registry)
    }

    /// Adds `rule_set` under its jurisdiction code, replacing any previous
    /// entry for that code.
    pub fn register(&mut self, rule_set: HolidayRuleSet) -> Result<()> {
        rule_set.validate()?;
        let code = normalize(rule_set.jurisdiction());
        debug!("registering jurisdiction {} with {} rules", code, rule_set.rules().len());
        self.rule_sets.insert(code, Arc::new(rule_set));
        Ok(())
    }

    /// Registers a rule set given as JSON.
    pub fn insert_from_json(&mut self, json_value: serde_json::Value) -> Result<()> {
        let rule_set: HolidayRuleSet = serde_json::from_value(json_value)?;
        self.register(rule_set)
    }

    pub fn get(&self, code: &str) -> Result<Arc<HolidayRuleSet>> {
        self.rule_sets
            .get(&normalize(code))
            .cloned()
            .ok_or_else(|| HolidayError::UnsupportedJurisdiction(code.to_owned()))
    }

    /// A fresh provider, with an empty cache, for `code`.
    pub fn provider(&self, code: &str) -> Result<Arc<HolidayProvider>> {
        Ok(Arc::new(HolidayProvider::from_shared(self.get(code)?)?))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.rule_sets.contains_key(&normalize(code))
    }

    /// Registered codes in sorted order.
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.rule_sets.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}
