use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use serde::{
    Deserialize,
    Serialize
};

use crate::holidayerror::Result;
use crate::jurisdiction::registry::JurisdictionRegistry;
use crate::time::calendar::businessdaycalculator::BusinessDayCalculator;
use crate::time::calendar::holidayprovider::HolidayProvider;
use crate::time::calendar::weekendmask::WeekendMask;
use crate::time::holiday::holidayruleset::HolidayRuleSet;

/// Everything needed to set up one business-day calculator.
///
/// ```json
/// {
///     "jurisdiction": "US",
///     "subdivisions": ["NY"],
///     "weekends": ["Sat", "Sun"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfiguration {
    jurisdiction: String,
    #[serde(default)]
    subdivisions: Vec<String>,
    #[serde(default)]
    weekends: WeekendMask,
    #[serde(default)]
    rule_sets: Vec<HolidayRuleSet>
}

impl CalendarConfiguration {
    pub fn new<S: Into<String>>(jurisdiction: S) -> CalendarConfiguration {
        CalendarConfiguration {
            jurisdiction: jurisdiction.into(),
            subdivisions: Vec::new(),
            weekends: WeekendMask::default(),
            rule_sets: Vec::new()
        }
    }

    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<CalendarConfiguration> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json_value(json_value: serde_json::Value) -> Result<CalendarConfiguration> {
        Ok(serde_json::from_value(json_value)?)
    }

    pub fn with_subdivisions<I, S>(mut self, subdivisions: I) -> CalendarConfiguration
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        self.subdivisions = subdivisions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_weekends(mut self, weekends: WeekendMask) -> CalendarConfiguration {
        self.weekends = weekends;
        self
    }

    pub fn with_rule_set(mut self, rule_set: HolidayRuleSet) -> CalendarConfiguration {
        self.rule_sets.push(rule_set);
        self
    }

    pub fn jurisdiction(&self) -> &str {
        &self.jurisdiction
    }

    pub fn subdivisions(&self) -> &[String] {
        &self.subdivisions
    }

    pub fn weekends(&self) -> WeekendMask {
        self.weekends
    }

    /// Resolves the jurisdiction against `registry` plus this configuration's
    /// own rule sets, which take precedence over registered ones of the same
    /// code. `registry` itself is left unchanged.
    pub fn build(&self, registry: &JurisdictionRegistry) -> Result<(Arc<HolidayProvider>, BusinessDayCalculator)> {
        let provider = if self.rule_sets.is_empty() {
            registry.provider(&self.jurisdiction)?
        } else {
            let mut registry = registry.clone();
            for rule_set in &self.rule_sets {
                registry.register(rule_set.clone())?;
            }
            registry.provider(&self.jurisdiction)?
        };

        let mut calculator = BusinessDayCalculator::with_subdivisions(Arc::clone(&provider), &self.subdivisions)?;
        calculator.set_weekends(self.weekends.weekend_list())?;
        Ok((provider, calculator))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Weekday};

    use super::*;
    use crate::holidayerror::HolidayError;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = CalendarConfiguration::from_json_value(serde_json::json!({ "jurisdiction": "US" })).unwrap();
        assert_eq!(config, CalendarConfiguration::new("US"));
        assert!(config.subdivisions().is_empty());
        assert_eq!(config.weekends(), WeekendMask::saturday_sunday());
    }

    #[test]
    fn test_build_with_subdivisions_and_weekends() {
        let config = CalendarConfiguration::from_json_value(serde_json::json!({
            "jurisdiction": "us",
            "subdivisions": ["MA"],
            "weekends": ["Fri", "Sat"]
        })).unwrap();
        let registry = JurisdictionRegistry::builtin().unwrap();
        let (provider, calculator) = config.build(&registry).unwrap();
        assert_eq!(provider.jurisdiction(), "US");
        // Patriots' Day, a Monday
        assert!(!calculator.is_business_day(ymd(2024, 4, 15)).unwrap());
        // Sunday is a working day under a Friday/Saturday weekend
        assert!(calculator.is_business_day(ymd(2024, 4, 14)).unwrap());
        assert!(!calculator.is_business_day(ymd(2024, 4, 12)).unwrap());
    }

    #[test]
    fn test_custom_rule_set_overrides_builtin() {
        let config = CalendarConfiguration::from_json_value(serde_json::json!({
            "jurisdiction": "DE",
            "rule_sets": [{
                "jurisdiction": "DE",
                "rules": [
                    {"name": "Company Day", "date_rule": {"holiday_type": "FixedDate", "month": 6, "day": 12}}
                ]
            }]
        })).unwrap();
        let registry = JurisdictionRegistry::builtin().unwrap();
        let (provider, calculator) = config.build(&registry).unwrap();
        assert_eq!(provider.rule_set().rules().len(), 1);
        assert!(!calculator.is_business_day(ymd(2024, 6, 12)).unwrap());
        assert!(calculator.is_business_day(ymd(2024, 10, 3)).unwrap());
        // the shared registry keeps its built-in table
        assert!(registry.get("DE").unwrap().rules().len() > 1);
    }

    #[test]
    fn test_build_errors() {
        let registry = JurisdictionRegistry::builtin().unwrap();
        assert!(matches!(
            CalendarConfiguration::new("FR").build(&registry),
            Err(HolidayError::UnsupportedJurisdiction(_))
        ));
        assert!(matches!(
            CalendarConfiguration::new("GB").with_subdivisions(["XYZ"]).build(&registry),
            Err(HolidayError::InvalidSubdivision { .. })
        ));
        let all = WeekendMask::new([
            Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu,
            Weekday::Fri, Weekday::Sat, Weekday::Sun
        ]);
        assert!(matches!(
            CalendarConfiguration::new("GB").with_weekends(all).build(&registry),
            Err(HolidayError::FullWeekend)
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            CalendarConfiguration::from_reader("/nonexistent/calendar.json"),
            Err(HolidayError::Io(_))
        ));
    }
}
