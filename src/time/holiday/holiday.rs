use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::NaiveDate;
use serde::{
    Deserialize,
    Serialize
};

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayCategory {
    #[default]
    Public,
    Bank,
    Religious,
    Observance,
    Optional,
    Observed
}

impl fmt::Display for HolidayCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            HolidayCategory::Public => "public",
            HolidayCategory::Bank => "bank",
            HolidayCategory::Religious => "religious",
            HolidayCategory::Observance => "observance",
            HolidayCategory::Optional => "optional",
            HolidayCategory::Observed => "observed"
        };
        write!(f, "{}", tag)
    }
}

/// One concrete holiday occurrence produced by evaluating a rule for a year.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Holiday {
    date: NaiveDate,
    name: String,
    #[serde(default)]
    names: BTreeMap<String, String>,
    category: HolidayCategory,
    #[serde(default)]
    subdivisions: BTreeSet<String>,
    #[serde(default)]
    observed: bool
}

impl Holiday {
    pub fn new(date: NaiveDate,
               name: String,
               names: BTreeMap<String, String>,
               category: HolidayCategory,
               subdivisions: BTreeSet<String>) -> Holiday {
        Holiday { date, name, names, category, subdivisions, observed: false }
    }

    /// The substitute occurrence of `self` on `date`, tagged as observed.
    pub fn observed_on(&self, date: NaiveDate, suffix: &str) -> Holiday {
        let names = self.names
            .iter()
            .map(|(lang, name)| (lang.clone(), format!("{}{}", name, suffix)))
            .collect();
        Holiday {
            date,
            name: format!("{}{}", self.name, suffix),
            names,
            category: HolidayCategory::Observed,
            subdivisions: self.subdivisions.clone(),
            observed: true
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn names(&self) -> &BTreeMap<String, String> {
        &self.names
    }

    /// Name in `lang`, falling back to the canonical name.
    pub fn localized_name(&self, lang: &str) -> &str {
        self.names.get(lang).map(String::as_str).unwrap_or(&self.name)
    }

    pub fn category(&self) -> HolidayCategory {
        self.category
    }

    /// Region codes the holiday is restricted to; empty means nationwide.
    pub fn subdivisions(&self) -> &BTreeSet<String> {
        &self.subdivisions
    }

    pub fn is_nationwide(&self) -> bool {
        self.subdivisions.is_empty()
    }

    pub fn is_observed(&self) -> bool {
        self.observed
    }
}

impl fmt::Display for Holiday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} [{}]", self.date, self.name, self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn independence_day() -> Holiday {
        let mut names = BTreeMap::new();
        names.insert("es".to_owned(), "Día de la Independencia".to_owned());
        Holiday::new(
            NaiveDate::from_ymd_opt(2021, 7, 4).unwrap(),
            "Independence Day".to_owned(),
            names,
            HolidayCategory::Public,
            BTreeSet::new()
        )
    }

    #[test]
    fn test_localized_name_falls_back_to_canonical() {
        let holiday = independence_day();
        assert_eq!(holiday.localized_name("es"), "Día de la Independencia");
        assert_eq!(holiday.localized_name("fr"), "Independence Day");
        assert!(holiday.is_nationwide());
    }

    #[test]
    fn test_category_defaults_to_public() {
        assert_eq!(HolidayCategory::default(), HolidayCategory::Public);
        let category: HolidayCategory = serde_json::from_str("\"bank\"").unwrap();
        assert_eq!(category, HolidayCategory::Bank);
    }

    #[test]
    fn test_observed_variant() {
        let holiday = independence_day();
        let observed = holiday.observed_on(NaiveDate::from_ymd_opt(2021, 7, 5).unwrap(), " (observed)");
        assert_eq!(observed.name(), "Independence Day (observed)");
        assert_eq!(observed.localized_name("es"), "Día de la Independencia (observed)");
        assert_eq!(observed.category(), HolidayCategory::Observed);
        assert!(observed.is_observed());
        assert!(!holiday.is_observed());
    }
}
