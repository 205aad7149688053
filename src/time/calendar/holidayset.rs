use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::time::holiday::holiday::Holiday;

/// The holidays of one year, keyed by date.
///
/// Several holidays may share a date; they keep the order of the rules that
/// produced them.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct HolidaySet {
    year: i32,
    entries: BTreeMap<NaiveDate, Vec<Holiday>>
}

impl HolidaySet {
    pub fn new(year: i32, holidays: Vec<Holiday>) -> HolidaySet {
        let mut entries: BTreeMap<NaiveDate, Vec<Holiday>> = BTreeMap::new();
        for holiday in holidays {
            entries.entry(holiday.date()).or_default().push(holiday);
        }
        HolidaySet { year, entries }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub fn contains(&self, d: &NaiveDate) -> bool {
        self.entries.contains_key(d)
    }

    /// The first holiday on `d`.
    pub fn get(&self, d: &NaiveDate) -> Option<&Holiday> {
        self.entries.get(d).and_then(|holidays| holidays.first())
    }

    pub fn holidays_on(&self, d: &NaiveDate) -> &[Holiday] {
        self.entries.get(d).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.entries.keys().copied()
    }

    /// All holidays in date order.
    pub fn iter(&self) -> impl Iterator<Item = &Holiday> + '_ {
        self.entries.values().flatten()
    }

    /// Number of holidays, counting each entry on a shared date.
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn date_count(&self) -> usize {
        self.entries.len()
    }
}
