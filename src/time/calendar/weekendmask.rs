use std::collections::HashSet;

use chrono::Weekday;
use serde::{
    Deserialize,
    Serialize
};

/// Weekend days as a bitmask, bit `n` standing for the weekday with
/// `num_days_from_monday() == n`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(from = "HashSet<Weekday>", into = "HashSet<Weekday>")]
pub struct WeekendMask(u8);

impl WeekendMask {
    pub const FULL_WEEK: u8 = 0b0111_1111;

    pub fn new<I: IntoIterator<Item = Weekday>>(weekends: I) -> Self {
        let mut mask = 0u8;
        for weekday in weekends {
            mask |= 1u8 << weekday.num_days_from_monday();
        }
        WeekendMask(mask)
    }

    pub fn saturday_sunday() -> Self {
        WeekendMask::new([Weekday::Sat, Weekday::Sun])
    }

    #[inline]
    pub fn is_weekend(&self, weekday: Weekday) -> bool {
        let bit = 1u8 << weekday.num_days_from_monday();
        (self.0 & bit) != 0
    }

    pub fn covers_full_week(&self) -> bool {
        self.0 & Self::FULL_WEEK == Self::FULL_WEEK
    }

    pub fn weekend_list(&self) -> Vec<Weekday> {
        let mut weekdays = Vec::with_capacity(7);
        for day in 0..7 {
            if (self.0 & (1u8 << day)) != 0 {
                if let Ok(weekday) = Weekday::try_from(day as u8) {
                    weekdays.push(weekday);
                }
            }
        }
        weekdays
    }

    pub fn to_hashset(&self) -> HashSet<Weekday> {
        self.weekend_list().into_iter().collect()
    }
}

impl Default for WeekendMask {
    fn default() -> Self {
        WeekendMask::saturday_sunday()
    }
}

impl From<HashSet<Weekday>> for WeekendMask {
    fn from(weekends: HashSet<Weekday>) -> Self {
        WeekendMask::new(weekends)
    }
}

impl From<WeekendMask> for HashSet<Weekday> {
    fn from(mask: WeekendMask) -> Self {
        mask.to_hashset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_saturday_sunday() {
        let mask = WeekendMask::default();
        assert!(mask.is_weekend(Weekday::Sat));
        assert!(mask.is_weekend(Weekday::Sun));
        assert!(!mask.is_weekend(Weekday::Fri));
        assert_eq!(mask.weekend_list(), vec![Weekday::Sat, Weekday::Sun]);
    }

    #[test]
    fn test_full_week() {
        let all = WeekendMask::new([
            Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu,
            Weekday::Fri, Weekday::Sat, Weekday::Sun
        ]);
        assert!(all.covers_full_week());
        assert!(!WeekendMask::default().covers_full_week());
        assert!(!WeekendMask::new(Vec::<Weekday>::new()).covers_full_week());
    }

    #[test]
    fn test_serde_as_weekday_list() {
        let mask: WeekendMask = serde_json::from_str(r#"["Fri", "Sat"]"#).unwrap();
        assert_eq!(mask, WeekendMask::new([Weekday::Fri, Weekday::Sat]));
    }
}
