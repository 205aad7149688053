use std::borrow::Cow;
use std::collections::HashMap;

use chrono::{
    Datelike,
    NaiveDate,
    Weekday
};
use serde::{
    Serialize,
    Deserialize
};

use crate::time::calendarmath::add_days;

pub const OBSERVED_SUFFIX: &str = " (observed)";

/// Whether the observed date is emitted next to the original occurrence or
/// takes its place.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
pub enum SubstitutionMode {
    #[default]
    Add,
    Replace
}

/// Observed-date substitution for a holiday falling on a trigger weekday.
///
/// Shifts are kept in an array indexed by `Weekday::num_days_from_monday()`,
/// `None` meaning the weekday does not trigger a substitution.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(from = "ObservedPolicyProp", into = "ObservedPolicyProp")]
pub struct ObservedPolicy {
    shifts: [Option<i32>; 7],
    mode: SubstitutionMode,
    suffix: Cow<'static, str>
}

impl ObservedPolicy {
    pub const fn from_shifts(shifts: [Option<i32>; 7],
                             mode: SubstitutionMode,
                             suffix: &'static str) -> ObservedPolicy {
        ObservedPolicy { shifts, mode, suffix: Cow::Borrowed(suffix) }
    }

    /// Saturday observed on Friday, Sunday observed on Monday.
    pub const fn nearest_weekday(mode: SubstitutionMode) -> ObservedPolicy {
        ObservedPolicy::from_shifts(
            [None, None, None, None, None, Some(-1), Some(1)],
            mode,
            OBSERVED_SUFFIX
        )
    }

    /// Saturday and Sunday both observed on the following Monday.
    pub const fn following_monday(mode: SubstitutionMode) -> ObservedPolicy {
        ObservedPolicy::from_shifts(
            [None, None, None, None, None, Some(2), Some(1)],
            mode,
            OBSERVED_SUFFIX
        )
    }

    pub fn mode(&self) -> SubstitutionMode {
        self.mode
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    #[inline]
    pub fn shift_for(&self, weekday: Weekday) -> Option<i32> {
        self.shifts[weekday.num_days_from_monday() as usize]
    }

    /// The substitute date for `d`, or `None` when `d` does not fall on a
    /// trigger weekday.
    pub fn observed_date(&self, d: NaiveDate) -> Option<NaiveDate> {
        match self.shift_for(d.weekday()) {
            Some(days) if days != 0 => add_days(d, days as i64).ok(),
            _ => None
        }
    }
}

#[derive(Serialize, Deserialize)]
struct ObservedPolicyProp {
    shifts: HashMap<Weekday, i32>,
    #[serde(default)]
    mode: SubstitutionMode,
    #[serde(default = "default_suffix")]
    suffix: String
}

fn default_suffix() -> String {
    OBSERVED_SUFFIX.to_owned()
}

impl From<ObservedPolicyProp> for ObservedPolicy {
    fn from(prop: ObservedPolicyProp) -> Self {
        let mut shifts: [Option<i32>; 7] = [None; 7];
        for (weekday, days) in prop.shifts {
            shifts[weekday.num_days_from_monday() as usize] = Some(days);
        }
        ObservedPolicy { shifts, mode: prop.mode, suffix: Cow::Owned(prop.suffix) }
    }
}

impl From<ObservedPolicy> for ObservedPolicyProp {
    fn from(policy: ObservedPolicy) -> Self {
        let shifts = policy.shifts
            .iter()
            .enumerate()
            .filter_map(|(idx, shift)| {
                let weekday = Weekday::try_from(idx as u8).ok()?;
                shift.map(|days| (weekday, days))
            })
            .collect();
        ObservedPolicyProp { shifts, mode: policy.mode, suffix: policy.suffix.into_owned() }
    }
}
