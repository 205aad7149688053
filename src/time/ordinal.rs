use std::fmt;

use serde::{Deserialize, Serialize};

use crate::holidayerror::HolidayError;

/// Position of a weekday inside a month: the 1st..5th occurrence, or the last.
///
/// Serialized as a signed integer, `-1` standing for `Last`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum Ordinal {
    Nth(u8),
    Last,
}

impl Ordinal {
    pub fn first() -> Ordinal {
        Ordinal::Nth(1)
    }

    pub fn second() -> Ordinal {
        Ordinal::Nth(2)
    }

    pub fn third() -> Ordinal {
        Ordinal::Nth(3)
    }

    pub fn fourth() -> Ordinal {
        Ordinal::Nth(4)
    }

    pub fn fifth() -> Ordinal {
        Ordinal::Nth(5)
    }
}

impl TryFrom<i8> for Ordinal {
    type Error = HolidayError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Ordinal::Last),
            1..=5 => Ok(Ordinal::Nth(value as u8)),
            _ => Err(HolidayError::invalid_rule(format!(
                "ordinal {value} is outside 1..=5 and is not -1 (last)"
            ))),
        }
    }
}

impl From<Ordinal> for i8 {
    fn from(ordinal: Ordinal) -> i8 {
        match ordinal {
            Ordinal::Nth(n) => n as i8,
            Ordinal::Last => -1,
        }
    }
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ordinal::Nth(1) => write!(f, "1st"),
            Ordinal::Nth(2) => write!(f, "2nd"),
            Ordinal::Nth(3) => write!(f, "3rd"),
            Ordinal::Nth(n) => write!(f, "{}th", n),
            Ordinal::Last => write!(f, "last"),
        }
    }
}
