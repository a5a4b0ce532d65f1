use chrono::{Datelike, NaiveDateTime};
use strum::{Display, EnumIter};

/// Quarter of the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
pub enum Quarter {
    Q1 = 1,
    Q2 = 2,
    Q3 = 3,
    Q4 = 4,
}

impl Quarter {
    /// Maps `1..=4` to a quarter; anything else is `None`.
    #[must_use]
    pub const fn of(value: i32) -> Option<Self> {
        match value {
            1 => Some(Self::Q1),
            2 => Some(Self::Q2),
            3 => Some(Self::Q3),
            4 => Some(Self::Q4),
            _ => None,
        }
    }

    #[must_use]
    pub const fn value(self) -> i32 {
        self as i32
    }

    /// Quarter containing the 1-based `month`.
    #[must_use]
    pub const fn from_month(month: u32) -> Option<Self> {
        match month {
            1..=12 => Self::of(((month - 1) / 3 + 1) as i32),
            _ => None,
        }
    }

    #[must_use]
    pub fn of_date(date: &NaiveDateTime) -> Self {
        match date.month() {
            1..=3 => Self::Q1,
            4..=6 => Self::Q2,
            7..=9 => Self::Q3,
            _ => Self::Q4,
        }
    }
}
