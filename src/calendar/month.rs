use std::fmt;
use std::str::FromStr;

use super::date::{days_in_month, CalendarDate};
use super::error::CalendarError;

/// Direction of a one-month navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// The (year, month) pair currently displayed. Months are numbered from 1.
///
/// Navigation never mutates a value in place: `next`, `prev` and `navigate`
/// return the neighbouring month, rolling over year boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReferenceMonth {
    year: i32,
    month: u32,
}

impl ReferenceMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        days_in_month(year, month)?;
        CalendarDate::from_ymd(year, month, 1)
            .map_err(|_| CalendarError::InvalidMonth { year, month })?;
        Ok(Self { year, month })
    }

    /// The month a date falls in.
    pub fn containing(date: CalendarDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month number, January = 1.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Zero-based month index, January = 0.
    pub fn month0(&self) -> u32 {
        self.month - 1
    }

    pub fn first_day(&self) -> Result<CalendarDate, CalendarError> {
        CalendarDate::from_ymd(self.year, self.month, 1)
    }

    pub fn days_in_month(&self) -> Result<u32, CalendarError> {
        days_in_month(self.year, self.month)
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year.saturating_add(1),
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year.saturating_sub(1),
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn navigate(self, direction: Direction) -> Self {
        match direction {
            Direction::Previous => self.prev(),
            Direction::Next => self.next(),
        }
    }
}

impl fmt::Display for ReferenceMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for ReferenceMonth {
    type Err = CalendarError;

    /// Parses `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CalendarError::InvalidDate {
            input: s.to_string(),
        };
        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if month.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}
