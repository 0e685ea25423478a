use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::CalendarError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Years with a four-digit `YYYY-MM-DD` form.
pub const YEAR_RANGE: RangeInclusive<i32> = 0..=9999;

/// A proleptic Gregorian calendar date in years 0 through 9999.
///
/// The canonical form is the zero-padded `YYYY-MM-DD` string. Equality and
/// ordering agree with equality and ordering of canonical strings, so two
/// dates match exactly when their canonical strings do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(Self::in_range)
            .ok_or_else(|| CalendarError::InvalidDate {
                input: format!("{year:04}-{month:02}-{day:02}"),
            })
    }

    /// Parse a canonical `YYYY-MM-DD` string.
    ///
    /// Anything that is not a real date, or not written in canonical form
    /// (`2025-6-1`, `10000-01-01`, trailing text), is rejected.
    pub fn parse(input: &str) -> Result<Self, CalendarError> {
        let invalid = || CalendarError::InvalidDate {
            input: input.to_string(),
        };
        let date = NaiveDate::parse_from_str(input, DATE_FORMAT)
            .ok()
            .and_then(Self::in_range)
            .ok_or_else(invalid)?;
        if date.canonical() != input {
            return Err(invalid());
        }
        Ok(date)
    }

    fn in_range(date: NaiveDate) -> Option<Self> {
        YEAR_RANGE.contains(&date.year()).then_some(Self(date))
    }

    pub fn canonical(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month number, January = 1.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Weekday index with Sunday = 0 through Saturday = 6.
    pub fn weekday_from_sunday(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    /// Move by a signed number of days. `None` past either end of the year range.
    pub fn offset_days(&self, days: i64) -> Option<Self> {
        let magnitude = Days::new(days.unsigned_abs());
        let moved = if days >= 0 {
            self.0.checked_add_days(magnitude)
        } else {
            self.0.checked_sub_days(magnitude)
        };
        moved.and_then(Self::in_range)
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = CalendarError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.canonical()
    }
}

/// A 24-hour wall-clock time with minute precision, written `HH:MM`.
///
/// Ordering is chronological, which is also the lexical order of the
/// zero-padded form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    pub fn parse(input: &str) -> Result<Self, CalendarError> {
        let invalid = || CalendarError::InvalidTime {
            input: input.to_string(),
        };
        let (h, m) = input.split_once(':').ok_or_else(invalid)?;
        let hour = two_digits(h).ok_or_else(invalid)?;
        let minute = two_digits(m).ok_or_else(invalid)?;
        Self::new(hour, minute).ok_or_else(invalid)
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }
}

fn two_digits(s: &str) -> Option<u8> {
    if s.len() != 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = CalendarError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

/// Gregorian leap-year rule: divisible by 4, except centuries not divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-based) of `year`.
///
/// Taken as the day number of the day before the first of the following month.
/// December is always 31 and never looks at the next year.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, CalendarError> {
    let invalid = || CalendarError::InvalidMonth { year, month };
    match month {
        12 => NaiveDate::from_ymd_opt(year, 12, 31)
            .map(|last| last.day())
            .ok_or_else(invalid),
        1..=11 => NaiveDate::from_ymd_opt(year, month + 1, 1)
            .and_then(|first| first.pred_opt())
            .map(|last| last.day())
            .ok_or_else(invalid),
        _ => Err(invalid()),
    }
}
