use serde::{Deserialize, Serialize};

use super::date::{CalendarDate, ClockTime};

/// A scheduled single-day event.
///
/// `color` and `duration` are display hints carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: CalendarDate,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    pub color: String,
    pub duration: String,
}

impl Event {
    pub fn time_range_display(&self) -> String {
        format!("{} - {}", self.start_time, self.end_time)
    }

    pub fn ends_after_start(&self) -> bool {
        self.start_time < self.end_time
    }
}
