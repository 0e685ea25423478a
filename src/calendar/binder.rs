use serde::Deserialize;

use super::date::CalendarDate;
use super::event::Event;

/// How a day's events are ordered once matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventOrder {
    /// Keep the order of the event collection.
    #[default]
    Collection,
    /// Stable sort by start time; ties keep collection order.
    StartTime,
}

impl EventOrder {
    pub fn toggled(self) -> Self {
        match self {
            Self::Collection => Self::StartTime,
            Self::StartTime => Self::Collection,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Collection => "collection order",
            Self::StartTime => "start time",
        }
    }
}

/// Events matched to one calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayBinding<'a> {
    pub events: Vec<&'a Event>,
    /// More than one event on the date. Same-day co-occurrence only;
    /// start and end times are not compared.
    pub has_conflict: bool,
}

impl DayBinding<'_> {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Select the events scheduled on `date`, in collection order.
pub fn bind_events(date: CalendarDate, events: &[Event]) -> DayBinding<'_> {
    let matched: Vec<&Event> = events.iter().filter(|ev| ev.date == date).collect();
    let has_conflict = matched.len() > 1;
    DayBinding {
        events: matched,
        has_conflict,
    }
}

pub fn bind_events_ordered(
    date: CalendarDate,
    events: &[Event],
    order: EventOrder,
) -> DayBinding<'_> {
    let mut binding = bind_events(date, events);
    if order == EventOrder::StartTime {
        binding.events.sort_by_key(|ev| ev.start_time);
    }
    binding
}
