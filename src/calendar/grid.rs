use tracing::debug;

use super::binder::{bind_events_ordered, EventOrder};
use super::date::CalendarDate;
use super::error::CalendarError;
use super::event::Event;
use super::month::ReferenceMonth;

/// One slot of a month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridCell {
    /// Padding before the 1st of the month.
    Blank,
    Day(DayCell),
}

impl GridCell {
    pub fn as_day(&self) -> Option<&DayCell> {
        match self {
            GridCell::Day(day) => Some(day),
            GridCell::Blank => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: CalendarDate,
    pub is_today: bool,
    pub events: Vec<Event>,
    pub has_conflict: bool,
}

/// The cells of one reference month: leading blanks then one cell per day.
///
/// No trailing blanks are included; renderers pad the last row themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    month: ReferenceMonth,
    cells: Vec<GridCell>,
}

impl MonthGrid {
    pub fn month(&self) -> ReferenceMonth {
        self.month
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn leading_blanks(&self) -> usize {
        self.cells
            .iter()
            .take_while(|cell| matches!(cell, GridCell::Blank))
            .count()
    }

    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter_map(GridCell::as_day)
    }

    /// The cell for day-of-month `day` (1-based).
    pub fn day(&self, day: u32) -> Option<&DayCell> {
        let idx = usize::try_from(day).ok()?.checked_sub(1)?;
        self.cells.get(self.leading_blanks() + idx)?.as_day()
    }

    pub fn cell_for(&self, date: CalendarDate) -> Option<&DayCell> {
        if !self.month.contains(date) {
            return None;
        }
        self.day(date.day())
    }

    pub fn conflict_days(&self) -> impl Iterator<Item = &DayCell> {
        self.days().filter(|day| day.has_conflict)
    }

    pub fn event_count(&self) -> usize {
        self.days().map(|day| day.events.len()).sum()
    }
}

/// Weekday of the 1st of `month`, Sunday = 0: the number of blank cells
/// placed before day 1.
pub fn leading_blanks(month: ReferenceMonth) -> Result<usize, CalendarError> {
    Ok(month.first_day()?.weekday_from_sunday() as usize)
}

/// Build the grid for `month`, marking `today` and binding `events` to each day.
///
/// Every call starts from scratch. If any day of the month cannot be
/// represented the whole build fails; no partial grid is returned.
pub fn build_grid(
    month: ReferenceMonth,
    today: CalendarDate,
    events: &[Event],
    order: EventOrder,
) -> Result<MonthGrid, CalendarError> {
    let blanks = leading_blanks(month)?;
    let days = month.days_in_month()?;

    let mut cells = Vec::with_capacity(blanks + days as usize);
    cells.resize(blanks, GridCell::Blank);

    for day in 1..=days {
        let date = CalendarDate::from_ymd(month.year(), month.month(), day)?;
        let binding = bind_events_ordered(date, events, order);
        cells.push(GridCell::Day(DayCell {
            date,
            is_today: date == today,
            has_conflict: binding.has_conflict,
            events: binding.events.into_iter().cloned().collect(),
        }));
    }

    debug!(
        %month,
        blanks,
        days,
        events = events.len(),
        "built month grid"
    );

    Ok(MonthGrid { month, cells })
}
