//! Month-view calendar core.
//!
//! Builds the cells of a month grid (leading blanks for weekday alignment plus
//! one cell per day) and binds a static event collection onto them, flagging
//! days on which more than one event is scheduled.

pub mod calendar;

pub use calendar::{
    bind_events, bind_events_ordered, build_grid, days_in_month, is_leap_year, leading_blanks,
    CalendarDate, CalendarError, Clock, ClockTime, DayBinding, DayCell, Direction, Event,
    EventOrder, EventStore, FixedClock, GridCell, MonthGrid, ReferenceMonth, SystemClock,
};
