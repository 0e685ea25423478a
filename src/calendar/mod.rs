pub mod binder;
pub mod clock;
pub mod date;
pub mod error;
pub mod event;
pub mod grid;
pub mod month;
pub mod store;

pub use binder::{bind_events, bind_events_ordered, DayBinding, EventOrder};
pub use clock::{Clock, FixedClock, SystemClock};
pub use date::{days_in_month, is_leap_year, CalendarDate, ClockTime};
pub use error::CalendarError;
pub use event::Event;
pub use grid::{build_grid, leading_blanks, DayCell, GridCell, MonthGrid};
pub use month::{Direction, ReferenceMonth};
pub use store::EventStore;
