use calendar_grid::{
    build_grid, CalendarDate, CalendarError, Clock, DayCell, Direction, EventOrder, EventStore,
    MonthGrid, ReferenceMonth,
};
use tracing::{debug, info, warn};

use crate::event::Action;
use crate::theme::Theme;

/// Controller state. Owns the reference month; every change of month
/// rebuilds the grid from scratch.
pub struct App {
    pub running: bool,
    pub month: ReferenceMonth,
    pub selected_date: CalendarDate,
    pub today: CalendarDate,
    pub order: EventOrder,
    pub grid: Option<MonthGrid>,
    pub render_error: Option<String>,
    pub status_message: Option<String>,
    pub show_help: bool,
    pub show_detail: bool,
    pub event_cursor: usize,
    pub theme: Theme,
    store: EventStore,
    clock: Box<dyn Clock>,
}

impl App {
    pub fn new(
        store: EventStore,
        clock: Box<dyn Clock>,
        month: Option<ReferenceMonth>,
        order: EventOrder,
        theme: Theme,
    ) -> Self {
        let today = clock.today();
        let month = month.unwrap_or_else(|| ReferenceMonth::containing(today));
        let selected_date = if month.contains(today) {
            today
        } else {
            month.first_day().unwrap_or(today)
        };

        let mut app = Self {
            running: true,
            month,
            selected_date,
            today,
            order,
            grid: None,
            render_error: None,
            status_message: None,
            show_help: false,
            show_detail: false,
            event_cursor: 0,
            theme,
            store,
            clock,
        };
        app.rebuild();
        app
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    /// Rebuild the grid for the current month. On failure no grid is kept.
    pub fn rebuild(&mut self) {
        match build_grid(self.month, self.today, self.store.events(), self.order) {
            Ok(grid) => {
                self.grid = Some(grid);
                self.render_error = None;
            }
            Err(err) => {
                warn!(month = %self.month, error = %err, "failed to build month grid");
                self.grid = None;
                self.render_error = Some(err.to_string());
            }
        }
        self.event_cursor = 0;
        self.show_detail = false;
    }

    pub fn selected_day(&self) -> Option<&DayCell> {
        self.grid.as_ref()?.cell_for(self.selected_date)
    }

    pub fn handle(&mut self, action: Action) {
        // Help overlay takes priority
        if self.show_help {
            if matches!(action, Action::Close | Action::ToggleHelp) {
                self.show_help = false;
            } else if action == Action::Quit {
                self.running = false;
            }
            return;
        }

        // Detail popup takes priority
        if self.show_detail {
            if action == Action::Close {
                self.show_detail = false;
            }
            return;
        }

        self.status_message = None;
        match action {
            Action::Quit | Action::Close => self.running = false,
            Action::PrevMonth => self.navigate(Direction::Previous),
            Action::NextMonth => self.navigate(Direction::Next),
            Action::PrevDay => self.move_selection(-1),
            Action::NextDay => self.move_selection(1),
            Action::PrevWeek => self.move_selection(-7),
            Action::NextWeek => self.move_selection(7),
            Action::Today => self.go_to_today(),
            Action::ToggleOrder => self.toggle_order(),
            Action::NextEvent => self.cycle_event(true),
            Action::PrevEvent => self.cycle_event(false),
            Action::ShowDetail => {
                self.show_detail = self
                    .selected_day()
                    .is_some_and(|day| self.event_cursor < day.events.len());
            }
            Action::ToggleHelp => self.show_help = true,
        }
    }

    /// Step the reference month, keeping the selected day-of-month where the
    /// new month is long enough.
    pub fn navigate(&mut self, direction: Direction) {
        let month = self.month.navigate(direction);
        debug!(from = %self.month, to = %month, "navigate");
        self.month = month;
        match clamp_day(month, self.selected_date.day()) {
            Ok(date) => self.selected_date = date,
            Err(err) => warn!(month = %month, error = %err, "no selectable day"),
        }
        self.rebuild();
    }

    pub fn go_to_today(&mut self) {
        self.today = self.clock.today();
        self.selected_date = self.today;
        self.month = ReferenceMonth::containing(self.today);
        info!(today = %self.today, "jump to today");
        self.rebuild();
    }

    pub fn toggle_order(&mut self) {
        self.order = self.order.toggled();
        self.status_message = Some(format!("Events ordered by {}", self.order.label()));
        self.rebuild();
    }

    fn move_selection(&mut self, days: i64) {
        let Some(date) = self.selected_date.offset_days(days) else {
            return;
        };
        self.selected_date = date;
        if self.month.contains(date) {
            self.event_cursor = 0;
        } else {
            self.month = ReferenceMonth::containing(date);
            self.rebuild();
        }
    }

    fn cycle_event(&mut self, forward: bool) {
        let count = self.selected_day().map_or(0, |day| day.events.len());
        if count == 0 {
            return;
        }
        self.event_cursor = if forward {
            (self.event_cursor + 1) % count
        } else {
            (self.event_cursor + count - 1) % count
        };
    }
}

fn clamp_day(month: ReferenceMonth, day: u32) -> Result<CalendarDate, CalendarError> {
    let last = month.days_in_month()?;
    CalendarDate::from_ymd(month.year(), month.month(), day.min(last))
}

#[cfg(test)]
mod tests {
    use calendar_grid::FixedClock;

    use super::*;

    fn date(s: &str) -> CalendarDate {
        CalendarDate::parse(s).unwrap()
    }

    fn app_at(today: &str) -> App {
        App::new(
            EventStore::sample().unwrap(),
            Box::new(FixedClock(date(today))),
            None,
            EventOrder::Collection,
            Theme::default(),
        )
    }

    #[test]
    fn opens_on_the_month_containing_today() {
        let app = app_at("2025-06-13");
        assert_eq!(app.month, ReferenceMonth::new(2025, 6).unwrap());
        assert_eq!(app.selected_date, date("2025-06-13"));
        let day = app.selected_day().unwrap();
        assert!(day.is_today);
        assert!(day.has_conflict);
        assert_eq!(day.events.len(), 3);
    }

    #[test]
    fn explicit_month_selects_its_first_day() {
        let app = App::new(
            EventStore::default(),
            Box::new(FixedClock(date("2025-06-13"))),
            Some(ReferenceMonth::new(2024, 2).unwrap()),
            EventOrder::Collection,
            Theme::default(),
        );
        assert_eq!(app.selected_date, date("2024-02-01"));
        assert_eq!(app.grid.as_ref().unwrap().days().count(), 29);
    }

    #[test]
    fn month_navigation_clamps_selected_day() {
        let mut app = app_at("2025-01-31");
        app.handle(Action::NextMonth);
        assert_eq!(app.month, ReferenceMonth::new(2025, 2).unwrap());
        assert_eq!(app.selected_date, date("2025-02-28"));
        app.handle(Action::PrevMonth);
        app.handle(Action::PrevMonth);
        assert_eq!(app.month, ReferenceMonth::new(2024, 12).unwrap());
        assert_eq!(app.selected_date, date("2024-12-28"));
    }

    #[test]
    fn day_moves_cross_month_boundaries() {
        let mut app = app_at("2025-06-30");
        app.handle(Action::NextDay);
        assert_eq!(app.month, ReferenceMonth::new(2025, 7).unwrap());
        assert_eq!(app.selected_date, date("2025-07-01"));
        app.handle(Action::PrevWeek);
        assert_eq!(app.month, ReferenceMonth::new(2025, 6).unwrap());
        assert_eq!(app.selected_date, date("2025-06-24"));
    }

    #[test]
    fn today_flag_follows_the_grid_month() {
        let mut app = app_at("2025-06-13");
        app.handle(Action::NextMonth);
        let grid = app.grid.as_ref().unwrap();
        assert_eq!(grid.days().filter(|d| d.is_today).count(), 0);
        app.handle(Action::Today);
        let grid = app.grid.as_ref().unwrap();
        assert_eq!(grid.days().filter(|d| d.is_today).count(), 1);
    }

    #[test]
    fn toggling_order_rebuilds_with_start_time_sort() {
        let events = vec![
            sample_event("late", "2025-06-13", "15:00"),
            sample_event("early", "2025-06-13", "08:00"),
        ];
        let mut app = App::new(
            EventStore::new(events).unwrap(),
            Box::new(FixedClock(date("2025-06-13"))),
            None,
            EventOrder::Collection,
            Theme::default(),
        );
        let ids = |app: &App| -> Vec<String> {
            app.selected_day()
                .unwrap()
                .events
                .iter()
                .map(|e| e.id.clone())
                .collect()
        };
        assert_eq!(ids(&app), ["late", "early"]);
        app.handle(Action::ToggleOrder);
        assert_eq!(app.order, EventOrder::StartTime);
        assert_eq!(ids(&app), ["early", "late"]);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn event_cursor_wraps_and_detail_needs_an_event() {
        let mut app = app_at("2025-06-13");
        app.handle(Action::PrevEvent);
        assert_eq!(app.event_cursor, 2);
        app.handle(Action::NextEvent);
        assert_eq!(app.event_cursor, 0);
        app.handle(Action::ShowDetail);
        assert!(app.show_detail);
        app.handle(Action::NextMonth);
        assert_eq!(app.month, ReferenceMonth::new(2025, 6).unwrap());
        app.handle(Action::Close);
        assert!(!app.show_detail);

        app.handle(Action::NextDay);
        app.handle(Action::ShowDetail);
        assert!(!app.show_detail);
    }

    #[test]
    fn help_overlay_swallows_navigation() {
        let mut app = app_at("2025-06-13");
        app.handle(Action::ToggleHelp);
        app.handle(Action::NextMonth);
        assert_eq!(app.month, ReferenceMonth::new(2025, 6).unwrap());
        app.handle(Action::Close);
        assert!(!app.show_help);
        assert!(app.running);
        app.handle(Action::Quit);
        assert!(!app.running);
    }

    #[test]
    fn failed_build_shows_error_instead_of_grid() {
        let mut app = App::new(
            EventStore::sample().unwrap(),
            Box::new(FixedClock(date("2025-06-13"))),
            Some(ReferenceMonth::new(9999, 12).unwrap()),
            EventOrder::Collection,
            Theme::default(),
        );
        assert!(app.grid.is_some());
        assert!(app.render_error.is_none());

        app.handle(Action::NextMonth);
        assert_eq!((app.month.year(), app.month.month()), (10000, 1));
        assert!(app.grid.is_none());
        assert!(app.selected_day().is_none());
        let error = app.render_error.as_deref().unwrap();
        assert!(error.contains("10000"), "{error}");

        app.handle(Action::PrevMonth);
        assert!(app.grid.is_some());
        assert!(app.render_error.is_none());
        assert_eq!(app.month, ReferenceMonth::new(9999, 12).unwrap());
    }

    fn sample_event(id: &str, day: &str, start: &str) -> calendar_grid::Event {
        calendar_grid::Event {
            id: id.to_string(),
            title: id.to_string(),
            date: date(day),
            start_time: start.parse().unwrap(),
            end_time: "23:00".parse().unwrap(),
            color: "#ffffff".to_string(),
            duration: String::new(),
        }
    }
}
