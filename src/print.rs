use std::fmt::Write;

use calendar_grid::MonthGrid;

use crate::components::day_view::CONFLICT_NOTICE;
use crate::components::month_view::{day_label, month_title, week_rows, DAY_NAMES};

/// Plain-text rendering of a month: the grid, then each day's events.
pub fn render_month(grid: &MonthGrid) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", month_title(grid.month()));

    let header: String = DAY_NAMES.iter().map(|d| format!("{:^5}", d)).collect();
    push_line(&mut out, &header);

    for week in week_rows(grid) {
        let row: String = week
            .iter()
            .map(|slot| slot.map_or_else(|| "     ".to_string(), day_label))
            .collect();
        push_line(&mut out, &row);
    }

    for day in grid.days().filter(|day| !day.events.is_empty()) {
        out.push('\n');
        if day.has_conflict {
            let _ = writeln!(out, "{}  ! {}", day.date, CONFLICT_NOTICE);
        } else {
            let _ = writeln!(out, "{}", day.date);
        }
        for ev in &day.events {
            let _ = writeln!(
                out,
                "  {} - {} ({})",
                ev.start_time,
                ev.title,
                ev.time_range_display()
            );
        }
    }

    out
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use calendar_grid::{build_grid, CalendarDate, EventOrder, EventStore, ReferenceMonth};

    use super::*;

    #[test]
    fn prints_sample_june() {
        let store = EventStore::sample().unwrap();
        let grid = build_grid(
            ReferenceMonth::new(2025, 6).unwrap(),
            CalendarDate::parse("2025-06-13").unwrap(),
            store.events(),
            EventOrder::Collection,
        )
        .unwrap();

        let text = render_month(&grid);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "June 2025");
        assert_eq!(lines[1], " Sun  Mon  Tue  Wed  Thu  Fri  Sat");
        // June 2025 starts on a Sunday.
        assert_eq!(lines[2], "  1    2    3    4    5    6    7");
        assert_eq!(lines[3], "  8    9   10   11   12   13!  14");
        assert_eq!(lines[4], " 15*  16   17   18   19   20*  21");

        assert!(text.contains(
            "2025-06-13  ! Multiple events on this day.\n\
             \x20 09:00 - Daily Standup (09:00 - 09:30)\n\
             \x20 09:15 - Weekly Catchup (09:15 - 10:00)\n\
             \x20 12:00 - Team Lunch (12:00 - 13:00)\n"
        ));
        assert!(text.contains("2025-06-15\n  14:00 - Project Meeting (14:00 - 15:00)\n"));
        assert!(!text.contains("2025-06-01"));
    }
}
