use calendar_grid::{CalendarDate, DayCell, GridCell, MonthGrid, ReferenceMonth};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::theme::Theme;

pub const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub struct MonthView;

impl MonthView {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        month: ReferenceMonth,
        grid: Option<&MonthGrid>,
        render_error: Option<&str>,
        selected_date: CalendarDate,
        theme: &Theme,
    ) {
        let title = format!(" {} ", month_title(month));

        let block = Block::default()
            .title(title)
            .title_style(theme.header)
            .borders(Borders::ALL)
            .border_style(theme.border);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(grid) = grid else {
            let msg = render_error.unwrap_or("Month unavailable");
            let para = Paragraph::new(Line::from(Span::styled(msg.to_string(), theme.conflict)))
                .wrap(Wrap { trim: true });
            frame.render_widget(para, inner);
            return;
        };

        // Header row
        let header_cells: Vec<Span> = DAY_NAMES
            .iter()
            .map(|d| Span::styled(format!("{:^5}", d), theme.header))
            .collect();
        let header = Line::from(header_cells);

        let weeks: Vec<Line> = week_rows(grid)
            .into_iter()
            .map(|week| {
                let cells: Vec<Span> = week
                    .iter()
                    .map(|slot| match slot {
                        Some(day) => Span::styled(
                            day_label(day),
                            day_style(day, selected_date, theme),
                        ),
                        None => Span::raw("     "),
                    })
                    .collect();
                Line::from(cells)
            })
            .collect();

        // Layout: header + weeks
        let mut constraints = vec![Constraint::Length(1)]; // header
        for _ in &weeks {
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Min(0)); // fill remaining

        let rows = Layout::vertical(constraints).split(inner);

        frame.render_widget(Paragraph::new(header), rows[0]);
        for (i, week) in weeks.into_iter().enumerate() {
            frame.render_widget(Paragraph::new(week), rows[i + 1]);
        }

        let conflicts = grid.conflict_days().count();
        if conflicts > 0 {
            let note_row = rows[rows.len() - 1];
            let note = format!(
                " ! {} day{} with multiple events",
                conflicts,
                if conflicts == 1 { "" } else { "s" }
            );
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(note, theme.conflict))),
                note_row,
            );
        }
    }
}

/// Split the grid into rows of seven, padding the last row with empty slots.
pub fn week_rows(grid: &MonthGrid) -> Vec<[Option<&DayCell>; 7]> {
    grid.cells()
        .chunks(7)
        .map(|chunk| {
            let mut week = [None; 7];
            for (slot, cell) in week.iter_mut().zip(chunk) {
                *slot = match cell {
                    GridCell::Day(day) => Some(day),
                    GridCell::Blank => None,
                };
            }
            week
        })
        .collect()
}

/// Five columns: day number plus `!` for conflicts or `*` for events.
pub fn day_label(day: &DayCell) -> String {
    let marker = if day.has_conflict {
        '!'
    } else if !day.events.is_empty() {
        '*'
    } else {
        ' '
    };
    format!(" {:>2}{} ", day.date.day(), marker)
}

fn day_style(day: &DayCell, selected_date: CalendarDate, theme: &Theme) -> Style {
    let selected = day.date == selected_date;
    if day.is_today && selected {
        theme.today_selected()
    } else if selected {
        theme.selected
    } else if day.is_today {
        theme.today
    } else if day.has_conflict {
        theme.conflict
    } else {
        Style::default()
    }
}

pub fn month_title(month: ReferenceMonth) -> String {
    format!("{} {}", month_name(month.month()), month.year())
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use calendar_grid::{build_grid, EventOrder, EventStore};

    use super::*;

    fn june_2025() -> MonthGrid {
        let store = EventStore::sample().unwrap();
        build_grid(
            ReferenceMonth::new(2025, 6).unwrap(),
            CalendarDate::parse("2025-06-13").unwrap(),
            store.events(),
            EventOrder::Collection,
        )
        .unwrap()
    }

    #[test]
    fn rows_pad_the_last_week() {
        // March 2025 starts on a Saturday: 6 blanks + 31 days = 37 cells.
        let grid = build_grid(
            ReferenceMonth::new(2025, 3).unwrap(),
            CalendarDate::parse("2025-06-13").unwrap(),
            &[],
            EventOrder::Collection,
        )
        .unwrap();
        let rows = week_rows(&grid);
        assert_eq!(rows.len(), 6);
        assert!(rows[0][..6].iter().all(Option::is_none));
        assert_eq!(rows[0][6].unwrap().date.day(), 1);
        assert_eq!(rows[5][1].unwrap().date.day(), 31);
        assert!(rows[5][2..].iter().all(Option::is_none));
    }

    #[test]
    fn labels_mark_events_and_conflicts() {
        let grid = june_2025();
        assert_eq!(day_label(grid.day(13).unwrap()), " 13! ");
        assert_eq!(day_label(grid.day(15).unwrap()), " 15* ");
        assert_eq!(day_label(grid.day(1).unwrap()), "  1  ");
    }

    #[test]
    fn title_names_the_month() {
        assert_eq!(month_title(ReferenceMonth::new(2025, 6).unwrap()), "June 2025");
        assert_eq!(month_title(ReferenceMonth::new(1900, 2).unwrap()), "February 1900");
    }
}
