use calendar_grid::{CalendarDate, DayCell, Event};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::theme::{parse_color, Theme};

pub const CONFLICT_NOTICE: &str = "Multiple events on this day.";

pub struct DayView;

impl DayView {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        date: CalendarDate,
        day: Option<&DayCell>,
        cursor: usize,
        theme: &Theme,
    ) {
        let w = area.width as usize;

        let naive = date.naive();
        let title = if w >= 30 {
            format!(" {} ", naive.format("%A, %B %d, %Y"))
        } else if w >= 18 {
            format!(" {} ", naive.format("%b %d, %Y"))
        } else {
            format!(" {} ", naive.format("%m/%d"))
        };

        let events: &[Event] = day.map(|d| d.events.as_slice()).unwrap_or_default();
        let has_conflict = day.is_some_and(|d| d.has_conflict);

        let count_str = match events.len() {
            0 => String::new(),
            n => format!(" {} event{} ", n, if n == 1 { "" } else { "s" }),
        };

        let block = Block::default()
            .title(title)
            .title_style(theme.header)
            .title_bottom(Line::from(Span::styled(count_str, theme.dim)))
            .borders(Borders::ALL)
            .border_style(if has_conflict { theme.conflict } else { theme.border });

        if events.is_empty() {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            let msg = Paragraph::new("No events").style(theme.dim);
            frame.render_widget(msg, inner);
            return;
        }

        let mut items: Vec<ListItem> = Vec::new();
        let mut offset = 0;
        if has_conflict {
            items.push(ListItem::new(Line::from(Span::styled(
                CONFLICT_NOTICE,
                theme.conflict,
            ))));
            items.push(ListItem::new(Line::from("")));
            offset = 2;
        }
        for ev in events {
            items.push(format_event(ev, theme));
        }

        let mut state = ListState::default();
        state.select(Some(offset + cursor.min(events.len() - 1)));

        let list = List::new(items).block(block).highlight_style(theme.highlight);
        frame.render_stateful_widget(list, area, &mut state);
    }
}

/// Swatch, `HH:MM - HH:MM`, title and the duration hint.
fn format_event(ev: &Event, theme: &Theme) -> ListItem<'static> {
    let cal_indicator = Span::styled("  ", Style::default().bg(event_color(ev)));

    let time_span = Span::styled(
        format!(" {}  ", ev.time_range_display()),
        Style::default().add_modifier(Modifier::DIM),
    );
    let title_span = Span::styled(ev.title.clone(), Style::default());

    let mut spans = vec![cal_indicator, time_span, title_span];
    if !ev.duration.is_empty() {
        spans.push(Span::styled(format!(" ({})", ev.duration), theme.dim));
    }

    ListItem::new(Line::from(spans))
}

fn event_color(ev: &Event) -> Color {
    parse_color(&ev.color).unwrap_or(Color::White)
}

/// Render the event detail popup overlay.
pub fn render_event_detail(frame: &mut Frame, area: Rect, ev: &Event, theme: &Theme) {
    let popup_w = area.width.clamp(30, 60);
    let popup_h = area.height.clamp(8, 12);
    let x = area.x + (area.width.saturating_sub(popup_w)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_h)) / 2;
    let popup_area = Rect::new(x, y, popup_w, popup_h).intersection(area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" {} ", ev.title))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("  ", Style::default().bg(event_color(ev))),
            Span::styled(format!(" {}", ev.color), theme.dim),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Time: ", theme.dim),
            Span::styled(ev.time_range_display(), Style::default()),
        ]),
        Line::from(vec![
            Span::styled("Date: ", theme.dim),
            Span::styled(
                ev.date.naive().format("%A, %B %d, %Y").to_string(),
                Style::default(),
            ),
        ]),
    ];

    if !ev.duration.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Duration: ", theme.dim),
            Span::styled(ev.duration.clone(), Style::default()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Press Esc to close", theme.dim)));

    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(para, inner);
}
