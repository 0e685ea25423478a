mod app;
mod cli;
mod components;
mod config;
mod event;
mod logging;
mod print;
mod theme;
mod tui;

use std::time::Duration;

use app::App;
use calendar_grid::{
    build_grid, Clock, EventOrder, EventStore, FixedClock, ReferenceMonth, SystemClock,
};
use clap::Parser;
use cli::Cli;
use color_eyre::eyre::{Result, WrapErr};
use config::Config;
use ratatui::layout::{Constraint, Layout, Rect};
use tracing::info;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let sink = if cli.print {
        logging::Sink::Stderr
    } else {
        logging::Sink::File
    };
    logging::init(cli.verbose, sink)?;

    let config = Config::load(cli.config.as_deref())?;

    let store = match cli.events.as_ref().or(config.events.as_ref()) {
        Some(path) => EventStore::load(path)
            .wrap_err_with(|| format!("could not load events from {}", path.display()))?,
        None => EventStore::sample()?,
    };

    let clock: Box<dyn Clock> = match cli.today {
        Some(today) => Box::new(FixedClock(today)),
        None => Box::new(SystemClock),
    };

    let order = if cli.sort_by_time {
        EventOrder::StartTime
    } else {
        config.event_order
    };

    if cli.print {
        let today = clock.today();
        let month = cli.month.unwrap_or_else(|| ReferenceMonth::containing(today));
        let grid = build_grid(month, today, store.events(), order)?;
        print!("{}", print::render_month(&grid));
        return Ok(());
    }

    let theme = config.theme.into_theme();
    let mut app = App::new(store, clock, cli.month, order, theme);
    info!(month = %app.month, events = app.store().len(), "launching TUI");

    let mut terminal = tui::init()?;
    let result = run(&mut terminal, &mut app);
    tui::restore()?;
    result
}

fn run(terminal: &mut tui::Tui, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|frame| {
            let area = frame.area();

            // Main layout: content + status bar
            let layout = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(area);

            render_month_layout(frame, layout[0], app);

            // Render detail popup overlay
            if app.show_detail {
                if let Some(ev) = app
                    .selected_day()
                    .and_then(|day| day.events.get(app.event_cursor))
                {
                    components::day_view::render_event_detail(frame, area, ev, &app.theme);
                }
            }

            // Render help overlay
            if app.show_help {
                render_help(frame, area, app);
            }

            components::StatusBar::render(frame, layout[1], app);
        })?;

        if let Some(key) = event::next_key_event(Duration::from_millis(100))? {
            if let Some(action) = event::action_for(key) {
                app.handle(action);
            }
        }
    }

    Ok(())
}

fn render_month_layout(frame: &mut ratatui::Frame, area: Rect, app: &App) {
    if area.width < 60 {
        render_month_view(frame, area, app);
        return;
    }

    let month_w = if area.width >= 100 { 44 } else { 37 };
    let content =
        Layout::horizontal([Constraint::Length(month_w), Constraint::Min(20)]).split(area);

    render_month_view(frame, content[0], app);
    components::DayView::render(
        frame,
        content[1],
        app.selected_date,
        app.selected_day(),
        app.event_cursor,
        &app.theme,
    );
}

fn render_month_view(frame: &mut ratatui::Frame, area: Rect, app: &App) {
    components::MonthView::render(
        frame,
        area,
        app.month,
        app.grid.as_ref(),
        app.render_error.as_deref(),
        app.selected_date,
        &app.theme,
    );
}

fn render_help(frame: &mut ratatui::Frame, area: Rect, app: &App) {
    use ratatui::style::{Color, Modifier, Style};
    use ratatui::text::{Line, Span};
    use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

    let popup_w = area.width.clamp(30, 52);
    let popup_h = area.height.clamp(12, 20);
    let x = area.x + (area.width.saturating_sub(popup_w)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_h)) / 2;
    let popup_area = Rect::new(x, y, popup_w, popup_h).intersection(area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Keybindings ")
        .title_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let key_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let desc_style = Style::default();
    let section_style = Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);

    let entry = |keys: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<10}", keys), key_style),
            Span::styled(desc, desc_style),
        ])
    };

    let lines = vec![
        Line::from(Span::styled("Navigation", section_style)),
        entry("h/l", "Previous/next day"),
        entry("k/j", "Previous/next week"),
        entry("[/]", "Previous/next month"),
        entry("t", "Jump to today"),
        Line::from(""),
        Line::from(Span::styled("Events", section_style)),
        entry("Tab", "Next event of the day"),
        entry("Enter", "Event details"),
        entry("s", "Toggle sort (collection/time)"),
        Line::from(""),
        entry("q / Esc", "Quit / close popup"),
        Line::from(""),
        Line::from(Span::styled(
            format!("Sorting by {}", app.order.label()),
            app.theme.dim,
        )),
    ];

    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(para, inner);
}
