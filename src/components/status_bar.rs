use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::components::month_view::month_title;

pub struct StatusBar;

impl StatusBar {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let w = area.width as usize;
        let style = app.theme.status;

        let left = match &app.grid {
            Some(grid) => format!(
                " {}  {} events ",
                month_title(app.month),
                grid.event_count()
            ),
            None => format!(" {}  unavailable ", month_title(app.month)),
        };

        // Show status message if present, otherwise width-dependent hints
        let right = if let Some(ref msg) = app.status_message {
            format!(" {} ", msg)
        } else if w >= 90 {
            " hjkl:Nav [/]:Month t:Today Tab:Event Enter:Detail s:Sort ?:Help q:Quit ".to_string()
        } else if w >= 60 {
            " [/]:Month t:Today s:Sort ?:Help q:Quit ".to_string()
        } else {
            " ?:Help q:Quit ".to_string()
        };

        let padding = " ".repeat(w.saturating_sub(left.len() + right.len()));

        let line = Line::from(vec![
            Span::styled(left, style),
            Span::styled(padding, style),
            Span::styled(right, style),
        ]);

        let bar = Paragraph::new(line).style(style);
        frame.render_widget(bar, area);
    }
}
