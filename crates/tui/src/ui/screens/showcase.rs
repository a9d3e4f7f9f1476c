//! Code showcase screen: the animated code window plus snippet position.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::ui::widgets::render_code_window;

/// Render the showcase screen.
pub fn render_showcase(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    render_code_window(f, chunks[0], app);

    let count = app.animator.snippet_count();
    let position = if count == 0 {
        String::from("snippet 0 of 0")
    } else {
        format!("snippet {} of {}", app.animator.active_index() + 1, count)
    };
    let status = Paragraph::new(Line::from(Span::styled(
        position,
        Style::default().fg(theme.text_dim),
    )));
    f.render_widget(status, chunks[1]);
}
