//! The animated code window.
//!
//! Responsibilities:
//! - Render the window chrome (traffic-light dots, filename, language
//!   badge), the line-number gutter and the highlighted revealed text.
//! - Keep the newest line in view while the reveal is running.
//!
//! Does NOT handle:
//! - Timing or reveal state (see `typing`).
//! - Token classification (see `syntax`).

use folio_content::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::syntax::highlight_line;
use crate::typing::CodeWindowView;

/// Gutter width: up to three digits, right-aligned, plus a separator.
const GUTTER_WIDTH: usize = 4;

const CURSOR_GLYPH: &str = "▌";

/// Window chrome title: dots, filename, language badge.
fn title_line(app: &App, theme: &Theme) -> Line<'static> {
    let mut spans = vec![
        Span::raw(" "),
        Span::styled("●", Style::default().fg(Color::Red)),
        Span::raw(" "),
        Span::styled("●", Style::default().fg(Color::Yellow)),
        Span::raw(" "),
        Span::styled("●", Style::default().fg(Color::Green)),
        Span::raw("  "),
    ];
    if let Some(snippet) = app.animator.active_snippet() {
        spans.push(Span::styled(
            snippet.filename.clone(),
            Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("[{}]", snippet.language_label()),
            Style::default().fg(theme.text_dim),
        ));
    }
    spans.push(Span::raw(" "));
    Line::from(spans)
}

/// Render the code window into `area`.
pub fn render_code_window(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(title_line(app, theme));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(snippet) = app.animator.active_snippet() else {
        let empty = Paragraph::new(Line::from(Span::styled(
            "no snippets configured",
            Style::default().fg(theme.text_dim),
        )));
        f.render_widget(empty, inner);
        return;
    };

    let view = CodeWindowView::of(&app.animator);
    let gutter_style = Style::default().fg(theme.text_dim);
    let cursor_style = Style::default().fg(theme.accent);

    let mut lines: Vec<Line> = Vec::with_capacity(view.line_count());
    for revealed in &view.lines {
        let mut line = Line::from(vec![Span::styled(
            format!("{:>width$} ", revealed.number, width = GUTTER_WIDTH - 1),
            gutter_style,
        )]);
        line.spans
            .extend(highlight_line(revealed.text, &snippet.language, theme).spans);
        if revealed.cursor {
            line.spans.push(Span::styled(CURSOR_GLYPH, cursor_style));
        }
        lines.push(line);
    }

    // Follow the reveal: once the text outgrows the window, pin the
    // newest line to the bottom edge.
    let height = inner.height as usize;
    let scroll = lines.len().saturating_sub(height) as u16;

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(theme.text).bg(theme.background))
        .scroll((scroll, 0));
    f.render_widget(paragraph, inner);
}
