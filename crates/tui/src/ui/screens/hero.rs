//! Hero (landing) screen rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tui_big_text::{BigText, PixelSize};

use crate::app::App;

/// Render the hero screen: big name, tagline, roles and contact links.
pub fn render_hero(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let hero = &app.content.hero;

    // Full-size glyphs are 8 cells wide per character; fall back to the
    // quadrant size on narrow terminals.
    let pixel_size = if area.width as usize >= hero.name.len() * 8 {
        PixelSize::Full
    } else {
        PixelSize::Quadrant
    };
    let name_height = match pixel_size {
        PixelSize::Full => 8,
        _ => 4,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(name_height),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let name = BigText::builder()
        .pixel_size(pixel_size)
        .style(Style::default().fg(theme.accent))
        .lines(vec![hero.name.clone().into()])
        .build();
    f.render_widget(name, chunks[1]);

    let tagline = Paragraph::new(Line::from(Span::styled(
        hero.tagline.clone(),
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    f.render_widget(tagline, chunks[2]);

    let roles = Paragraph::new(Line::from(Span::styled(
        hero.roles.join("  ·  "),
        Style::default().fg(theme.text_dim),
    )))
    .alignment(Alignment::Center);
    f.render_widget(roles, chunks[3]);

    let contact = Paragraph::new(Line::from(vec![
        Span::styled(hero.github.clone(), Style::default().fg(theme.info)),
        Span::styled("   ", Style::default()),
        Span::styled(hero.email.clone(), Style::default().fg(theme.info)),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(contact, chunks[4]);
}
