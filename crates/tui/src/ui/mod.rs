//! UI rendering modules for the TUI.
//!
//! Screen-specific rendering is kept separate from app state management;
//! everything here takes `&App` read-only.

pub mod screens;
pub mod widgets;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
};

use crate::app::{App, CurrentScreen, FOOTER_HEIGHT, HEADER_HEIGHT};

/// Render one full frame.
pub fn render(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(f.area());

    let tabs = Tabs::new(CurrentScreen::ALL.map(CurrentScreen::title).to_vec())
        .select(app.screen.index())
        .style(Style::default().fg(theme.text_dim))
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(format!(" {} ", app.content.hero.name))
                .title_style(Style::default().fg(theme.title).add_modifier(Modifier::BOLD)),
        );
    f.render_widget(tabs, chunks[0]);

    match app.screen {
        CurrentScreen::Hero => screens::render_hero(f, chunks[1], app),
        CurrentScreen::Projects => screens::render_projects(f, chunks[1], app),
        CurrentScreen::Skills => screens::render_skills(f, chunks[1], app),
        CurrentScreen::Showcase => screens::render_showcase(f, chunks[1], app),
    }

    let mut hints = String::from(" q quit · tab/←→ screens · 1-4 jump · t theme");
    if app.screen == CurrentScreen::Showcase {
        hints.push_str(" · n/p snippet");
    }
    let footer = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(theme.text_dim),
    )));
    f.render_widget(footer, chunks[2]);
}
