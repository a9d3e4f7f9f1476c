//! Project gallery screen rendering.

use folio_content::ProjectStatus;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

const CARD_HEIGHT: u16 = 5;

fn status_color(status: ProjectStatus, theme: &folio_content::Theme) -> Color {
    match status {
        ProjectStatus::Active => theme.success,
        ProjectStatus::Stable => theme.info,
        ProjectStatus::Featured => theme.warning,
        ProjectStatus::Archived => theme.text_dim,
    }
}

/// Render the project gallery as a stack of cards.
pub fn render_projects(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let projects = &app.content.projects;

    if projects.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "no projects configured",
            Style::default().fg(theme.text_dim),
        )));
        f.render_widget(empty, area);
        return;
    }

    let mut constraints: Vec<Constraint> =
        projects.iter().map(|_| Constraint::Length(CARD_HEIGHT)).collect();
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (project, chunk) in projects.iter().zip(chunks.iter()) {
        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled(
                project.name.clone(),
                Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", project.status.label()),
                Style::default().fg(status_color(project.status, theme)),
            ),
            Span::raw(" "),
        ]);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(title);

        let mut detail = vec![
            Span::styled(format!("★ {}", project.stars), Style::default().fg(theme.warning)),
        ];
        if !project.technologies.is_empty() {
            detail.push(Span::raw("   "));
            detail.push(Span::styled(
                project.technologies.join(", "),
                Style::default().fg(theme.accent),
            ));
        }
        if !project.last_updated.is_empty() {
            detail.push(Span::raw("   "));
            detail.push(Span::styled(
                format!("updated {}", project.last_updated),
                Style::default().fg(theme.text_dim),
            ));
        }

        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                project.description.clone(),
                Style::default().fg(theme.text),
            )),
            Line::from(detail),
            Line::from(Span::styled(
                project.repo_url.clone(),
                Style::default().fg(theme.info),
            )),
        ])
        .block(block);
        f.render_widget(card, *chunk);
    }
}
