//! Skills screen rendering: proficiency gauges grouped by category.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Gauge},
};

use crate::app::App;

/// Render skill groups side by side, one gauge per skill.
pub fn render_skills(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let groups = &app.content.skill_groups;
    if groups.is_empty() {
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, groups.len() as u32);
            groups.len()
        ])
        .split(area);

    for (group, column) in groups.iter().zip(columns.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(format!(" {} ", group.title))
            .title_style(Style::default().fg(theme.title).add_modifier(Modifier::BOLD));
        let inner = block.inner(*column);
        f.render_widget(block, *column);

        let mut constraints: Vec<Constraint> =
            group.skills.iter().map(|_| Constraint::Length(2)).collect();
        constraints.push(Constraint::Min(0));
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        for (skill, row) in group.skills.iter().zip(rows.iter()) {
            let gauge = Gauge::default()
                .gauge_style(
                    Style::default()
                        .fg(theme.gauge_fill)
                        .bg(theme.gauge_track),
                )
                .percent(skill.percentage as u16)
                .label(format!("{} {}%", skill.name, skill.percentage));
            f.render_widget(gauge, *row);
        }
    }
}
