use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Clear, Paragraph},
};

use crate::app::state::AppState;

/// Corner badge for active provider alerts. Absent extended conditions mean
/// absent alerts; nothing is rendered and nothing errors.
pub fn render_badge(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(extended) = &state.extended else {
        return;
    };
    let Some(alert) = extended.alerts.first() else {
        return;
    };

    let more = extended.alerts.len().saturating_sub(1);
    let text = if more > 0 {
        format!("⚠ {} (+{more})", alert.event)
    } else {
        format!("⚠ {}", alert.event)
    };

    let width = (text.chars().count() as u16 + 2).min(area.width);
    let badge_area = Rect {
        x: area.right().saturating_sub(width + 1),
        y: area.y,
        width,
        height: 1,
    };
    let badge = Paragraph::new(Line::from(text)).style(
        Style::default()
            .fg(Color::Yellow)
            .bg(Color::Black)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(Clear, badge_area);
    frame.render_widget(badge, badge_area);
}
