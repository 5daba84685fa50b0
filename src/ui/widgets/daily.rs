use chrono::Local;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

use crate::{
    app::state::AppState,
    cli::Cli,
    domain::weather::{classify_code, convert_temp, day_name, is_night_icon, round_temp},
    ui::widgets,
};

/// Five-day forecast row, one column per calendar day.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, cli: &Cli) {
    if state.forecast.is_empty() {
        return;
    }

    let theme = state.theme();
    let block = widgets::card("Forecast", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let today = Local::now().date_naive();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, state.forecast.len() as u32);
            state.forecast.len()
        ])
        .split(inner);

    for (entry, column) in state.forecast.iter().zip(columns.iter()) {
        let kind = classify_code(entry.condition_code, is_night_icon(&entry.icon_code));
        let lines = vec![
            Line::from(day_name(entry.date, today)).style(
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::from(widgets::weather_icon(kind, cli.icon_mode())),
            Line::from(format!(
                "{}°",
                round_temp(convert_temp(entry.temp_c, state.units))
            )),
        ];
        frame.render_widget(Paragraph::new(lines).centered(), *column);
    }
}
