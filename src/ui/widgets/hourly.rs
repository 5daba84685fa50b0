use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Cell, Row, Table},
};

use crate::{
    app::state::AppState,
    cli::Cli,
    domain::weather::{classify_code, convert_temp, hour_label, is_night_icon, round_temp},
    ui::widgets,
};

const MAX_COLUMNS: usize = 8;

/// Hourly strip from the extended-conditions bundle. The whole panel is
/// omitted when the bundle is absent; missing extras are expected, not an
/// error.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, cli: &Cli) {
    let Some(extended) = &state.extended else {
        return;
    };
    if extended.hourly.is_empty() {
        return;
    }
    let Some(snapshot) = &state.snapshot else {
        return;
    };

    let theme = state.theme();
    let block = widgets::card("Hourly", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let offset = snapshot.timezone_offset;
    let slice: Vec<_> = extended.hourly.iter().take(MAX_COLUMNS).collect();

    let time_cells: Vec<Cell> = slice
        .iter()
        .enumerate()
        .map(|(idx, sample)| {
            let label = hour_label(idx, sample.time, offset);
            let style = if idx == 0 {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::DIM)
            };
            Cell::from(label).style(style)
        })
        .collect();

    let icon_cells: Vec<Cell> = slice
        .iter()
        .map(|sample| {
            let kind = classify_code(sample.condition_code, is_night_icon(&sample.icon_code));
            Cell::from(widgets::weather_icon(kind, cli.icon_mode()))
        })
        .collect();

    let temp_cells: Vec<Cell> = slice
        .iter()
        .map(|sample| {
            Cell::from(format!(
                "{}°",
                round_temp(convert_temp(sample.temp_c, state.units))
            ))
        })
        .collect();

    let pop_cells: Vec<Cell> = slice
        .iter()
        .map(|sample| {
            let pct = (sample.precipitation_probability * 100.0).round() as i32;
            Cell::from(if pct > 0 {
                format!("{pct}%")
            } else {
                String::new()
            })
            .style(Style::default().fg(theme.accent))
        })
        .collect();

    let widths = vec![Constraint::Ratio(1, slice.len().max(1) as u32); slice.len()];
    let table = Table::new(
        [
            Row::new(time_cells),
            Row::new(icon_cells),
            Row::new(temp_cells),
            Row::new(pop_cells),
        ],
        widths,
    );
    frame.render_widget(table, inner);
}
