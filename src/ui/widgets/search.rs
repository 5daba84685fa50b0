use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use crate::{app::state::AppState, ui::widgets};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = state.theme();
    let block = widgets::card("Search city", theme);

    let line = Line::from(vec![
        Span::raw(state.search.buffer.clone()),
        Span::styled("▏", Style::default().add_modifier(Modifier::SLOW_BLINK)),
    ]);

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(line).block(block), area);
}
