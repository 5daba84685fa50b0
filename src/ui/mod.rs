pub mod particles;
pub mod theme;
pub mod widgets;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::{
    app::state::{AppMode, AppState},
    cli::Cli,
    domain::weather::format_time,
};

pub fn render(frame: &mut Frame, state: &AppState, cli: &Cli) {
    let area = frame.area();

    if area.width < 30 || area.height < 15 {
        let warning = Paragraph::new("Terminal too small. Resize to at least 30x15.")
            .block(Block::default().borders(Borders::ALL).title("skycast"));
        frame.render_widget(warning, area);
        return;
    }

    let theme = state.theme();
    let backdrop = if state.particles.flash_active() {
        Color::White
    } else {
        theme.background
    };
    frame.render_widget(Block::default().style(Style::default().bg(backdrop)), area);
    render_particles(frame, area, state);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Percentage(20),
            Constraint::Percentage(35),
        ])
        .split(area);

    widgets::hero::render(frame, chunks[0], state, cli);
    widgets::hourly::render(frame, chunks[1], state, cli);
    widgets::daily::render(frame, chunks[2], state, cli);

    widgets::alerts::render_badge(frame, area, state);
    render_status(frame, area, state);

    if state.search.active {
        widgets::search::render(frame, centered_rect(60, 20, area), state);
    }
}

fn render_particles(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = state.theme();
    let buf = frame.buffer_mut();
    for p in &state.particles.particles {
        let x = area.x + (p.x * f32::from(area.width)) as u16;
        let y = area.y + (p.y * f32::from(area.height)) as u16;
        if x >= area.right() || y >= area.bottom() {
            continue;
        }
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_char(p.glyph);
            cell.set_fg(theme.accent);
        }
    }
}

fn render_status(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = state.theme();
    let line = match state.mode {
        AppMode::Loading => Some((state.loading_message.clone(), theme.accent)),
        AppMode::Error => state
            .last_error
            .clone()
            .map(|err| (err, Color::LightRed)),
        AppMode::Ready if state.fetch_in_flight => {
            Some((state.loading_message.clone(), theme.accent))
        }
        AppMode::Ready => state.snapshot.as_ref().map(|s| {
            (
                format!(
                    "Updated {}",
                    format_time(s.fetched_at.timestamp(), s.timezone_offset)
                ),
                theme.accent,
            )
        }),
        _ => None,
    };

    if let Some((text, color)) = line {
        let width = (text.chars().count() as u16 + 2).min(area.width);
        let badge_area = Rect {
            x: area.x + 1,
            y: area.bottom().saturating_sub(1),
            width,
            height: 1,
        };
        let badge = Paragraph::new(Line::from(text)).style(
            Style::default()
                .fg(color)
                .bg(theme.card_background)
                .add_modifier(Modifier::BOLD),
        );
        frame.render_widget(Clear, badge_area);
        frame.render_widget(badge, badge_area);
    }
}

pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
