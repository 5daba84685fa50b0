pub mod alerts;
pub mod daily;
pub mod hero;
pub mod hourly;
pub mod search;

use ratatui::{
    style::Style,
    widgets::{Block, Borders},
};

use crate::{cli::IconMode, domain::weather::WeatherType, ui::theme::Theme};

/// Decorative glyph for a weather type. The match is exhaustive on purpose:
/// a new tag must pick its glyphs before it can ship.
#[must_use]
pub fn weather_icon(kind: WeatherType, mode: IconMode) -> &'static str {
    match mode {
        IconMode::Ascii => match kind {
            WeatherType::Thunderstorm => "THN",
            WeatherType::Rain => "RAN",
            WeatherType::Snow => "SNW",
            WeatherType::Cloudy => "CLD",
            WeatherType::Sunny => "SUN",
            WeatherType::Night => "NGT",
            WeatherType::Default => "---",
        },
        IconMode::Emoji => match kind {
            WeatherType::Thunderstorm => "⛈️",
            WeatherType::Rain => "🌧️",
            WeatherType::Snow => "🌨️",
            WeatherType::Cloudy => "☁️",
            WeatherType::Sunny => "☀️",
            WeatherType::Night => "🌙",
            WeatherType::Default => "🌡️",
        },
        IconMode::Unicode => match kind {
            WeatherType::Thunderstorm => "⚡",
            WeatherType::Rain => "☂",
            WeatherType::Snow => "❄",
            WeatherType::Cloudy => "☁",
            WeatherType::Sunny => "☀",
            WeatherType::Night => "☾",
            WeatherType::Default => "○",
        },
    }
}

pub(crate) fn card(title: &'static str, theme: Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(theme.accent))
        .style(Style::default().bg(theme.card_background))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_type_has_an_icon_in_every_mode() {
        let kinds = [
            WeatherType::Thunderstorm,
            WeatherType::Rain,
            WeatherType::Snow,
            WeatherType::Cloudy,
            WeatherType::Sunny,
            WeatherType::Night,
            WeatherType::Default,
        ];
        for kind in kinds {
            for mode in [IconMode::Unicode, IconMode::Ascii, IconMode::Emoji] {
                assert!(!weather_icon(kind, mode).is_empty());
            }
        }
    }
}
