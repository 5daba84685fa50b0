use ratatui::style::Color;

use crate::domain::weather::WeatherType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCapability {
    TrueColor,
    Xterm256,
    Basic16,
}

/// Color triple for one weather type: screen backdrop, stat-card fill, and
/// the accent used for highlights. Resolved from the classifier output only,
/// never stored across fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub card_background: Color,
    pub accent: Color,
}

pub fn detect_color_capability() -> ColorCapability {
    if std::env::var_os("NO_COLOR").is_some() {
        return ColorCapability::Basic16;
    }

    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_lowercase();
    if colorterm.contains("truecolor") || colorterm.contains("24bit") {
        return ColorCapability::TrueColor;
    }

    let term = std::env::var("TERM").unwrap_or_default().to_lowercase();
    if term.contains("256color") {
        ColorCapability::Xterm256
    } else {
        ColorCapability::Basic16
    }
}

/// Pure lookup from weather type to theme. The match is exhaustive so a new
/// tag cannot ship without a row here.
#[must_use]
pub fn theme_for(kind: WeatherType) -> Theme {
    let (background, card_background, accent) = match kind {
        WeatherType::Thunderstorm => ((28, 25, 66), (42, 40, 97), (255, 223, 112)),
        WeatherType::Rain => ((17, 47, 88), (32, 73, 126), (153, 214, 255)),
        WeatherType::Snow => ((27, 51, 77), (43, 74, 106), (237, 247, 255)),
        WeatherType::Cloudy => ((25, 36, 51), (48, 63, 84), (210, 223, 235)),
        WeatherType::Sunny => ((13, 53, 102), (30, 102, 158), (255, 215, 117)),
        WeatherType::Night => ((9, 18, 44), (21, 43, 79), (173, 216, 255)),
        WeatherType::Default => ((28, 36, 51), (42, 53, 73), (205, 219, 234)),
    };

    Theme {
        background: Color::Rgb(background.0, background.1, background.2),
        card_background: Color::Rgb(card_background.0, card_background.1, card_background.2),
        accent: Color::Rgb(accent.0, accent.1, accent.2),
    }
}

/// [`theme_for`] adjusted to what the terminal can actually show.
#[must_use]
pub fn resolve_theme(kind: WeatherType, capability: ColorCapability) -> Theme {
    let theme = theme_for(kind);
    Theme {
        background: quantize(theme.background, capability),
        card_background: quantize(theme.card_background, capability),
        accent: quantize(theme.accent, capability),
    }
}

pub fn quantize(color: Color, capability: ColorCapability) -> Color {
    match (capability, color) {
        (ColorCapability::TrueColor, c) => c,
        (ColorCapability::Xterm256, Color::Rgb(r, g, b)) => {
            let to_cube = |v: u8| -> u8 { ((f32::from(v) / 255.0) * 5.0).round() as u8 };
            let index = 16 + 36 * to_cube(r) + 6 * to_cube(g) + to_cube(b);
            Color::Indexed(index)
        }
        (ColorCapability::Basic16, Color::Rgb(r, g, b)) => basic16_from_rgb(r, g, b),
        (_, c) => c,
    }
}

fn basic16_from_rgb(r: u8, g: u8, b: u8) -> Color {
    let rf = f32::from(r) / 255.0;
    let gf = f32::from(g) / 255.0;
    let bf = f32::from(b) / 255.0;

    let max = rf.max(gf.max(bf));
    let min = rf.min(gf.min(bf));
    let delta = max - min;
    let light = (max + min) / 2.0;

    if delta < 0.08 {
        if light < 0.20 {
            return Color::Black;
        }
        if light < 0.40 {
            return Color::DarkGray;
        }
        if light < 0.72 {
            return Color::Gray;
        }
        return Color::White;
    }

    let hue = if (max - rf).abs() < f32::EPSILON {
        60.0 * ((gf - bf) / delta).rem_euclid(6.0)
    } else if (max - gf).abs() < f32::EPSILON {
        60.0 * (((bf - rf) / delta) + 2.0)
    } else {
        60.0 * (((rf - gf) / delta) + 4.0)
    };

    let bright = light >= 0.55;
    match hue {
        h if !(30.0..330.0).contains(&h) => {
            if bright {
                Color::LightRed
            } else {
                Color::Red
            }
        }
        h if h < 90.0 => {
            if bright {
                Color::LightYellow
            } else {
                Color::Yellow
            }
        }
        h if h < 150.0 => {
            if bright {
                Color::LightGreen
            } else {
                Color::Green
            }
        }
        h if h < 210.0 => {
            if bright {
                Color::LightCyan
            } else {
                Color::Cyan
            }
        }
        h if h < 270.0 => {
            if bright {
                Color::LightBlue
            } else {
                Color::Blue
            }
        }
        _ => {
            if bright {
                Color::LightMagenta
            } else {
                Color::Magenta
            }
        }
    }
}
