use ratatui::style::Color;

use super::Units;

const COMPASS_POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// Compass point for a wind bearing. Each point owns the 45-degree sector
/// starting at its own heading, so 0-44 reads N and 45-89 reads NE; 360
/// wraps back to N. An absent bearing (calm wind, or the provider omitted
/// it) renders as an empty label.
#[must_use]
pub fn compass_point(degrees: Option<f32>) -> &'static str {
    let Some(degrees) = degrees else {
        return "";
    };
    let idx = ((degrees as i32) / 45).rem_euclid(8) as usize;
    COMPASS_POINTS[idx]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UvBucket {
    pub label: &'static str,
    pub color: Color,
}

/// WHO UV index buckets, upper bounds inclusive.
#[must_use]
pub fn uv_bucket(uvi: f32) -> UvBucket {
    if uvi <= 2.0 {
        UvBucket {
            label: "Low",
            color: Color::Green,
        }
    } else if uvi <= 5.0 {
        UvBucket {
            label: "Moderate",
            color: Color::Yellow,
        }
    } else if uvi <= 7.0 {
        UvBucket {
            label: "High",
            color: Color::LightRed,
        }
    } else if uvi <= 10.0 {
        UvBucket {
            label: "Very High",
            color: Color::Red,
        }
    } else {
        UvBucket {
            label: "Extreme",
            color: Color::Magenta,
        }
    }
}

/// Kilometers above 1 km (integer when exact, else one decimal), plain
/// meters below.
#[must_use]
pub fn format_visibility(meters: u32) -> String {
    if meters >= 1000 {
        if meters % 1000 == 0 {
            format!("{} km", meters / 1000)
        } else {
            format!("{:.1} km", meters as f32 / 1000.0)
        }
    } else {
        format!("{meters} m")
    }
}

/// Magnus-formula dew point, rounded to whole degrees Celsius. The formula
/// takes `ln(humidity/100)`, so humidity at or below zero has no defined
/// answer and yields `None`.
#[must_use]
pub fn dew_point_c(temp_c: f32, humidity: f32) -> Option<i32> {
    if humidity <= 0.0 {
        return None;
    }
    let alpha = (17.27 * temp_c) / (237.7 + temp_c) + (humidity / 100.0).ln();
    Some(((237.7 * alpha) / (17.27 - alpha)).round() as i32)
}

/// Celsius is the canonical storage unit; Fahrenheit exists only at display
/// time.
#[must_use]
pub fn convert_temp(celsius: f32, units: Units) -> f32 {
    match units {
        Units::Celsius => celsius,
        Units::Fahrenheit => celsius * 1.8 + 32.0,
    }
}

#[must_use]
pub fn round_temp(value: f32) -> i32 {
    value.round() as i32
}
