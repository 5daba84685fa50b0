#![allow(dead_code)]

use chrono::{NaiveDate, Utc};
use skycast::{
    app::state::{AppMode, AppState},
    cli::{Cli, UnitsArg},
    domain::weather::{
        ExtendedConditions, ForecastEntry, HourlySample, WeatherAlert, WeatherSnapshot,
    },
};

pub fn stockholm_cli() -> Cli {
    Cli {
        city: Some("Stockholm".to_string()),
        units: UnitsArg::Celsius,
        api_key: Some("test-key".to_string()),
        fps: 30,
        no_animation: true,
        reduced_motion: false,
        no_flash: true,
        ascii_icons: false,
        emoji_icons: false,
        lat: None,
        lon: None,
        weather_url: None,
        extended_url: None,
    }
}

pub fn cli_with_urls(weather_url: &str, extended_url: &str) -> Cli {
    let mut cli = stockholm_cli();
    cli.weather_url = Some(weather_url.to_string());
    cli.extended_url = Some(extended_url.to_string());
    cli
}

pub fn fixture_snapshot(code: u16, icon: &str) -> WeatherSnapshot {
    WeatherSnapshot {
        condition_code: code,
        icon_code: icon.to_string(),
        temp_c: 7.2,
        feels_like_c: 5.8,
        temp_min_c: 3.0,
        temp_max_c: 9.0,
        humidity: 73.0,
        pressure_hpa: 1013,
        wind_speed: 4.1,
        wind_direction: Some(220.0),
        wind_gust: Some(7.5),
        visibility_m: Some(10_000),
        cloudiness: 75,
        rain_1h_mm: None,
        snow_1h_mm: None,
        sunrise: 1_770_861_600,
        sunset: 1_770_895_200,
        timezone_offset: 3_600,
        location_name: "Stockholm".to_string(),
        country: Some("SE".to_string()),
        latitude: 59.3293,
        longitude: 18.0686,
        fetched_at: Utc::now(),
    }
}

pub fn fixture_forecast(code: u16) -> Vec<ForecastEntry> {
    let base = NaiveDate::from_ymd_opt(2026, 2, 13).expect("valid fixed date");
    (0..5)
        .map(|idx| ForecastEntry {
            date: base + chrono::Duration::days(idx),
            condition_code: code,
            icon_code: "10d".to_string(),
            temp_c: 6.0 + idx as f32,
        })
        .collect()
}

pub fn fixture_extended() -> ExtendedConditions {
    ExtendedConditions {
        uv_index: Some(3.4),
        hourly: (0..12)
            .map(|idx| HourlySample {
                time: 1_770_890_700 + i64::from(idx) * 3_600,
                temp_c: 5.0 + idx as f32 * 0.5,
                condition_code: 500,
                icon_code: "10d".to_string(),
                precipitation_probability: 0.35,
            })
            .collect(),
        minutely: Vec::new(),
        alerts: vec![WeatherAlert {
            event: "Wind advisory".to_string(),
            sender: "SMHI".to_string(),
            description: "Strong gusts expected".to_string(),
        }],
    }
}

pub fn ready_state(cli: &Cli) -> AppState {
    let mut state = AppState::new(cli);
    state.snapshot = Some(fixture_snapshot(501, "10d"));
    state.forecast = fixture_forecast(500);
    state.mode = AppMode::Ready;
    state
}
