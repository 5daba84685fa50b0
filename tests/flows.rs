mod common;

use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;
use serde_json::json;
use skycast::{
    app::{events::AppEvent, state::{AppMode, AppState}},
    data::ProviderError,
    domain::weather::{Units, WeatherType},
    ui::theme::{ColorCapability, theme_for},
};
use tokio::sync::mpsc;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

use common::{cli_with_urls, fixture_extended, fixture_forecast, fixture_snapshot, stockholm_cli};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[tokio::test]
async fn primary_success_enters_ready_and_recomputes_presentation() {
    let cli = stockholm_cli();
    let (tx, _rx) = mpsc::channel(16);
    let mut state = AppState::new(&cli);
    // Theme assertions must not depend on the terminal the suite runs in.
    state.capability = ColorCapability::TrueColor;
    state.active_request = Some(1);

    state
        .handle_event(
            AppEvent::PrimaryFetched {
                request: 1,
                result: Ok((fixture_snapshot(501, "10d"), fixture_forecast(500))),
            },
            &tx,
            &cli,
        )
        .await
        .expect("event handled");

    assert_eq!(state.mode, AppMode::Ready);
    assert_eq!(state.weather_type, WeatherType::Rain);
    assert_eq!(state.theme().background, theme_for(WeatherType::Rain).background);
    assert_eq!(state.forecast.len(), 5);
    assert!(state.last_error.is_none());
}

#[tokio::test]
async fn failed_fetch_clears_all_location_data_atomically() {
    let cli = stockholm_cli();
    let (tx, _rx) = mpsc::channel(16);
    let mut state = AppState::new(&cli);
    state.active_request = Some(1);

    state
        .handle_event(
            AppEvent::PrimaryFetched {
                request: 1,
                result: Ok((fixture_snapshot(800, "01n"), fixture_forecast(800))),
            },
            &tx,
            &cli,
        )
        .await
        .expect("event handled");
    state
        .handle_event(
            AppEvent::ExtendedFetched {
                request: 1,
                extended: Some(fixture_extended()),
            },
            &tx,
            &cli,
        )
        .await
        .expect("event handled");
    assert_eq!(state.weather_type, WeatherType::Night);
    assert!(state.extended.is_some());

    state.active_request = Some(2);
    state
        .handle_event(
            AppEvent::PrimaryFetched {
                request: 2,
                result: Err(ProviderError::NotFound("Atlantis".to_string())),
            },
            &tx,
            &cli,
        )
        .await
        .expect("event handled");

    assert_eq!(state.mode, AppMode::Error);
    assert!(state.snapshot.is_none());
    assert!(state.forecast.is_empty());
    assert!(state.extended.is_none());
    assert_eq!(state.weather_type, WeatherType::Default);
    assert!(state.last_error.as_deref().unwrap_or("").contains("Atlantis"));
}

#[tokio::test]
async fn superseded_results_never_overwrite_newer_state() {
    let cli = stockholm_cli();
    let (tx, _rx) = mpsc::channel(16);
    let mut state = AppState::new(&cli);

    // Request 2 (a newer search) already completed.
    state.active_request = Some(2);
    state
        .handle_event(
            AppEvent::PrimaryFetched {
                request: 2,
                result: Ok((fixture_snapshot(800, "01d"), fixture_forecast(800))),
            },
            &tx,
            &cli,
        )
        .await
        .expect("event handled");
    assert_eq!(state.weather_type, WeatherType::Sunny);

    // A slow request 1 (e.g. the earlier location fetch) lands afterwards.
    state
        .handle_event(
            AppEvent::PrimaryFetched {
                request: 1,
                result: Ok((fixture_snapshot(600, "13d"), fixture_forecast(600))),
            },
            &tx,
            &cli,
        )
        .await
        .expect("event handled");

    assert_eq!(state.weather_type, WeatherType::Sunny);
    assert_eq!(
        state.snapshot.as_ref().map(|s| s.condition_code),
        Some(800)
    );

    // Stale extended data is discarded the same way.
    state
        .handle_event(
            AppEvent::ExtendedFetched {
                request: 1,
                extended: Some(fixture_extended()),
            },
            &tx,
            &cli,
        )
        .await
        .expect("event handled");
    assert!(state.extended.is_none());
}

#[tokio::test]
async fn extended_failure_degrades_without_touching_primary_display() {
    let cli = stockholm_cli();
    let (tx, _rx) = mpsc::channel(16);
    let mut state = AppState::new(&cli);
    state.active_request = Some(1);

    state
        .handle_event(
            AppEvent::PrimaryFetched {
                request: 1,
                result: Ok((fixture_snapshot(501, "10d"), fixture_forecast(500))),
            },
            &tx,
            &cli,
        )
        .await
        .expect("event handled");
    state
        .handle_event(
            AppEvent::ExtendedFetched {
                request: 1,
                extended: None,
            },
            &tx,
            &cli,
        )
        .await
        .expect("event handled");

    assert_eq!(state.mode, AppMode::Ready);
    assert!(state.extended.is_none());
    assert!(state.last_error.is_none());
}

#[tokio::test]
async fn empty_search_submission_is_a_no_op() {
    let cli = stockholm_cli();
    let (tx, _rx) = mpsc::channel(16);
    let mut state = AppState::new(&cli);

    state
        .handle_event(AppEvent::Input(key(KeyCode::Char('/'))), &tx, &cli)
        .await
        .expect("event handled");
    assert!(state.search.active);

    for c in "   ".chars() {
        state
            .handle_event(AppEvent::Input(key(KeyCode::Char(c))), &tx, &cli)
            .await
            .expect("event handled");
    }
    state
        .handle_event(AppEvent::Input(key(KeyCode::Enter)), &tx, &cli)
        .await
        .expect("event handled");

    assert!(!state.search.active);
    assert_eq!(state.active_request, None);
    assert_eq!(state.mode, AppMode::Idle);
}

#[tokio::test]
async fn unit_keys_toggle_display_preference_only() {
    let cli = stockholm_cli();
    let (tx, _rx) = mpsc::channel(16);
    let mut state = AppState::new(&cli);
    state.active_request = Some(1);
    state
        .handle_event(
            AppEvent::PrimaryFetched {
                request: 1,
                result: Ok((fixture_snapshot(501, "10d"), fixture_forecast(500))),
            },
            &tx,
            &cli,
        )
        .await
        .expect("event handled");

    state
        .handle_event(AppEvent::Input(key(KeyCode::Char('f'))), &tx, &cli)
        .await
        .expect("event handled");
    assert_eq!(state.units, Units::Fahrenheit);
    assert_eq!(state.snapshot.as_ref().map(|s| s.temp(state.units)), Some(45));

    state
        .handle_event(AppEvent::Input(key(KeyCode::Char('u'))), &tx, &cli)
        .await
        .expect("event handled");
    assert_eq!(state.units, Units::Celsius);
    // Canonical storage stays Celsius no matter how often units flip.
    assert!(
        state
            .snapshot
            .as_ref()
            .map(|s| (s.temp_c - 7.2).abs() < f32::EPSILON)
            .unwrap_or(false)
    );
}

#[tokio::test]
async fn search_pipeline_end_to_end_against_mock_provider() {
    let weather_server = MockServer::start().await;
    let extended_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_payload()))
        .mount(&weather_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_payload()))
        .mount(&weather_server)
        .await;
    // Extended endpoint is down; the pipeline must still reach Ready.
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&extended_server)
        .await;

    let cli = cli_with_urls(&weather_server.uri(), &extended_server.uri());
    let (tx, mut rx) = mpsc::channel(16);
    let mut state = AppState::new(&cli);
    state.capability = ColorCapability::TrueColor;

    state
        .start_fetch(
            &tx,
            Some(skycast::data::WeatherQuery::City("Stockholm".to_string())),
        )
        .await
        .expect("fetch started");

    let mut extended_seen = false;
    while !(state.mode == AppMode::Ready && extended_seen) {
        let event = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("pipeline event before timeout")
            .expect("channel open");
        if matches!(event, AppEvent::ExtendedFetched { .. }) {
            extended_seen = true;
        }
        state
            .handle_event(event, &tx, &cli)
            .await
            .expect("event handled");
    }

    assert_eq!(state.weather_type, WeatherType::Rain);
    assert_eq!(state.theme().background, Color::Rgb(17, 47, 88));
    assert_eq!(state.forecast.len(), 1);
    assert!(state.extended.is_none());
    assert_eq!(
        state.snapshot.as_ref().map(|s| s.location_name.clone()),
        Some("Stockholm".to_string())
    );
}

fn current_payload() -> serde_json::Value {
    json!({
        "coord": { "lat": 59.3293, "lon": 18.0686 },
        "weather": [{ "id": 501, "main": "Rain", "description": "moderate rain", "icon": "10d" }],
        "main": {
            "temp": 7.2, "feels_like": 5.8, "temp_min": 3.0, "temp_max": 9.0,
            "pressure": 1013, "humidity": 73
        },
        "visibility": 10000,
        "wind": { "speed": 4.1, "deg": 220, "gust": 7.5 },
        "clouds": { "all": 75 },
        "rain": { "1h": 0.4 },
        "sys": { "country": "SE", "sunrise": 1770861600i64, "sunset": 1770895200i64 },
        "timezone": 3600,
        "name": "Stockholm"
    })
}

fn forecast_payload() -> serde_json::Value {
    let day = 86_400i64;
    let now = chrono::Utc::now().timestamp();
    let tomorrow_noon = now - now.rem_euclid(day) + day + 12 * 3600;
    json!({
        "list": [{
            "dt": tomorrow_noon,
            "main": { "temp": 8.0 },
            "weather": [{ "id": 500, "icon": "10d" }]
        }],
        "city": { "timezone": 0 }
    })
}
