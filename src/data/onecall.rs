use reqwest::Client;
use serde::Deserialize;

use crate::domain::weather::{ExtendedConditions, HourlySample, MinutelySample, WeatherAlert};

const ONECALL_URL: &str = "https://api.openweathermap.org/data/3.0/onecall";

/// Best-effort client for the extended-conditions endpoint (UV, hourly,
/// minute-level precipitation, alerts). The endpoint is optional on many
/// provider plans, so every failure collapses to `None` and the caller
/// renders the absent state instead of an error.
#[derive(Debug, Clone)]
pub struct ExtendedClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl ExtendedClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, ONECALL_URL)
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("reqwest client"),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    pub async fn fetch(&self, lat: f64, lon: f64) -> Option<ExtendedConditions> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("units", "metric".to_string()),
                ("exclude", "daily".to_string()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await
            .ok()?
            .error_for_status()
            .ok()?;

        let payload: OneCallResponse = response.json().await.ok()?;
        Some(payload.into_extended())
    }
}

#[derive(Debug, Deserialize)]
struct OneCallResponse {
    current: Option<OneCallCurrent>,
    #[serde(default)]
    hourly: Vec<OneCallHourly>,
    #[serde(default)]
    minutely: Vec<OneCallMinutely>,
    #[serde(default)]
    alerts: Vec<OneCallAlert>,
}

impl OneCallResponse {
    fn into_extended(self) -> ExtendedConditions {
        ExtendedConditions {
            uv_index: self.current.and_then(|c| c.uvi),
            hourly: self
                .hourly
                .into_iter()
                .filter_map(|h| {
                    let condition = h.weather.into_iter().next()?;
                    Some(HourlySample {
                        time: h.dt,
                        temp_c: h.temp,
                        condition_code: condition.id,
                        icon_code: condition.icon,
                        precipitation_probability: h.pop.unwrap_or(0.0),
                    })
                })
                .collect(),
            minutely: self
                .minutely
                .into_iter()
                .map(|m| MinutelySample {
                    time: m.dt,
                    precipitation_mm: m.precipitation,
                })
                .collect(),
            alerts: self
                .alerts
                .into_iter()
                .map(|a| WeatherAlert {
                    event: a.event,
                    sender: a.sender_name.unwrap_or_default(),
                    description: a.description.unwrap_or_default(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OneCallCurrent {
    uvi: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct OneCallHourly {
    dt: i64,
    temp: f32,
    #[serde(default)]
    weather: Vec<OneCallCondition>,
    pop: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct OneCallCondition {
    id: u16,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OneCallMinutely {
    dt: i64,
    precipitation: f32,
}

#[derive(Debug, Deserialize)]
struct OneCallAlert {
    event: String,
    sender_name: Option<String>,
    description: Option<String>,
}
