use chrono::Utc;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::data::{ProviderError, WeatherQuery};
use crate::domain::weather::{ForecastEntry, WeatherSnapshot, local_date, local_hour};

const OPENWEATHER_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Client for the current-conditions and 5-day forecast endpoints. Units are
/// always requested metric; imperial display is a formatting concern.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl WeatherClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, OPENWEATHER_URL)
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

    pub async fn fetch_current(&self, query: &WeatherQuery) -> Result<WeatherSnapshot, ProviderError> {
        let url = format!("{}/weather", self.base_url);
        let payload: CurrentResponse = self.get_json(&url, query).await?;

        let condition = payload
            .weather
            .first()
            .ok_or_else(|| ProviderError::Malformed("response carries no condition".to_string()))?;

        Ok(WeatherSnapshot {
            condition_code: condition.id,
            icon_code: condition.icon.clone(),
            temp_c: payload.main.temp,
            feels_like_c: payload.main.feels_like,
            temp_min_c: payload.main.temp_min,
            temp_max_c: payload.main.temp_max,
            humidity: payload.main.humidity,
            pressure_hpa: payload.main.pressure,
            wind_speed: payload.wind.speed,
            wind_direction: payload.wind.deg,
            wind_gust: payload.wind.gust,
            visibility_m: payload.visibility,
            cloudiness: payload.clouds.all,
            rain_1h_mm: payload.rain.and_then(|r| r.one_hour),
            snow_1h_mm: payload.snow.and_then(|s| s.one_hour),
            sunrise: payload.sys.sunrise,
            sunset: payload.sys.sunset,
            timezone_offset: payload.timezone,
            location_name: payload.name,
            country: payload.sys.country,
            latitude: payload.coord.lat,
            longitude: payload.coord.lon,
            fetched_at: Utc::now(),
        })
    }

    /// Fetches the 3-hourly forecast and reduces it to one noon reading per
    /// calendar day at the location, today excluded, at most five entries.
    pub async fn fetch_forecast(&self, query: &WeatherQuery) -> Result<Vec<ForecastEntry>, ProviderError> {
        let url = format!("{}/forecast", self.base_url);
        let payload: ForecastResponse = self.get_json(&url, query).await?;
        Ok(reduce_to_daily(&payload))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        query: &WeatherQuery,
    ) -> Result<T, ProviderError> {
        let mut request = self
            .client
            .get(url)
            .query(&[("units", "metric"), ("appid", self.api_key.as_str())]);

        request = match query {
            WeatherQuery::City(name) => request.query(&[("q", name.as_str())]),
            WeatherQuery::Coords { lat, lon } => {
                request.query(&[("lat", lat.to_string()), ("lon", lon.to_string())])
            }
        };

        let response = request
            .send()
            .await
            .map_err(|err| ProviderError::Unreachable(err.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(ProviderError::NotFound(query.describe())),
            status if !status.is_success() => Err(ProviderError::Unreachable(format!(
                "provider returned {status}"
            ))),
            _ => response
                .json::<T>()
                .await
                .map_err(|err| ProviderError::Malformed(err.to_string())),
        }
    }
}

fn reduce_to_daily(payload: &ForecastResponse) -> Vec<ForecastEntry> {
    let offset = payload.city.timezone;
    let today = local_date(Utc::now().timestamp(), offset);

    let mut entries: Vec<ForecastEntry> = Vec::new();
    let mut best_hour_gap: u32 = 0;

    for item in &payload.list {
        let Some(date) = local_date(item.dt, offset) else {
            continue;
        };
        if Some(date) == today {
            continue;
        }
        let Some(condition) = item.weather.first() else {
            continue;
        };
        let hour = local_hour(item.dt, offset).unwrap_or(0);
        let gap = hour.abs_diff(12);

        match entries.last_mut() {
            Some(last) if last.date == date => {
                if gap < best_hour_gap {
                    best_hour_gap = gap;
                    last.condition_code = condition.id;
                    last.icon_code = condition.icon.clone();
                    last.temp_c = item.main.temp;
                }
            }
            _ => {
                if entries.len() == 5 {
                    break;
                }
                best_hour_gap = gap;
                entries.push(ForecastEntry {
                    date,
                    condition_code: condition.id,
                    icon_code: condition.icon.clone(),
                    temp_c: item.main.temp,
                });
            }
        }
    }

    entries
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    coord: CoordBlock,
    weather: Vec<ConditionBlock>,
    main: MainBlock,
    visibility: Option<u32>,
    wind: WindBlock,
    clouds: CloudsBlock,
    rain: Option<PrecipitationBlock>,
    snow: Option<PrecipitationBlock>,
    sys: SysBlock,
    timezone: i32,
    name: String,
}

#[derive(Debug, Deserialize)]
struct CoordBlock {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct ConditionBlock {
    id: u16,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f32,
    feels_like: f32,
    temp_min: f32,
    temp_max: f32,
    pressure: u32,
    humidity: f32,
}

#[derive(Debug, Deserialize)]
struct WindBlock {
    speed: f32,
    deg: Option<f32>,
    gust: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct CloudsBlock {
    all: u8,
}

#[derive(Debug, Deserialize)]
struct PrecipitationBlock {
    #[serde(rename = "1h")]
    one_hour: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct SysBlock {
    country: Option<String>,
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    list: Vec<ForecastItem>,
    city: CityBlock,
}

#[derive(Debug, Deserialize)]
struct ForecastItem {
    dt: i64,
    main: ForecastMain,
    weather: Vec<ConditionBlock>,
}

#[derive(Debug, Deserialize)]
struct ForecastMain {
    temp: f32,
}

#[derive(Debug, Deserialize)]
struct CityBlock {
    timezone: i32,
}
