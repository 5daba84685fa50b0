mod classify;
mod format;
mod metrics;


pub use classify::{WeatherType, classify, classify_code, condition_label, is_night_icon};
pub use format::{day_name, format_hour, format_time, hour_label, local_date, local_hour};
pub use metrics::{
    UvBucket, compass_point, convert_temp, dew_point_c, format_visibility, round_temp, uv_bucket,
};

use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Units {
    Celsius,
    Fahrenheit,
}

impl Units {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Units::Celsius => Units::Fahrenheit,
            Units::Fahrenheit => Units::Celsius,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: Option<String>,
}

/// One immutable weather reading for a location. Replaced wholesale on every
/// successful fetch, discarded on failure, never mutated in place.
#[derive(Debug, Clone)]
pub struct WeatherSnapshot {
    pub condition_code: u16,
    pub icon_code: String,
    pub temp_c: f32,
    pub feels_like_c: f32,
    pub temp_min_c: f32,
    pub temp_max_c: f32,
    pub humidity: f32,
    pub pressure_hpa: u32,
    pub wind_speed: f32,
    pub wind_direction: Option<f32>,
    pub wind_gust: Option<f32>,
    pub visibility_m: Option<u32>,
    pub cloudiness: u8,
    pub rain_1h_mm: Option<f32>,
    pub snow_1h_mm: Option<f32>,
    pub sunrise: i64,
    pub sunset: i64,
    pub timezone_offset: i32,
    pub location_name: String,
    pub country: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub fetched_at: DateTime<Utc>,
}

impl WeatherSnapshot {
    pub fn temp(&self, units: Units) -> i32 {
        round_temp(convert_temp(self.temp_c, units))
    }

    pub fn feels_like(&self, units: Units) -> i32 {
        round_temp(convert_temp(self.feels_like_c, units))
    }

    pub fn high_low(&self, units: Units) -> (i32, i32) {
        (
            round_temp(convert_temp(self.temp_max_c, units)),
            round_temp(convert_temp(self.temp_min_c, units)),
        )
    }
}

/// One daily forecast sample (the noon reading).
#[derive(Debug, Clone)]
pub struct ForecastEntry {
    pub date: NaiveDate,
    pub condition_code: u16,
    pub icon_code: String,
    pub temp_c: f32,
}

#[derive(Debug, Clone)]
pub struct HourlySample {
    pub time: i64,
    pub temp_c: f32,
    pub condition_code: u16,
    pub icon_code: String,
    pub precipitation_probability: f32,
}

#[derive(Debug, Clone)]
pub struct MinutelySample {
    pub time: i64,
    pub precipitation_mm: f32,
}

#[derive(Debug, Clone)]
pub struct WeatherAlert {
    pub event: String,
    pub sender: String,
    pub description: String,
}

/// Best-effort extras from the secondary endpoint. May be entirely absent;
/// nothing downstream may assume it is populated.
#[derive(Debug, Clone, Default)]
pub struct ExtendedConditions {
    pub uv_index: Option<f32>,
    pub hourly: Vec<HourlySample>,
    pub minutely: Vec<MinutelySample>,
    pub alerts: Vec<WeatherAlert>,
}

impl ExtendedConditions {
    pub fn has_minutely_rain(&self) -> bool {
        self.minutely.iter().any(|m| m.precipitation_mm > 0.0)
    }
}
