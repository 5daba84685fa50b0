pub mod geoip;
pub mod onecall;
pub mod openweather;

use thiserror::Error;

/// Failure taxonomy for the primary weather fetch. Extended-conditions
/// failures never surface here; that endpoint degrades silently to the
/// absent state.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("no weather data found for \"{0}\"")]
    NotFound(String),
    #[error("location unavailable: {0}")]
    LocationUnavailable(String),
    #[error("weather service unreachable: {0}")]
    Unreachable(String),
    #[error("malformed weather response: {0}")]
    Malformed(String),
}

/// What the user asked for: a typed city name or a coordinate fix.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherQuery {
    City(String),
    Coords { lat: f64, lon: f64 },
}

impl WeatherQuery {
    pub fn describe(&self) -> String {
        match self {
            WeatherQuery::City(name) => name.clone(),
            WeatherQuery::Coords { lat, lon } => format!("{lat:.4}, {lon:.4}"),
        }
    }
}
