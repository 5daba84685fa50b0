use reqwest::Client;
use serde::Deserialize;

use crate::domain::weather::Location;

const GEOIP_URL: &str = "https://ipapi.co/json/";

/// IP-based location provider. A single best-effort fix; any failure is
/// reported as `None` and the caller surfaces a user-facing message instead
/// of fetching weather.
#[derive(Debug, Clone)]
pub struct GeoipClient {
    client: Client,
    base_url: String,
}

impl Default for GeoipClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GeoipClient {
    pub fn new() -> Self {
        Self::with_base_url(GEOIP_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(5))
                .build()
                .expect("reqwest client"),
            base_url: base_url.into(),
        }
    }

    pub async fn locate(&self) -> Option<Location> {
        let response: IpApiResponse = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .ok()?
            .json()
            .await
            .ok()?;

        let name = response.city.filter(|c| !c.is_empty())?;
        Some(Location {
            name,
            latitude: response.latitude?,
            longitude: response.longitude?,
            country: response.country_name,
        })
    }
}

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    city: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    country_name: Option<String>,
}
