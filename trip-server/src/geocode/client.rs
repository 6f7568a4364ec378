//! Nominatim search client.

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;

use crate::domain::Coordinates;

use super::error::GeocodeError;

/// Default base URL for the Nominatim search endpoint.
const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Client-identifying User-Agent, required by the Nominatim usage policy.
const DEFAULT_USER_AGENT: &str = "TripMate Travel App";

/// One search result. Nominatim reports coordinates as decimal strings.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceDto {
    pub lat: String,
    pub lon: String,
}

/// Configuration for the geocoding client.
#[derive(Debug, Clone)]
pub struct GeocodeClientConfig {
    /// Base URL for the search endpoint
    pub base_url: String,
    /// User-Agent header value
    pub user_agent: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GeocodeClientConfig {
    /// Create a config with the production defaults.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 10,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for GeocodeClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the external geocoding lookup service.
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    http: reqwest::Client,
    base_url: String,
}

impl GeocodeClient {
    /// Create a new geocoding client.
    pub fn new(config: GeocodeClientConfig) -> Result<Self, GeocodeError> {
        let mut headers = HeaderMap::new();

        let user_agent =
            HeaderValue::from_str(&config.user_agent).map_err(|_| GeocodeError::Api {
                status: 0,
                message: "Invalid User-Agent value".to_string(),
            })?;
        headers.insert(USER_AGENT, user_agent);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Search for a city by name, returning the first result's coordinates.
    ///
    /// A single attempt is made; there is no retry. An empty result set is
    /// reported as [`GeocodeError::NoMatch`].
    pub async fn search(&self, name: &str) -> Result<Coordinates, GeocodeError> {
        let url = format!("{}/search", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("q", name), ("format", "json"), ("limit", "1")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let places: Vec<PlaceDto> =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Json {
                message: e.to_string(),
            })?;

        let first = places.into_iter().next().ok_or(GeocodeError::NoMatch)?;
        parse_place(&first)
    }
}

/// Parse a result's decimal-string coordinates into validated coordinates.
fn parse_place(place: &PlaceDto) -> Result<Coordinates, GeocodeError> {
    let latitude: f64 = place.lat.parse().map_err(|_| GeocodeError::Json {
        message: format!("invalid latitude: {}", place.lat),
    })?;
    let longitude: f64 = place.lon.parse().map_err(|_| GeocodeError::Json {
        message: format!("invalid longitude: {}", place.lon),
    })?;

    Coordinates::new(latitude, longitude).map_err(|e| GeocodeError::Json {
        message: e.to_string(),
    })
}
