//! Tiered city-name resolution.

use tracing::{debug, warn};

use crate::directory::{CityDirectory, CityInfo};
use crate::domain::{Coordinates, CountryCode};

use super::cache::CachedGeocodeClient;

/// Country reported for network-geocoded results. The external lookup does
/// not return country data in this integration.
const UNKNOWN_COUNTRY: &str = "unknown";

/// Fallback coordinates (Seoul) used when every other tier fails.
const FALLBACK_LAT: f64 = 37.5665;
const FALLBACK_LON: f64 = 126.9780;

/// Resolves city names to coordinates with a three-tier fallback.
///
/// Resolution order, first success wins:
/// 1. static directory lookup on the trimmed name;
/// 2. external geocoding lookup (cached);
/// 3. a fixed default city.
///
/// `resolve` is total: network errors, malformed payloads, and empty result
/// sets all degrade to the next tier, so trip planning never stalls on bad
/// input. The cost is that typos silently resolve to the default city.
pub struct Geocoder {
    directory: CityDirectory,
    client: CachedGeocodeClient,
    fallback: CityInfo,
}

impl Geocoder {
    /// Create a geocoder over a directory and a cached lookup client.
    pub fn new(directory: CityDirectory, client: CachedGeocodeClient) -> Self {
        // Prefer the directory's own Seoul entry so the fallback carries
        // real country data.
        let fallback = directory.lookup("서울").cloned().unwrap_or_else(|| CityInfo {
            coordinates: Coordinates::new(FALLBACK_LAT, FALLBACK_LON)
                .expect("fallback coordinates are in range"),
            country: "South Korea".to_string(),
            country_code: CountryCode::KR,
        });

        Self {
            directory,
            client,
            fallback,
        }
    }

    /// Resolve a city name to city info. Never fails.
    pub async fn resolve(&self, name: &str) -> CityInfo {
        let name = name.trim();

        if let Some(info) = self.directory.lookup(name) {
            return info.clone();
        }

        match self.client.search(name).await {
            Ok(coordinates) => {
                debug!(city = name, "resolved via external geocoding");
                CityInfo {
                    coordinates,
                    country: UNKNOWN_COUNTRY.to_string(),
                    country_code: CountryCode::UNKNOWN,
                }
            }
            Err(e) => {
                warn!(city = name, error = %e, "geocoding failed, using fallback city");
                self.fallback.clone()
            }
        }
    }

    /// Resolve a departure/arrival pair.
    ///
    /// The two lookups run concurrently and are joined before returning;
    /// each falls back independently.
    pub async fn resolve_pair(&self, departure: &str, arrival: &str) -> (CityInfo, CityInfo) {
        futures::join!(self.resolve(departure), self.resolve(arrival))
    }

    /// The entry returned when every tier fails.
    pub fn fallback(&self) -> &CityInfo {
        &self.fallback
    }
}
