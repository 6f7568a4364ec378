//! Caching layer for external geocoding lookups.
//!
//! City coordinates are effectively immutable, so successful lookups are
//! cached aggressively. Failures are not cached: a transient network error
//! should not pin a city to the fallback for the TTL.

use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::Coordinates;

use super::client::GeocodeClient;
use super::error::GeocodeError;

/// Configuration for the geocode cache.
#[derive(Debug, Clone)]
pub struct GeocodeCacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for GeocodeCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(24 * 60 * 60),
            max_capacity: 10_000,
        }
    }
}

/// Geocoding client with a cache in front of the network call.
///
/// Keys are trimmed city names; values are the first result's coordinates.
pub struct CachedGeocodeClient {
    client: GeocodeClient,
    cache: MokaCache<String, Coordinates>,
}

impl CachedGeocodeClient {
    /// Create a new cached client.
    pub fn new(client: GeocodeClient, config: &GeocodeCacheConfig) -> Self {
        let cache = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { client, cache }
    }

    /// Search for a city, using the cache if possible.
    pub async fn search(&self, name: &str) -> Result<Coordinates, GeocodeError> {
        let key = name.trim().to_string();

        if let Some(cached) = self.cache.get(&key).await {
            return Ok(cached);
        }

        let coordinates = self.client.search(&key).await?;
        self.cache.insert(key, coordinates).await;

        Ok(coordinates)
    }

    /// Number of cached entries (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geocode::client::GeocodeClientConfig;

    fn unreachable_client() -> CachedGeocodeClient {
        let config = GeocodeClientConfig::new()
            .with_base_url("http://127.0.0.1:9")
            .with_timeout(1);
        let client = GeocodeClient::new(config).unwrap();
        CachedGeocodeClient::new(client, &GeocodeCacheConfig::default())
    }

    #[test]
    fn default_config() {
        let config = GeocodeCacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(86_400));
        assert_eq!(config.max_capacity, 10_000);
    }

    #[tokio::test]
    async fn failures_are_not_cached() {
        let cached = unreachable_client();

        let result = cached.search("서울").await;
        assert!(result.is_err());
        assert_eq!(cached.entry_count(), 0);
    }
}
