//! City-name geocoding.
//!
//! Resolves a city name to coordinates with a three-tier fallback:
//! static directory first, then a cached external lookup, then a fixed
//! default city. Resolution is total, so callers never see an error.

mod cache;
mod client;
mod error;
mod resolver;

pub use cache::{CachedGeocodeClient, GeocodeCacheConfig};
pub use client::{GeocodeClient, GeocodeClientConfig, PlaceDto};
pub use error::GeocodeError;
pub use resolver::Geocoder;
