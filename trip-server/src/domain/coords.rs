//! Geographic coordinates and great-circle distance.

use std::fmt;

use serde::Serialize;

/// Mean Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Error returned when constructing out-of-range coordinates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinates: {reason}")]
pub struct InvalidCoordinates {
    reason: &'static str,
}

/// A validated latitude/longitude pair.
///
/// Latitude is always in [-90, 90] and longitude in [-180, 180], so any
/// `Coordinates` value can be fed to [`distance_km`] without further checks.
///
/// # Examples
///
/// ```
/// use trip_server::domain::Coordinates;
///
/// let seoul = Coordinates::new(37.5665, 126.9780).unwrap();
/// assert_eq!(seoul.latitude(), 37.5665);
///
/// // Out-of-range values are rejected
/// assert!(Coordinates::new(91.0, 0.0).is_err());
/// assert!(Coordinates::new(0.0, -180.5).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// Create coordinates, validating the ranges.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinates> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(InvalidCoordinates {
                reason: "latitude must be in [-90, 90]",
            });
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidCoordinates {
                reason: "longitude must be in [-180, 180]",
            });
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Returns the latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Debug for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinates({}, {})", self.latitude, self.longitude)
    }
}

/// Great-circle distance between two points, in whole kilometres.
///
/// Uses the haversine formula and rounds to the nearest integer.
/// Symmetric: `distance_km(a, b) == distance_km(b, a)`.
///
/// # Examples
///
/// ```
/// use trip_server::domain::{Coordinates, distance_km};
///
/// let seoul = Coordinates::new(37.5665, 126.9780).unwrap();
/// let busan = Coordinates::new(35.1796, 129.0756).unwrap();
/// assert_eq!(distance_km(seoul, busan), 325);
/// assert_eq!(distance_km(seoul, seoul), 0);
/// ```
pub fn distance_km(from: Coordinates, to: Coordinates) -> u32 {
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + from.latitude.to_radians().cos()
            * to.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    (EARTH_RADIUS_KM * c).round() as u32
}
