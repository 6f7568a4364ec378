//! Trip query and sort preference.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Error returned when constructing an invalid trip query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid trip query: {reason}")]
pub struct InvalidTripQuery {
    reason: &'static str,
}

/// A user's submitted travel request.
///
/// City names are trimmed at construction; duration and traveler count are
/// at least 1. Immutable once created.
///
/// # Examples
///
/// ```
/// use trip_server::domain::TripQuery;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 9, 12).unwrap();
/// let query = TripQuery::new("서울", "부산", date, 3, 2).unwrap();
/// assert_eq!(query.departure_city(), "서울");
/// assert_eq!(query.duration_days(), 3);
///
/// assert!(TripQuery::new("", "부산", date, 3, 2).is_err());
/// assert!(TripQuery::new("서울", "부산", date, 0, 2).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripQuery {
    departure_city: String,
    destination_city: String,
    date: NaiveDate,
    duration_days: u32,
    travelers: u32,
}

impl TripQuery {
    /// Create a trip query, trimming city names and validating counts.
    pub fn new(
        departure_city: impl Into<String>,
        destination_city: impl Into<String>,
        date: NaiveDate,
        duration_days: u32,
        travelers: u32,
    ) -> Result<Self, InvalidTripQuery> {
        let departure_city = departure_city.into().trim().to_string();
        let destination_city = destination_city.into().trim().to_string();

        if departure_city.is_empty() {
            return Err(InvalidTripQuery {
                reason: "departure city must not be empty",
            });
        }
        if destination_city.is_empty() {
            return Err(InvalidTripQuery {
                reason: "destination city must not be empty",
            });
        }
        if duration_days == 0 {
            return Err(InvalidTripQuery {
                reason: "trip duration must be at least 1 day",
            });
        }
        if travelers == 0 {
            return Err(InvalidTripQuery {
                reason: "traveler count must be at least 1",
            });
        }

        Ok(Self {
            departure_city,
            destination_city,
            date,
            duration_days,
            travelers,
        })
    }

    /// The trimmed departure city name.
    pub fn departure_city(&self) -> &str {
        &self.departure_city
    }

    /// The trimmed destination city name.
    pub fn destination_city(&self) -> &str {
        &self.destination_city
    }

    /// The travel date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Trip length in days (≥1).
    pub fn duration_days(&self) -> u32 {
        self.duration_days
    }

    /// Number of travelers (≥1).
    pub fn travelers(&self) -> u32 {
        self.travelers
    }
}

/// Ordering preference for the route list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortType {
    /// Ascending price.
    Price,
    /// Ascending travel time.
    Duration,
    /// Ascending transfer count.
    Transfers,
    /// Descending blended rating/price score.
    #[default]
    Recommended,
}

impl SortType {
    /// Returns the sort type as a lowercase string slice.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortType::Price => "price",
            SortType::Duration => "duration",
            SortType::Transfers => "transfers",
            SortType::Recommended => "recommended",
        }
    }
}
