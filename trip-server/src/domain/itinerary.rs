//! Day-by-day itinerary entries.

use serde::{Deserialize, Serialize};

use super::coords::Coordinates;
use super::time::TimeOfDay;

/// Kind of activity an itinerary entry represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Transport,
    Sightseeing,
    Food,
    Accommodation,
    Activity,
}

/// Error returned when constructing an invalid itinerary item.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid itinerary item: {reason}")]
pub struct InvalidItineraryItem {
    reason: &'static str,
}

/// A scheduled activity within one day of the trip.
///
/// `day` is 1-based; whether it fits the trip's duration is checked by the
/// store against the current trip query.
#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryItem {
    /// Caller-assigned identifier, unique within the store.
    pub id: String,

    /// 1-based day of the trip.
    pub day: u32,

    /// Scheduled start time.
    pub time: TimeOfDay,

    /// What the activity is.
    pub title: String,

    /// Where it happens.
    pub location: String,

    /// Expected length in minutes.
    pub duration_mins: u32,

    /// Cost in whole currency units, when known.
    pub cost: Option<u32>,

    /// Kind of activity.
    pub activity_type: ActivityType,

    /// Map position, when known.
    pub coordinates: Option<Coordinates>,
}

impl ItineraryItem {
    /// Create an itinerary item. Day must be at least 1.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        day: u32,
        time: TimeOfDay,
        title: impl Into<String>,
        location: impl Into<String>,
        duration_mins: u32,
        activity_type: ActivityType,
    ) -> Result<Self, InvalidItineraryItem> {
        if day == 0 {
            return Err(InvalidItineraryItem {
                reason: "day must be at least 1",
            });
        }

        Ok(Self {
            id: id.into(),
            day,
            time,
            title: title.into(),
            location: location.into(),
            duration_mins,
            cost: None,
            activity_type,
            coordinates: None,
        })
    }

    /// Attach a cost.
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = Some(cost);
        self
    }

    /// Attach coordinates.
    pub fn with_coordinates(mut self, coordinates: Coordinates) -> Self {
        self.coordinates = Some(coordinates);
        self
    }
}
