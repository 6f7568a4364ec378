//! Data transfer objects for web requests and responses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::booking::BookingLink;
use crate::domain::{ActivityType, ItineraryItem, Route, RouteEndpoint, SortType, TransportMode};

/// Request to search trips between two cities.
#[derive(Debug, Deserialize)]
pub struct SearchTripRequest {
    /// Departure city name
    pub departure_city: String,

    /// Destination city name
    pub destination_city: String,

    /// Travel date (YYYY-MM-DD)
    pub date: NaiveDate,

    /// Trip length in days
    pub duration_days: u32,

    /// Number of travelers
    pub travelers: u32,
}

/// One end of a route in API responses.
#[derive(Debug, Serialize)]
pub struct EndpointView {
    /// City name
    pub location: String,

    /// Clock time in HH:MM
    pub time: String,

    /// Resolved latitude
    pub latitude: f64,

    /// Resolved longitude
    pub longitude: f64,
}

impl From<&RouteEndpoint> for EndpointView {
    fn from(endpoint: &RouteEndpoint) -> Self {
        Self {
            location: endpoint.location.clone(),
            time: endpoint.time.to_string(),
            latitude: endpoint.coordinates.latitude(),
            longitude: endpoint.coordinates.longitude(),
        }
    }
}

/// A route in API responses.
#[derive(Debug, Serialize)]
pub struct RouteView {
    /// Batch-unique route id
    pub id: String,

    /// Transport mode
    pub mode: TransportMode,

    /// Operating company
    pub operator: String,

    /// Flight/train/bus identifier
    pub vehicle_id: String,

    /// Departure end
    pub departure: EndpointView,

    /// Arrival end
    pub arrival: EndpointView,

    /// Travel time in minutes
    pub duration_mins: u32,

    /// Price in whole currency units
    pub price: u32,

    /// Number of transfers
    pub transfers: u32,

    /// Remaining seats, when known
    pub seats_available: Option<u32>,

    /// Rating in [0, 5]
    pub rating: f64,

    /// Special labels ("discount", ...)
    pub badges: Vec<String>,
}

impl From<&Route> for RouteView {
    fn from(route: &Route) -> Self {
        Self {
            id: route.id.clone(),
            mode: route.mode,
            operator: route.operator.clone(),
            vehicle_id: route.vehicle_id.clone(),
            departure: EndpointView::from(&route.departure),
            arrival: EndpointView::from(&route.arrival),
            duration_mins: route.duration_mins,
            price: route.price,
            transfers: route.transfers,
            seats_available: route.seats_available,
            rating: route.rating,
            badges: route.badges.clone(),
        }
    }
}

/// Response carrying a route list.
#[derive(Debug, Serialize)]
pub struct RoutesResponse {
    pub routes: Vec<RouteView>,
}

/// Query string for the route listing.
#[derive(Debug, Deserialize)]
pub struct RouteListQuery {
    /// Sort preference; when present it becomes the stored preference
    pub sort: Option<SortType>,
}

/// Request to select a route by id.
#[derive(Debug, Deserialize)]
pub struct SelectRouteRequest {
    pub route_id: String,
}

/// Request to add an itinerary item.
#[derive(Debug, Deserialize)]
pub struct AddItineraryRequest {
    /// Caller-assigned unique id
    pub id: String,

    /// 1-based day of the trip
    pub day: u32,

    /// Start time in HH:MM
    pub time: String,

    /// What the activity is
    pub title: String,

    /// Where it happens
    pub location: String,

    /// Expected length in minutes
    pub duration_mins: u32,

    /// Cost, when known
    pub cost: Option<u32>,

    /// Kind of activity
    pub activity_type: ActivityType,

    /// Optional map latitude
    pub latitude: Option<f64>,

    /// Optional map longitude
    pub longitude: Option<f64>,
}

/// An itinerary item in API responses.
#[derive(Debug, Serialize)]
pub struct ItineraryItemView {
    pub id: String,
    pub day: u32,
    /// Start time in HH:MM
    pub time: String,
    pub title: String,
    pub location: String,
    pub duration_mins: u32,
    pub cost: Option<u32>,
    pub activity_type: ActivityType,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<&ItineraryItem> for ItineraryItemView {
    fn from(item: &ItineraryItem) -> Self {
        Self {
            id: item.id.clone(),
            day: item.day,
            time: item.time.to_string(),
            title: item.title.clone(),
            location: item.location.clone(),
            duration_mins: item.duration_mins,
            cost: item.cost,
            activity_type: item.activity_type,
            latitude: item.coordinates.map(|c| c.latitude()),
            longitude: item.coordinates.map(|c| c.longitude()),
        }
    }
}

/// Response carrying an itinerary listing.
#[derive(Debug, Serialize)]
pub struct ItineraryResponse {
    pub items: Vec<ItineraryItemView>,
}

/// Query string for the itinerary listing.
#[derive(Debug, Deserialize)]
pub struct ItineraryListQuery {
    /// Restrict to one day when present
    pub day: Option<u32>,
}

/// Query string for a booking link.
#[derive(Debug, Deserialize)]
pub struct BookingQuery {
    pub mode: TransportMode,

    /// Operator name, used to pick between train booking sites
    #[serde(default)]
    pub operator: String,

    pub departure_city: String,
    pub destination_city: String,

    /// Travel date; defaults to today
    pub date: Option<NaiveDate>,
}

/// A booking link in API responses.
#[derive(Debug, Serialize)]
pub struct BookingView {
    pub url: String,
    pub site_name: String,
    pub prefilled: bool,
}

impl From<BookingLink> for BookingView {
    fn from(link: BookingLink) -> Self {
        Self {
            url: link.url,
            site_name: link.site_name,
            prefilled: link.prefilled,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
