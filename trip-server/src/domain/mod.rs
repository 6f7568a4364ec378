//! Domain types for the trip planner.
//!
//! This module contains the core domain model types that represent
//! validated travel data. All types enforce their invariants at
//! construction time, so code that receives these types can trust
//! their validity.

mod coords;
mod country;
mod itinerary;
mod mode;
mod route;
mod time;
mod trip;

pub use coords::{Coordinates, InvalidCoordinates, distance_km};
pub use country::{CountryCode, InvalidCountryCode};
pub use itinerary::{ActivityType, InvalidItineraryItem, ItineraryItem};
pub use mode::TransportMode;
pub use route::{Route, RouteEndpoint};
pub use time::{TimeError, TimeOfDay};
pub use trip::{InvalidTripQuery, SortType, TripQuery};
