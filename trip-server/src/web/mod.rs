//! Web layer for the trip planner.
//!
//! Provides HTTP endpoints for trip search, route selection, itinerary
//! editing, and booking links.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
