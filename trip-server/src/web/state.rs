//! Application state for the web layer.

use std::sync::Arc;

use crate::store::TripStore;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Trip session store, which owns the geocoder.
    pub store: Arc<TripStore>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(store: TripStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
