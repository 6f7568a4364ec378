//! Trip session state.
//!
//! Holds the current trip query, the synthesized route list, the selected
//! route, the sort preference, and the itinerary behind one lock. This is
//! per-process state for a single planning session, not a database.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::RwLock;
use tracing::info;

use crate::domain::{ItineraryItem, Route, SortType, TripQuery, distance_km};
use crate::geocode::Geocoder;
use crate::synth::synthesize;

/// Errors from itinerary mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Itinerary operations require a trip query to bound the day range.
    #[error("no trip has been searched yet")]
    NoTripQuery,

    /// The item's day falls outside the current trip.
    #[error("day {day} is outside the {duration_days}-day trip")]
    DayOutOfRange { day: u32, duration_days: u32 },

    /// An item with this id already exists.
    #[error("itinerary item {0:?} already exists")]
    DuplicateItemId(String),
}

#[derive(Default)]
struct TripState {
    query: Option<TripQuery>,
    routes: Vec<Route>,
    selected: Option<Route>,
    sort: SortType,
    itinerary: Vec<ItineraryItem>,
}

/// Thread-safe trip planning state.
///
/// Search replaces the route list wholesale; everything else reads or
/// mutates in place. Concurrent searches race benignly: the write lock
/// serializes them and the last writer's batch wins, which can briefly
/// pair a selection from an earlier batch with a newer route list.
#[derive(Clone)]
pub struct TripStore {
    inner: Arc<RwLock<TripState>>,
    geocoder: Arc<Geocoder>,
}

impl TripStore {
    /// Create an empty store over a geocoder.
    pub fn new(geocoder: Geocoder) -> Self {
        Self {
            inner: Arc::new(RwLock::new(TripState::default())),
            geocoder: Arc::new(geocoder),
        }
    }

    /// Run a trip search: resolve both cities, compute the distance, and
    /// synthesize a fresh route batch.
    ///
    /// The stored query and route list are replaced; the selected route
    /// and itinerary are left untouched. Returns the new batch.
    pub async fn search(&self, query: TripQuery) -> Vec<Route> {
        let mut rng = StdRng::from_os_rng();
        self.search_with_rng(query, &mut rng).await
    }

    /// Deterministic search variant with a caller-supplied seed.
    pub async fn search_seeded(&self, query: TripQuery, seed: u64) -> Vec<Route> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.search_with_rng(query, &mut rng).await
    }

    async fn search_with_rng(&self, query: TripQuery, rng: &mut impl Rng) -> Vec<Route> {
        let (departure, arrival) = self
            .geocoder
            .resolve_pair(query.departure_city(), query.destination_city())
            .await;

        let distance = distance_km(departure.coordinates, arrival.coordinates);
        let routes = synthesize(&query, &departure, &arrival, distance, rng);

        info!(
            departure = query.departure_city(),
            arrival = query.destination_city(),
            distance_km = distance,
            routes = routes.len(),
            "trip search complete"
        );

        let mut state = self.inner.write().await;
        state.query = Some(query);
        state.routes = routes.clone();
        routes
    }

    /// Replace the stored trip query without re-running a search.
    ///
    /// Existing routes, selection, and itinerary are kept; itinerary day
    /// bounds for later additions follow the new query.
    pub async fn set_trip_query(&self, query: TripQuery) {
        self.inner.write().await.query = Some(query);
    }

    /// The current trip query, if a search has run.
    pub async fn trip_query(&self) -> Option<TripQuery> {
        self.inner.read().await.query.clone()
    }

    /// Set the sort preference for the route list.
    pub async fn set_sort_type(&self, sort: SortType) {
        self.inner.write().await.sort = sort;
    }

    /// The current sort preference.
    pub async fn sort_type(&self) -> SortType {
        self.inner.read().await.sort
    }

    /// The route list ordered by the current sort preference.
    ///
    /// Price, duration, and transfers sort ascending; recommended sorts
    /// descending by blended score. All sorts are stable, so equal keys
    /// keep their synthesis order.
    pub async fn sorted_routes(&self) -> Vec<Route> {
        let state = self.inner.read().await;
        let mut routes = state.routes.clone();

        match state.sort {
            SortType::Price => routes.sort_by_key(|r| r.price),
            SortType::Duration => routes.sort_by_key(|r| r.duration_mins),
            SortType::Transfers => routes.sort_by_key(|r| r.transfers),
            SortType::Recommended => routes.sort_by(|a, b| {
                b.recommended_score().total_cmp(&a.recommended_score())
            }),
        }

        routes
    }

    /// Select a route from the current batch by id.
    ///
    /// Returns the selected route, or `None` if no route has that id.
    pub async fn select_route(&self, id: &str) -> Option<Route> {
        let mut state = self.inner.write().await;
        let route = state.routes.iter().find(|r| r.id == id)?.clone();
        state.selected = Some(route.clone());
        Some(route)
    }

    /// The currently selected route, if any.
    pub async fn selected_route(&self) -> Option<Route> {
        self.inner.read().await.selected.clone()
    }

    /// Add an itinerary item.
    ///
    /// Requires a searched trip; the item's day must fit the trip's
    /// duration and its id must be unused.
    pub async fn add_itinerary_item(&self, item: ItineraryItem) -> Result<(), StoreError> {
        let mut state = self.inner.write().await;

        let Some(query) = &state.query else {
            return Err(StoreError::NoTripQuery);
        };
        let duration_days = query.duration_days();
        if item.day > duration_days {
            return Err(StoreError::DayOutOfRange {
                day: item.day,
                duration_days,
            });
        }
        if state.itinerary.iter().any(|existing| existing.id == item.id) {
            return Err(StoreError::DuplicateItemId(item.id.clone()));
        }

        state.itinerary.push(item);
        Ok(())
    }

    /// Remove an itinerary item by id. Returns whether one was removed.
    pub async fn remove_itinerary_item(&self, id: &str) -> bool {
        let mut state = self.inner.write().await;
        let before = state.itinerary.len();
        state.itinerary.retain(|item| item.id != id);
        state.itinerary.len() < before
    }

    /// Itinerary items for one day, ordered by start time.
    pub async fn itinerary_by_day(&self, day: u32) -> Vec<ItineraryItem> {
        let state = self.inner.read().await;
        let mut items: Vec<ItineraryItem> = state
            .itinerary
            .iter()
            .filter(|item| item.day == day)
            .cloned()
            .collect();
        items.sort_by_key(|item| item.time.sort_key());
        items
    }

    /// All itinerary items, ordered by day then start time.
    pub async fn itinerary(&self) -> Vec<ItineraryItem> {
        let state = self.inner.read().await;
        let mut items = state.itinerary.clone();
        items.sort_by_key(|item| (item.day, item.time.sort_key()));
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::builtin_cities;
    use crate::domain::{ActivityType, TimeOfDay};
    use crate::geocode::{
        CachedGeocodeClient, GeocodeCacheConfig, GeocodeClient, GeocodeClientConfig,
    };
    use chrono::NaiveDate;

    fn offline_store() -> TripStore {
        let config = GeocodeClientConfig::new()
            .with_base_url("http://127.0.0.1:9")
            .with_timeout(1);
        let client = GeocodeClient::new(config).unwrap();
        let cached = CachedGeocodeClient::new(client, &GeocodeCacheConfig::default());
        TripStore::new(Geocoder::new(builtin_cities(), cached))
    }

    fn query(days: u32) -> TripQuery {
        let date = NaiveDate::from_ymd_opt(2026, 9, 12).unwrap();
        TripQuery::new("서울", "부산", date, days, 2).unwrap()
    }

    fn item(id: &str, day: u32, hhmm: &str) -> ItineraryItem {
        ItineraryItem::new(
            id,
            day,
            TimeOfDay::parse_hhmm(hhmm).unwrap(),
            "해운대",
            "부산",
            120,
            ActivityType::Sightseeing,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn search_stores_query_and_routes() {
        let store = offline_store();

        let routes = store.search_seeded(query(3), 42).await;
        assert_eq!(routes.len(), 7);
        assert_eq!(store.trip_query().await.unwrap().departure_city(), "서울");
        assert_eq!(store.sorted_routes().await.len(), 7);
    }

    #[tokio::test]
    async fn repeat_search_replaces_routes_but_keeps_selection() {
        let store = offline_store();

        store.search_seeded(query(3), 1).await;
        let selected = store.select_route("3").await.unwrap();

        let second = store.search_seeded(query(5), 2).await;
        assert_eq!(second.len(), 7);
        // Selection survives the new batch
        assert_eq!(store.selected_route().await.unwrap(), selected);
        assert_eq!(store.trip_query().await.unwrap().duration_days(), 5);
    }

    #[tokio::test]
    async fn price_sort_ascending() {
        let store = offline_store();
        store.search_seeded(query(3), 7).await;
        store.set_sort_type(SortType::Price).await;

        let routes = store.sorted_routes().await;
        for pair in routes.windows(2) {
            assert!(pair[0].price <= pair[1].price);
        }
    }

    #[tokio::test]
    async fn duration_sort_ascending() {
        let store = offline_store();
        store.search_seeded(query(3), 7).await;
        store.set_sort_type(SortType::Duration).await;

        let routes = store.sorted_routes().await;
        for pair in routes.windows(2) {
            assert!(pair[0].duration_mins <= pair[1].duration_mins);
        }
    }

    #[tokio::test]
    async fn recommended_sort_descending_by_score() {
        let store = offline_store();
        store.search_seeded(query(3), 7).await;
        // Default sort is recommended
        assert_eq!(store.sort_type().await, SortType::Recommended);

        let routes = store.sorted_routes().await;
        for pair in routes.windows(2) {
            assert!(pair[0].recommended_score() >= pair[1].recommended_score());
        }
    }

    #[tokio::test]
    async fn transfers_sort_is_stable() {
        let store = offline_store();
        store.search_seeded(query(3), 7).await;
        store.set_sort_type(SortType::Transfers).await;

        // All transfers are 0, so stable sort preserves synthesis order
        let ids: Vec<String> = store
            .sorted_routes()
            .await
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6", "7"]);
    }

    #[tokio::test]
    async fn select_unknown_id_returns_none() {
        let store = offline_store();
        store.search_seeded(query(3), 7).await;

        assert!(store.select_route("99").await.is_none());
        assert!(store.selected_route().await.is_none());
    }

    #[tokio::test]
    async fn set_trip_query_without_search() {
        let store = offline_store();

        store.set_trip_query(query(4)).await;
        assert_eq!(store.trip_query().await.unwrap().duration_days(), 4);
        // No search ran, so no routes exist yet
        assert!(store.sorted_routes().await.is_empty());
        // But itinerary additions are now bounded by the query
        assert!(store.add_itinerary_item(item("i1", 4, "09:00")).await.is_ok());
    }

    #[tokio::test]
    async fn itinerary_requires_search_first() {
        let store = offline_store();

        let err = store.add_itinerary_item(item("i1", 1, "09:00")).await;
        assert_eq!(err, Err(StoreError::NoTripQuery));
    }

    #[tokio::test]
    async fn itinerary_day_must_fit_trip() {
        let store = offline_store();
        store.search_seeded(query(3), 7).await;

        assert!(store.add_itinerary_item(item("i1", 3, "09:00")).await.is_ok());
        let err = store.add_itinerary_item(item("i2", 4, "09:00")).await;
        assert_eq!(
            err,
            Err(StoreError::DayOutOfRange {
                day: 4,
                duration_days: 3
            })
        );
    }

    #[tokio::test]
    async fn duplicate_item_id_rejected() {
        let store = offline_store();
        store.search_seeded(query(3), 7).await;

        store.add_itinerary_item(item("i1", 1, "09:00")).await.unwrap();
        let err = store.add_itinerary_item(item("i1", 2, "10:00")).await;
        assert_eq!(err, Err(StoreError::DuplicateItemId("i1".to_string())));
    }

    #[tokio::test]
    async fn itinerary_by_day_sorted_by_time() {
        let store = offline_store();
        store.search_seeded(query(3), 7).await;

        store.add_itinerary_item(item("b", 1, "14:30")).await.unwrap();
        store.add_itinerary_item(item("a", 1, "09:00")).await.unwrap();
        store.add_itinerary_item(item("c", 2, "08:00")).await.unwrap();

        let day1 = store.itinerary_by_day(1).await;
        let ids: Vec<&str> = day1.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);

        assert!(store.itinerary_by_day(3).await.is_empty());
    }

    #[tokio::test]
    async fn remove_itinerary_item_by_id() {
        let store = offline_store();
        store.search_seeded(query(3), 7).await;
        store.add_itinerary_item(item("i1", 1, "09:00")).await.unwrap();

        assert!(store.remove_itinerary_item("i1").await);
        assert!(!store.remove_itinerary_item("i1").await);
        assert!(store.itinerary().await.is_empty());
    }

    #[tokio::test]
    async fn full_itinerary_ordered_by_day_then_time() {
        let store = offline_store();
        store.search_seeded(query(3), 7).await;

        store.add_itinerary_item(item("d2", 2, "09:00")).await.unwrap();
        store.add_itinerary_item(item("d1-late", 1, "18:00")).await.unwrap();
        store.add_itinerary_item(item("d1-early", 1, "08:00")).await.unwrap();

        let ids: Vec<String> = store.itinerary().await.into_iter().map(|i| i.id).collect();
        assert_eq!(ids, ["d1-early", "d1-late", "d2"]);
    }
}
