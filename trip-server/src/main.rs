use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use trip_server::directory::builtin_cities;
use trip_server::geocode::{
    CachedGeocodeClient, GeocodeCacheConfig, GeocodeClient, GeocodeClientConfig, Geocoder,
};
use trip_server::store::TripStore;
use trip_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Geocoding client with caching
    let client_config = GeocodeClientConfig::new();
    let client = GeocodeClient::new(client_config).expect("Failed to create geocoding client");
    let cached = CachedGeocodeClient::new(client, &GeocodeCacheConfig::default());

    // Directory-first geocoder over the built-in city table
    let directory = builtin_cities();
    println!("Loaded {} cities", directory.len());
    let geocoder = Geocoder::new(directory, cached);

    // Build app state
    let state = AppState::new(TripStore::new(geocoder));

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Trip Planner listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET    /health          - Health check");
    println!("  POST   /trip/search     - Search routes between two cities");
    println!("  GET    /trip/routes     - List routes (sort=price|duration|transfers|recommended)");
    println!("  POST   /trip/select     - Select a route by id");
    println!("  GET    /trip/selected   - Currently selected route");
    println!("  POST   /itinerary       - Add an itinerary item");
    println!("  GET    /itinerary       - List itinerary items (day=N to filter)");
    println!("  DELETE /itinerary/:id   - Remove an itinerary item");
    println!("  GET    /booking         - Booking link for a route");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
