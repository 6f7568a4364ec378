//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};

use crate::booking::booking_link;
use crate::domain::{Coordinates, ItineraryItem, TimeOfDay, TripQuery};
use crate::store::StoreError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/trip/search", post(search_trip))
        .route("/trip/routes", get(list_routes))
        .route("/trip/select", post(select_route))
        .route("/trip/selected", get(selected_route))
        .route("/itinerary", post(add_itinerary).get(list_itinerary))
        .route("/itinerary/:id", delete(remove_itinerary))
        .route("/booking", get(booking))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Search trips between two cities, replacing the stored route batch.
async fn search_trip(
    State(state): State<AppState>,
    Json(req): Json<SearchTripRequest>,
) -> Result<Json<RoutesResponse>, AppError> {
    let query = TripQuery::new(
        req.departure_city,
        req.destination_city,
        req.date,
        req.duration_days,
        req.travelers,
    )
    .map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;

    let routes = state.store.search(query).await;
    Ok(Json(RoutesResponse {
        routes: routes.iter().map(RouteView::from).collect(),
    }))
}

/// List the current route batch, optionally changing the sort preference.
async fn list_routes(
    State(state): State<AppState>,
    Query(query): Query<RouteListQuery>,
) -> Json<RoutesResponse> {
    if let Some(sort) = query.sort {
        state.store.set_sort_type(sort).await;
    }

    let routes = state.store.sorted_routes().await;
    Json(RoutesResponse {
        routes: routes.iter().map(RouteView::from).collect(),
    })
}

/// Select a route from the current batch.
async fn select_route(
    State(state): State<AppState>,
    Json(req): Json<SelectRouteRequest>,
) -> Result<Json<RouteView>, AppError> {
    let route = state
        .store
        .select_route(&req.route_id)
        .await
        .ok_or_else(|| AppError::NotFound {
            message: format!("no route with id {:?}", req.route_id),
        })?;

    Ok(Json(RouteView::from(&route)))
}

/// The currently selected route.
async fn selected_route(State(state): State<AppState>) -> Result<Json<RouteView>, AppError> {
    let route = state
        .store
        .selected_route()
        .await
        .ok_or_else(|| AppError::NotFound {
            message: "no route selected".to_string(),
        })?;

    Ok(Json(RouteView::from(&route)))
}

/// Add an itinerary item.
async fn add_itinerary(
    State(state): State<AppState>,
    Json(req): Json<AddItineraryRequest>,
) -> Result<(StatusCode, Json<ItineraryItemView>), AppError> {
    let time = TimeOfDay::parse_hhmm(&req.time).map_err(|e| AppError::BadRequest {
        message: format!("invalid time {:?}: {}", req.time, e),
    })?;

    let mut item = ItineraryItem::new(
        req.id,
        req.day,
        time,
        req.title,
        req.location,
        req.duration_mins,
        req.activity_type,
    )
    .map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;

    if let Some(cost) = req.cost {
        item = item.with_cost(cost);
    }
    match (req.latitude, req.longitude) {
        (Some(lat), Some(lon)) => {
            let coords = Coordinates::new(lat, lon).map_err(|e| AppError::BadRequest {
                message: e.to_string(),
            })?;
            item = item.with_coordinates(coords);
        }
        (None, None) => {}
        _ => {
            return Err(AppError::BadRequest {
                message: "latitude and longitude must be given together".to_string(),
            });
        }
    }

    let view = ItineraryItemView::from(&item);
    state.store.add_itinerary_item(item).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// List itinerary items, optionally for one day.
async fn list_itinerary(
    State(state): State<AppState>,
    Query(query): Query<ItineraryListQuery>,
) -> Json<ItineraryResponse> {
    let items = match query.day {
        Some(day) => state.store.itinerary_by_day(day).await,
        None => state.store.itinerary().await,
    };

    Json(ItineraryResponse {
        items: items.iter().map(ItineraryItemView::from).collect(),
    })
}

/// Remove an itinerary item by id.
async fn remove_itinerary(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if state.store.remove_itinerary_item(&id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound {
            message: format!("no itinerary item with id {:?}", id),
        })
    }
}

/// Booking link for a route's operator and city pair.
async fn booking(Query(query): Query<BookingQuery>) -> Json<BookingView> {
    let link = booking_link(
        query.mode,
        &query.operator,
        &query.departure_city,
        &query.destination_city,
        query.date,
    );
    Json(BookingView::from(link))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        tracing::warn!(status = %status, error = %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
