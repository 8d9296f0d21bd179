//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use crate::ranking::select_best_trips;

use super::dto::{SelectTripsRequest, SelectTripsResponse, TrafficStatusResponse, TripWithId};
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/trips/select", post(select_trips))
        .route("/traffic/status", get(traffic_status))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Rank a candidate batch and attach traffic overlays to the winners.
async fn select_trips(
    State(state): State<AppState>,
    Json(request): Json<SelectTripsRequest>,
) -> Json<SelectTripsResponse> {
    let mut best = select_best_trips(request.trips);
    state.traffic.attach_traffic(&mut best).await;

    Json(SelectTripsResponse {
        trips: best.into_iter().map(TripWithId::new).collect(),
    })
}

/// Snapshot counters for monitoring.
async fn traffic_status(State(state): State<AppState>) -> Json<TrafficStatusResponse> {
    let snapshot = state.traffic.snapshot().await;
    Json(TrafficStatusResponse {
        configured: state.traffic.is_configured(),
        alerts: snapshot.alert_count(),
        jams: snapshot.jam_count(),
    })
}
