// Event HTTP routes

use axum::{extract::State, routing::get, Json, Router};
use flashboard_contracts::{Event, StatsSummary};
use flashboard_core::Catalog;
use std::sync::Arc;

use crate::error::ApiError;
use crate::services::EventService;

/// App state for event routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<EventService>,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            service: Arc::new(EventService::new(catalog)),
        }
    }
}

/// Create event routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/events", get(list_events))
        .route("/stats/summary", get(get_summary))
        .with_state(state)
}

/// GET /events - List all events in insertion order
#[utoipa::path(
    get,
    path = "/events",
    responses(
        (status = 200, description = "All events", body = Vec<Event>),
        (status = 500, description = "Internal server error", body = flashboard_contracts::ErrorBody),
    ),
    tag = "events"
)]
pub async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>, ApiError> {
    let events = state.service.list()?;
    Ok(Json(events))
}

/// GET /stats/summary - Aggregate totals and distinct venues
#[utoipa::path(
    get,
    path = "/stats/summary",
    responses(
        (status = 200, description = "Catalog summary", body = StatsSummary),
        (status = 500, description = "Internal server error", body = flashboard_contracts::ErrorBody),
    ),
    tag = "stats"
)]
pub async fn get_summary(State(state): State<AppState>) -> Result<Json<StatsSummary>, ApiError> {
    let summary = state.service.summary()?;
    Ok(Json(summary))
}
