use axum::{extract::State, routing::get, Json, Router};

use crate::dto::HealthResponse;
use crate::models::catalog::CITIES;
use crate::services::assignment_store::FleetStats;
use crate::state::AppState;

pub fn create_fleet_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/stats", get(fleet_stats))
        .route("/locations", get(list_locations))
}

/// Health check: incluye la verificación de consistencia del store
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let store = state.read_store().await;
    let violation = store.check_consistency().err();

    if let Some(v) = &violation {
        log::error!("❌ Store inconsistente: {}", v);
    }

    Json(HealthResponse {
        status: if violation.is_none() { "ok" } else { "degraded" },
        consistent: violation.is_none(),
        violation: violation.map(|v| v.to_string()),
        drivers: store.drivers().len(),
        routes: store.routes().len(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

async fn fleet_stats(State(state): State<AppState>) -> Json<FleetStats> {
    Json(state.read_store().await.stats())
}

async fn list_locations() -> Json<&'static [&'static str]> {
    Json(&CITIES[..])
}
