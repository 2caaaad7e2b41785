//! Routers de la API
//!
//! Cada módulo expone un `create_*_router`; `create_app` los monta con
//! CORS y tracing de requests.

pub mod driver_routes;
pub mod fleet_routes;
pub mod route_routes;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use crate::state::AppState;

/// Crear la aplicación completa a partir del estado
pub fn create_app(state: AppState) -> Router {
    let cors = if state.config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(state.config.cors_origins.clone())
    };

    Router::new()
        .nest("/drivers", driver_routes::create_driver_router())
        .nest("/routes", route_routes::create_route_router())
        .merge(fleet_routes::create_fleet_router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
