use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::route_controller::RouteController;
use crate::dto::route_dto::{
    AssignDriverRequest, AssignmentResponse, CreateRouteRequest, ReassignResponse,
    RouteDetailResponse, RouteQuery, UnassignResponse,
};
use crate::models::catalog::{RoutePreset, ROUTE_PRESETS};
use crate::models::Route;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::AppJson;

pub fn create_route_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_routes).post(create_route))
        .route("/presets", get(list_presets))
        .route("/:id", get(get_route))
        .route("/:id/assign", post(assign_driver))
        .route("/:id/unassign", post(unassign_driver))
        .route("/:id/reassign", post(reassign_driver))
}

async fn create_route(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateRouteRequest>,
) -> Result<(StatusCode, Json<Route>), AppError> {
    let controller = RouteController::new(state.store.clone());
    let route = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(route)))
}

async fn list_routes(
    State(state): State<AppState>,
    Query(query): Query<RouteQuery>,
) -> Result<Json<Vec<Route>>, AppError> {
    let controller = RouteController::new(state.store.clone());
    let routes = controller.list(query).await?;
    Ok(Json(routes))
}

async fn list_presets() -> Json<&'static [RoutePreset]> {
    Json(&ROUTE_PRESETS[..])
}

async fn get_route(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RouteDetailResponse>, AppError> {
    let controller = RouteController::new(state.store.clone());
    let response = controller.get_by_id(&id).await?;
    Ok(Json(response))
}

async fn assign_driver(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(request): AppJson<AssignDriverRequest>,
) -> Result<Json<AssignmentResponse>, AppError> {
    let controller = RouteController::new(state.store.clone());
    let response = controller.assign(&id, &request.driver_id).await?;
    Ok(Json(response))
}

async fn unassign_driver(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UnassignResponse>, AppError> {
    let controller = RouteController::new(state.store.clone());
    let response = controller.unassign(&id).await?;
    Ok(Json(response))
}

async fn reassign_driver(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(request): AppJson<AssignDriverRequest>,
) -> Result<Json<ReassignResponse>, AppError> {
    let controller = RouteController::new(state.store.clone());
    let response = controller.reassign(&id, &request.driver_id).await?;
    Ok(Json(response))
}
