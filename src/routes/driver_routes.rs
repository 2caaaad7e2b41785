use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::driver_controller::DriverController;
use crate::dto::driver_dto::{CreateDriverRequest, DriverQuery};
use crate::models::Driver;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::AppJson;

pub fn create_driver_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_drivers).post(create_driver))
        .route("/available", get(list_available_drivers))
        .route("/:id", get(get_driver))
}

async fn create_driver(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateDriverRequest>,
) -> Result<(StatusCode, Json<Driver>), AppError> {
    let controller = DriverController::new(state.store.clone());
    let driver = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(driver)))
}

async fn list_drivers(
    State(state): State<AppState>,
    Query(query): Query<DriverQuery>,
) -> Result<Json<Vec<Driver>>, AppError> {
    let controller = DriverController::new(state.store.clone());
    let drivers = controller.list(query).await?;
    Ok(Json(drivers))
}

async fn list_available_drivers(State(state): State<AppState>) -> Json<Vec<Driver>> {
    let controller = DriverController::new(state.store.clone());
    Json(controller.list_available().await)
}

async fn get_driver(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Driver>, AppError> {
    let controller = DriverController::new(state.store.clone());
    let driver = controller.get_by_id(&id).await?;
    Ok(Json(driver))
}
