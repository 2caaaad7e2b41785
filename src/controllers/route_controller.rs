use std::sync::Arc;
use tokio::sync::RwLock;
use validator::Validate;

use crate::dto::route_dto::{
    AssignmentResponse, CreateRouteRequest, ReassignResponse, RouteDetailResponse, RouteQuery,
    UnassignResponse,
};
use crate::models::Route;
use crate::services::assignment_store::AssignmentStore;
use crate::services::filters::{filter_routes, RouteFilter};
use crate::utils::errors::{conflict_error, AppError};

pub struct RouteController {
    store: Arc<RwLock<AssignmentStore>>,
}

impl RouteController {
    pub fn new(store: Arc<RwLock<AssignmentStore>>) -> Self {
        Self { store }
    }

    pub async fn create(&self, request: CreateRouteRequest) -> Result<Route, AppError> {
        request.validate()?;

        let route = self.store.write().await.add_route(request.into_new_route());
        log::info!(
            "🛣️ Ruta creada: {} ({} → {}, {})",
            route.name,
            route.start_location,
            route.end_location,
            route.id
        );
        Ok(route)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<RouteDetailResponse, AppError> {
        let store = self.store.read().await;
        let route = store.route(id)?;
        Ok(RouteDetailResponse {
            route: route.clone(),
            driver: store.driver_for_route(route).cloned(),
        })
    }

    pub async fn list(&self, query: RouteQuery) -> Result<Vec<Route>, AppError> {
        let filter = RouteFilter::try_from(query)?;
        let store = self.store.read().await;
        Ok(filter_routes(store.routes(), &filter))
    }

    /// Asigna un conductor a una ruta libre. El conductor debe estar
    /// `Available`; para sustituir un conductor se usa `reassign`.
    pub async fn assign(
        &self,
        route_id: &str,
        driver_id: &str,
    ) -> Result<AssignmentResponse, AppError> {
        let mut store = self.store.write().await;

        let route = store.route(route_id)?;
        let driver = store.driver(driver_id)?;

        if let Some(current) = route.assigned_driver_id.as_deref() {
            return Err(conflict_error(format!(
                "Route '{}' already has driver '{}' assigned; use reassign",
                route_id, current
            )));
        }
        if !driver.is_available() {
            return Err(conflict_error(format!(
                "Driver '{}' is {} and cannot be assigned",
                driver_id, driver.availability
            )));
        }

        let assignment = store.assign(route_id, driver_id)?;
        log::info!(
            "✅ Conductor {} asignado a la ruta {}",
            assignment.driver.name,
            assignment.route.name
        );
        Ok(assignment.into())
    }

    pub async fn unassign(&self, route_id: &str) -> Result<UnassignResponse, AppError> {
        let unassignment = self.store.write().await.unassign(route_id)?;

        match &unassignment.released_driver {
            Some(driver) => log::info!(
                "🔓 Conductor {} liberado de la ruta {}",
                driver.name,
                unassignment.route.name
            ),
            None => log::debug!("Ruta {} ya estaba sin conductor", unassignment.route.name),
        }
        Ok(unassignment.into())
    }

    /// Unassign + assign bajo un mismo write lock
    pub async fn reassign(
        &self,
        route_id: &str,
        driver_id: &str,
    ) -> Result<ReassignResponse, AppError> {
        let mut store = self.store.write().await;

        let route = store.route(route_id)?;
        let driver = store.driver(driver_id)?;

        let already_on_route = route.assigned_driver_id.as_deref() == Some(driver_id);
        if !already_on_route && !driver.is_available() {
            return Err(conflict_error(format!(
                "Driver '{}' is {} and cannot be assigned",
                driver_id, driver.availability
            )));
        }

        let reassignment = store.reassign(route_id, driver_id)?;
        log::info!(
            "🔁 Ruta {} reasignada a {} (antes: {})",
            reassignment.route.name,
            reassignment.driver.name,
            reassignment
                .previous_driver
                .as_ref()
                .map(|d| d.name.as_str())
                .unwrap_or("sin conductor")
        );
        Ok(reassignment.into())
    }
}
