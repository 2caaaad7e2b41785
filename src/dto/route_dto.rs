use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{Driver, NewRoute, Route};
use crate::services::assignment_store::{Assignment, Reassignment, Unassignment};
use crate::services::filters::{RouteFilter, RouteStatus};
use crate::utils::errors::{bad_request_error, AppError};
use crate::utils::validation::validate_not_empty;

// Request para crear una ruta
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRouteRequest {
    #[validate(custom = "validate_not_empty", length(max = 100))]
    pub name: String,

    #[validate(custom = "validate_not_empty", length(max = 100))]
    pub start_location: String,

    #[validate(custom = "validate_not_empty", length(max = 100))]
    pub end_location: String,

    #[validate(custom = "validate_not_empty", length(max = 20))]
    pub time: String,
}

impl CreateRouteRequest {
    pub fn into_new_route(self) -> NewRoute {
        NewRoute {
            name: self.name.trim().to_string(),
            start_location: self.start_location.trim().to_string(),
            end_location: self.end_location.trim().to_string(),
            time: self.time.trim().to_string(),
        }
    }
}

// Request para asignar o reasignar un conductor
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignDriverRequest {
    pub driver_id: String,
}

// Query de búsqueda: ?search=cairo&status=Assigned
#[derive(Debug, Default, Deserialize)]
pub struct RouteQuery {
    pub search: Option<String>,
    pub status: Option<String>,
}

impl TryFrom<RouteQuery> for RouteFilter {
    type Error = AppError;

    fn try_from(query: RouteQuery) -> Result<Self, Self::Error> {
        let status = match query.status.as_deref() {
            Some(raw) => raw.parse::<RouteStatus>().map_err(|e| bad_request_error(&e))?,
            None => RouteStatus::All,
        };

        Ok(RouteFilter {
            text_query: query.search.unwrap_or_default(),
            status,
        })
    }
}

// Ruta con su conductor resuelto
#[derive(Debug, Serialize)]
pub struct RouteDetailResponse {
    pub route: Route,
    pub driver: Option<Driver>,
}

// Response de asignación
#[derive(Debug, Serialize)]
pub struct AssignmentResponse {
    pub route: Route,
    pub driver: Driver,
}

impl From<Assignment> for AssignmentResponse {
    fn from(a: Assignment) -> Self {
        Self {
            route: a.route,
            driver: a.driver,
        }
    }
}

// Response de desasignación (driver = null si la ruta estaba libre)
#[derive(Debug, Serialize)]
pub struct UnassignResponse {
    pub route: Route,
    pub driver: Option<Driver>,
}

impl From<Unassignment> for UnassignResponse {
    fn from(u: Unassignment) -> Self {
        Self {
            route: u.route,
            driver: u.released_driver,
        }
    }
}

// Response de reasignación
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReassignResponse {
    pub route: Route,
    pub driver: Driver,
    pub previous_driver: Option<Driver>,
}

impl From<Reassignment> for ReassignResponse {
    fn from(r: Reassignment) -> Self {
        Self {
            route: r.route,
            driver: r.driver,
            previous_driver: r.previous_driver,
        }
    }
}
