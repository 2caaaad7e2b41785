//! Filtros de conductores y rutas
//!
//! Funciones de solo lectura sobre las colecciones del store.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;

use crate::models::{Availability, Driver, Route};

/// Filtro de conductores: texto sobre el nombre + conjunto de estados
#[derive(Debug, Clone, Default)]
pub struct DriverFilter {
    pub text_query: String,
    pub availability: HashSet<Availability>,
}

/// Estado de asignación para filtrar rutas
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum RouteStatus {
    #[default]
    All,
    Assigned,
    Unassigned,
}

impl FromStr for RouteStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(RouteStatus::All),
            "assigned" => Ok(RouteStatus::Assigned),
            "unassigned" => Ok(RouteStatus::Unassigned),
            other => Err(format!("unknown route status '{}'", other)),
        }
    }
}

/// Filtro de rutas: texto sobre nombre/origen/destino + estado
#[derive(Debug, Clone, Default)]
pub struct RouteFilter {
    pub text_query: String,
    pub status: RouteStatus,
}

fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

impl DriverFilter {
    pub fn matches(&self, driver: &Driver) -> bool {
        let query = self.text_query.to_lowercase();
        let text_ok = query.is_empty() || contains_ignore_case(&driver.name, &query);
        let availability_ok =
            self.availability.is_empty() || self.availability.contains(&driver.availability);
        text_ok && availability_ok
    }
}

impl RouteFilter {
    pub fn matches(&self, route: &Route) -> bool {
        let query = self.text_query.to_lowercase();
        let text_ok = query.is_empty()
            || contains_ignore_case(&route.name, &query)
            || contains_ignore_case(&route.start_location, &query)
            || contains_ignore_case(&route.end_location, &query);
        let status_ok = match self.status {
            RouteStatus::All => true,
            RouteStatus::Assigned => route.is_assigned(),
            RouteStatus::Unassigned => !route.is_assigned(),
        };
        text_ok && status_ok
    }
}

pub fn filter_drivers(drivers: &[Driver], filter: &DriverFilter) -> Vec<Driver> {
    drivers.iter().filter(|d| filter.matches(d)).cloned().collect()
}

pub fn filter_routes(routes: &[Route], filter: &RouteFilter) -> Vec<Route> {
    routes.iter().filter(|r| filter.matches(r)).cloned().collect()
}
