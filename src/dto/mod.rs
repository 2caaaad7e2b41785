//! DTOs de la API
//!
//! Requests, queries y responses JSON de los endpoints.

pub mod driver_dto;
pub mod route_dto;

use serde::Serialize;

/// Response del health check
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub consistent: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violation: Option<String>,
    pub drivers: usize,
    pub routes: usize,
    pub timestamp: String,
}
