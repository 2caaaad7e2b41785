//! Modelo de Route
//!
//! Este módulo contiene el struct Route. Los campos descriptivos no tienen
//! invariantes; `assigned_driver_id` lo gestiona el `AssignmentStore`.

use serde::{Deserialize, Serialize};

/// Route principal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: String,
    pub name: String,
    pub start_location: String,
    pub end_location: String,
    /// Hora de salida tal como la envía el cliente ("08:00")
    pub time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_driver_id: Option<String>,
}

/// Datos necesarios para crear una ruta
#[derive(Debug, Clone)]
pub struct NewRoute {
    pub name: String,
    pub start_location: String,
    pub end_location: String,
    pub time: String,
}

impl Route {
    pub fn is_assigned(&self) -> bool {
        self.assigned_driver_id.is_some()
    }
}
