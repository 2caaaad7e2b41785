//! Modelo de Driver
//!
//! Este módulo contiene el struct Driver y su estado de disponibilidad.
//! La relación con Route se mantiene desde el `AssignmentStore`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Disponibilidad del conductor
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Availability {
    Available,
    Assigned,
    Unavailable,
}

impl Availability {
    pub const ALL: [Availability; 3] = [
        Availability::Available,
        Availability::Assigned,
        Availability::Unavailable,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Available => "Available",
            Availability::Assigned => "Assigned",
            Availability::Unavailable => "Unavailable",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Availability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Availability::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown availability '{}'", s.trim()))
    }
}

/// Driver principal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: String,
    pub name: String,
    pub availability: Availability,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_route: Option<String>,
}

/// Datos necesarios para dar de alta un conductor
#[derive(Debug, Clone)]
pub struct NewDriver {
    pub name: String,
    pub availability: Availability,
    pub photo: Option<String>,
}

impl Driver {
    pub fn is_available(&self) -> bool {
        self.availability == Availability::Available
    }
}
