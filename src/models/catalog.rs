//! Catálogo de rutas predefinidas y ciudades
//!
//! Datos estáticos que los clientes ofrecen al crear rutas, más los
//! datos de demostración con los que arranca el servicio.

use serde::Serialize;

/// Ruta predefinida (nombre + origen + destino)
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RoutePreset {
    pub name: &'static str,
    pub start_location: &'static str,
    pub end_location: &'static str,
}

const fn preset(
    name: &'static str,
    start_location: &'static str,
    end_location: &'static str,
) -> RoutePreset {
    RoutePreset {
        name,
        start_location,
        end_location,
    }
}

pub static ROUTE_PRESETS: [RoutePreset; 10] = [
    preset("Cairo Express", "Cairo", "Alexandria"),
    preset("Giza Luxury", "Giza", "Luxor"),
    preset("Capital Route", "Cairo", "Aswan"),
    preset("Port Connection", "Port Said", "Ismailia"),
    preset("Red Sea Express", "Cairo", "Hurghada"),
    preset("Nile Route", "Cairo", "Edfu"),
    preset("Desert Highway", "Alexandria", "Marsa Matrouh"),
    preset("Delta Connection", "Cairo", "Mansoura"),
    preset("Southern Express", "Luxor", "Abu Simbel"),
    preset("Sinai Route", "Suez", "Sharm El Sheikh"),
];

pub static CITIES: [&str; 22] = [
    "Cairo",
    "Alexandria",
    "Giza",
    "Luxor",
    "Aswan",
    "Port Said",
    "Ismailia",
    "Hurghada",
    "Edfu",
    "Marsa Matrouh",
    "Mansoura",
    "Abu Simbel",
    "Suez",
    "Sharm El Sheikh",
    "Zagazig",
    "Tanta",
    "Faiyum",
    "Beni Suef",
    "Minya",
    "Sohag",
    "Qena",
    "Kom Ombo",
];

/// Conductores de demostración: (nombre, disponible)
pub(crate) const DEMO_DRIVERS: [(&str, bool); 4] = [
    ("Ahmed Hassan", true),
    ("Youssef Mohamed", true),
    ("Omar Ali", true),
    ("Mahmoud Ibrahim", false),
];

/// Rutas de demostración: (preset, hora de salida)
pub(crate) const DEMO_ROUTES: [(usize, &str); 4] =
    [(0, "08:00"), (1, "10:30"), (2, "14:00"), (3, "16:45")];

/// Asignaciones de demostración: (índice de ruta, índice de conductor)
pub(crate) const DEMO_ASSIGNMENTS: [(usize, usize); 1] = [(0, 1)];
