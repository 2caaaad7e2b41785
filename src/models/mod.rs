//! Modelos del sistema
//!
//! Este módulo contiene las entidades en memoria: conductores, rutas
//! y el catálogo de rutas predefinidas.

pub mod catalog;
pub mod driver;
pub mod route;

pub use driver::{Availability, Driver, NewDriver};
pub use route::{NewRoute, Route};
