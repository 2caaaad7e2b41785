//! Services module
//!
//! Este módulo contiene la lógica de negocio: el store de asignaciones
//! y los filtros de búsqueda sobre sus colecciones.

pub mod assignment_store;
pub mod filters;

pub use assignment_store::*;
pub use filters::*;
