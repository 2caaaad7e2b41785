//! Fleet assignment service
//!
//! Store en memoria de conductores y rutas con asignaciones simétricas,
//! expuesto como API HTTP con Axum.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use routes::create_app;
pub use state::AppState;
