//! Controllers
//!
//! Capa entre los handlers HTTP y el store: valida requests, aplica los
//! contratos del llamante y toma el lock adecuado.

pub mod driver_controller;
pub mod route_controller;
