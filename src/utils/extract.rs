//! Extractores propios
//!
//! `AppJson` es `axum::Json` con el rechazo convertido en `AppError`, así
//! los errores de body usan el mismo formato que el resto de la API.

use axum::extract::FromRequest;

use crate::utils::errors::AppError;

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
