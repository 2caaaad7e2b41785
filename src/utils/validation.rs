//! Utilidades de validación
//!
//! Validadores custom para `validator` y normalización de campos de texto.

use validator::ValidationError;

/// Validar que un string no esté vacío (ignorando espacios)
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Recortar espacios y convertir strings vacíos en None
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
