use serde::Deserialize;
use std::collections::HashSet;
use validator::Validate;

use crate::models::{Availability, NewDriver};
use crate::services::filters::DriverFilter;
use crate::utils::errors::{bad_request_error, AppError};
use crate::utils::validation::{normalize_optional, validate_not_empty};

// Request para crear un conductor
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDriverRequest {
    #[validate(custom = "validate_not_empty", length(max = 100))]
    pub name: String,
    // Por defecto Available, como el formulario
    pub availability: Option<Availability>,
    pub photo: Option<String>,
}

impl CreateDriverRequest {
    pub fn into_new_driver(self) -> NewDriver {
        NewDriver {
            name: self.name.trim().to_string(),
            availability: self.availability.unwrap_or(Availability::Available),
            photo: normalize_optional(self.photo),
        }
    }
}

// Query de búsqueda: ?search=ahmed&availability=Available,Unavailable
#[derive(Debug, Default, Deserialize)]
pub struct DriverQuery {
    pub search: Option<String>,
    pub availability: Option<String>,
}

impl TryFrom<DriverQuery> for DriverFilter {
    type Error = AppError;

    fn try_from(query: DriverQuery) -> Result<Self, Self::Error> {
        let availability = query
            .availability
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<Availability>().map_err(|e| bad_request_error(&e)))
            .collect::<Result<HashSet<_>, _>>()?;

        Ok(DriverFilter {
            text_query: query.search.unwrap_or_default(),
            availability,
        })
    }
}
