use std::sync::Arc;
use tokio::sync::RwLock;
use validator::Validate;

use crate::dto::driver_dto::{CreateDriverRequest, DriverQuery};
use crate::models::{Availability, Driver};
use crate::services::assignment_store::AssignmentStore;
use crate::services::filters::{filter_drivers, DriverFilter};
use crate::utils::errors::{validation_error, AppError};

pub struct DriverController {
    store: Arc<RwLock<AssignmentStore>>,
}

impl DriverController {
    pub fn new(store: Arc<RwLock<AssignmentStore>>) -> Self {
        Self { store }
    }

    pub async fn create(&self, request: CreateDriverRequest) -> Result<Driver, AppError> {
        request.validate()?;

        // Solo se asigna a través de una ruta
        if request.availability == Some(Availability::Assigned) {
            return Err(validation_error(
                "availability",
                "New drivers must be Available or Unavailable",
            ));
        }

        let driver = self.store.write().await.add_driver(request.into_new_driver());
        log::info!("👤 Conductor creado: {} ({})", driver.name, driver.id);
        Ok(driver)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Driver, AppError> {
        let store = self.store.read().await;
        store.driver(id).cloned()
    }

    pub async fn list(&self, query: DriverQuery) -> Result<Vec<Driver>, AppError> {
        let filter = DriverFilter::try_from(query)?;
        let store = self.store.read().await;
        Ok(filter_drivers(store.drivers(), &filter))
    }

    /// Candidatos para el diálogo de asignación
    pub async fn list_available(&self) -> Vec<Driver> {
        self.store.read().await.available_drivers()
    }
}
