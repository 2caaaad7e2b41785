//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;
use tokio::sync::{RwLock, RwLockReadGuard};

use crate::config::environment::EnvironmentConfig;
use crate::services::assignment_store::AssignmentStore;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub store: Arc<RwLock<AssignmentStore>>,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, store: AssignmentStore) -> Self {
        Self {
            config,
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Estado inicial según la configuración (con o sin datos de demo)
    pub fn from_config(config: EnvironmentConfig) -> Self {
        let store = if config.seed_demo_data {
            log::info!("🌱 Cargando datos de demostración");
            AssignmentStore::with_demo_data()
        } else {
            AssignmentStore::new()
        };
        Self::new(config, store)
    }

    pub async fn read_store(&self) -> RwLockReadGuard<'_, AssignmentStore> {
        self.store.read().await
    }
}
