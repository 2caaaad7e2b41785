//! Store de asignaciones
//!
//! Dueño de las colecciones de conductores y rutas. Es el único lugar que
//! modifica las referencias cruzadas `Route::assigned_driver_id` y
//! `Driver::assigned_route`, manteniéndolas simétricas.
//!
//! El store no revisa la disponibilidad del conductor al asignar: ese
//! contrato lo cumple quien lo llama (ver `RouteController`).

use serde::Serialize;

use crate::models::catalog::{DEMO_ASSIGNMENTS, DEMO_DRIVERS, DEMO_ROUTES, ROUTE_PRESETS};
use crate::models::{Availability, Driver, NewDriver, NewRoute, Route};
use crate::utils::errors::{not_found_error, AppResult};

/// Resultado de una asignación: ruta y conductor tras el cambio
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub route: Route,
    pub driver: Driver,
}

/// Resultado de liberar una ruta
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unassignment {
    pub route: Route,
    pub released_driver: Option<Driver>,
}

/// Resultado de una reasignación atómica
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reassignment {
    pub route: Route,
    pub driver: Driver,
    pub previous_driver: Option<Driver>,
}

/// Conteos agregados de la flota
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FleetStats {
    pub total_drivers: usize,
    pub available_drivers: usize,
    pub assigned_drivers: usize,
    pub unavailable_drivers: usize,
    pub total_routes: usize,
    pub assigned_routes: usize,
    pub unassigned_routes: usize,
}

/// Violación de consistencia detectada por `check_consistency`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsistencyViolation {
    /// La ruta apunta a un conductor que no apunta de vuelta
    AsymmetricRoute { route_id: String, driver_id: String },
    /// El conductor apunta a una ruta que no apunta de vuelta
    AsymmetricDriver { driver_id: String, route_id: String },
    /// `Assigned` sin ruta, o ruta sin `Assigned`
    AvailabilityMismatch { driver_id: String },
    /// Un conductor referenciado por más de una ruta
    DriverOnManyRoutes { driver_id: String },
}

impl std::fmt::Display for ConsistencyViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConsistencyViolation::AsymmetricRoute { route_id, driver_id } => write!(
                f,
                "route '{}' references driver '{}' which does not reference it back",
                route_id, driver_id
            ),
            ConsistencyViolation::AsymmetricDriver { driver_id, route_id } => write!(
                f,
                "driver '{}' references route '{}' which does not reference it back",
                driver_id, route_id
            ),
            ConsistencyViolation::AvailabilityMismatch { driver_id } => write!(
                f,
                "driver '{}' availability does not match its assigned route",
                driver_id
            ),
            ConsistencyViolation::DriverOnManyRoutes { driver_id } => {
                write!(f, "driver '{}' is referenced by more than one route", driver_id)
            }
        }
    }
}

/// Store en memoria de conductores y rutas
#[derive(Debug, Default)]
pub struct AssignmentStore {
    drivers: Vec<Driver>,
    routes: Vec<Route>,
    next_driver_id: u64,
    next_route_id: u64,
}

impl AssignmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store precargado con los datos de demostración
    pub fn with_demo_data() -> Self {
        let mut store = Self::new();

        let driver_ids: Vec<String> = DEMO_DRIVERS
            .iter()
            .map(|(name, available)| {
                let availability = if *available {
                    Availability::Available
                } else {
                    Availability::Unavailable
                };
                store
                    .add_driver(NewDriver {
                        name: name.to_string(),
                        availability,
                        photo: None,
                    })
                    .id
            })
            .collect();

        let route_ids: Vec<String> = DEMO_ROUTES
            .iter()
            .map(|(preset, time)| {
                let p = &ROUTE_PRESETS[*preset];
                store
                    .add_route(NewRoute {
                        name: p.name.to_string(),
                        start_location: p.start_location.to_string(),
                        end_location: p.end_location.to_string(),
                        time: time.to_string(),
                    })
                    .id
            })
            .collect();

        for (route, driver) in DEMO_ASSIGNMENTS {
            // Los índices son constantes del catálogo y siempre existen
            if let Err(e) = store.assign(&route_ids[route], &driver_ids[driver]) {
                log::error!("❌ Datos de demostración inconsistentes: {}", e);
            }
        }

        store
    }

    fn next_id(counter: &mut u64) -> String {
        *counter += 1;
        counter.to_string()
    }

    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn driver(&self, id: &str) -> AppResult<&Driver> {
        self.drivers
            .iter()
            .find(|d| d.id == id)
            .ok_or_else(|| not_found_error("Driver", id))
    }

    pub fn route(&self, id: &str) -> AppResult<&Route> {
        self.routes
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| not_found_error("Route", id))
    }

    fn driver_index(&self, id: &str) -> AppResult<usize> {
        self.drivers
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| not_found_error("Driver", id))
    }

    fn route_index(&self, id: &str) -> AppResult<usize> {
        self.routes
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| not_found_error("Route", id))
    }

    /// Conductor asignado a la ruta, si lo hay
    pub fn driver_for_route(&self, route: &Route) -> Option<&Driver> {
        route
            .assigned_driver_id
            .as_deref()
            .and_then(|id| self.drivers.iter().find(|d| d.id == id))
    }

    /// Conductores que se pueden ofrecer para una asignación
    pub fn available_drivers(&self) -> Vec<Driver> {
        self.drivers
            .iter()
            .filter(|d| d.is_available())
            .cloned()
            .collect()
    }

    pub fn add_driver(&mut self, data: NewDriver) -> Driver {
        let driver = Driver {
            id: Self::next_id(&mut self.next_driver_id),
            name: data.name,
            availability: data.availability,
            photo: data.photo,
            assigned_route: None,
        };
        self.drivers.push(driver.clone());
        driver
    }

    pub fn add_route(&mut self, data: NewRoute) -> Route {
        let route = Route {
            id: Self::next_id(&mut self.next_route_id),
            name: data.name,
            start_location: data.start_location,
            end_location: data.end_location,
            time: data.time,
            assigned_driver_id: None,
        };
        self.routes.push(route.clone());
        route
    }

    /// Vincula conductor y ruta. No libera vínculos previos de ninguno de
    /// los dos: para sustituir una asignación usar `reassign`.
    pub fn assign(&mut self, route_id: &str, driver_id: &str) -> AppResult<Assignment> {
        let route_idx = self.route_index(route_id)?;
        let driver_idx = self.driver_index(driver_id)?;

        let route = &mut self.routes[route_idx];
        route.assigned_driver_id = Some(driver_id.to_string());

        let driver = &mut self.drivers[driver_idx];
        driver.availability = Availability::Assigned;
        driver.assigned_route = Some(route_id.to_string());

        Ok(Assignment {
            route: self.routes[route_idx].clone(),
            driver: self.drivers[driver_idx].clone(),
        })
    }

    /// Libera la ruta y deja al conductor `Available`. Sin efecto si la
    /// ruta no tenía conductor.
    pub fn unassign(&mut self, route_id: &str) -> AppResult<Unassignment> {
        let route_idx = self.route_index(route_id)?;

        let released_driver = match self.routes[route_idx].assigned_driver_id.take() {
            Some(driver_id) => self
                .drivers
                .iter_mut()
                .find(|d| d.id == driver_id)
                .map(|driver| {
                    driver.availability = Availability::Available;
                    driver.assigned_route = None;
                    driver.clone()
                }),
            None => None,
        };

        Ok(Unassignment {
            route: self.routes[route_idx].clone(),
            released_driver,
        })
    }

    /// Unassign + assign como una sola operación. Se validan ambos ids
    /// antes de tocar nada, así un id desconocido no deja la ruta liberada.
    pub fn reassign(&mut self, route_id: &str, driver_id: &str) -> AppResult<Reassignment> {
        self.route_index(route_id)?;
        self.driver_index(driver_id)?;

        let previous_driver = self.unassign(route_id)?.released_driver;
        let Assignment { route, driver } = self.assign(route_id, driver_id)?;

        // Si el conductor anterior es el mismo, ya no está "liberado"
        let previous_driver = previous_driver.filter(|d| d.id != driver.id);

        Ok(Reassignment {
            route,
            driver,
            previous_driver,
        })
    }

    pub fn stats(&self) -> FleetStats {
        let count = |a: Availability| self.drivers.iter().filter(|d| d.availability == a).count();
        let assigned_routes = self.routes.iter().filter(|r| r.is_assigned()).count();

        FleetStats {
            total_drivers: self.drivers.len(),
            available_drivers: count(Availability::Available),
            assigned_drivers: count(Availability::Assigned),
            unavailable_drivers: count(Availability::Unavailable),
            total_routes: self.routes.len(),
            assigned_routes,
            unassigned_routes: self.routes.len() - assigned_routes,
        }
    }

    /// Verifica simetría de referencias, disponibilidad coherente y que
    /// ningún conductor esté en dos rutas. Devuelve la primera violación.
    pub fn check_consistency(&self) -> Result<(), ConsistencyViolation> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.routes.len());

        for route in &self.routes {
            let Some(driver_id) = route.assigned_driver_id.as_deref() else {
                continue;
            };

            if seen.contains(&driver_id) {
                return Err(ConsistencyViolation::DriverOnManyRoutes {
                    driver_id: driver_id.to_string(),
                });
            }
            seen.push(driver_id);

            let linked_back = self.drivers.iter().any(|d| {
                d.id == driver_id && d.assigned_route.as_deref() == Some(route.id.as_str())
            });
            if !linked_back {
                return Err(ConsistencyViolation::AsymmetricRoute {
                    route_id: route.id.clone(),
                    driver_id: driver_id.to_string(),
                });
            }
        }

        for driver in &self.drivers {
            if (driver.availability == Availability::Assigned) != driver.assigned_route.is_some() {
                return Err(ConsistencyViolation::AvailabilityMismatch {
                    driver_id: driver.id.clone(),
                });
            }

            if let Some(route_id) = driver.assigned_route.as_deref() {
                let linked_back = self.routes.iter().any(|r| {
                    r.id == route_id && r.assigned_driver_id.as_deref() == Some(driver.id.as_str())
                });
                if !linked_back {
                    return Err(ConsistencyViolation::AsymmetricDriver {
                        driver_id: driver.id.clone(),
                        route_id: route_id.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}
