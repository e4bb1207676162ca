//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. Aquí se conectan los puertos con sus
//! adaptadores concretos.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::{
    ClientRepository, InMemoryClientRepository, InMemorySaleRepository,
    InMemoryVehicleRepository, PgClientRepository, PgSaleRepository, PgVehicleRepository,
    SaleRepository, VehicleRepository,
};
use crate::services::{ClientService, SaleService, VehicleService};

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub vehicle_service: Arc<VehicleService>,
    pub client_service: Arc<ClientService>,
    pub sale_service: Arc<SaleService>,
}

impl AppState {
    /// Construir el estado a partir de cualquier combinación de repositorios
    pub fn new(
        config: EnvironmentConfig,
        vehicles: Arc<dyn VehicleRepository>,
        clients: Arc<dyn ClientRepository>,
        sales: Arc<dyn SaleRepository>,
    ) -> Self {
        Self {
            config,
            vehicle_service: Arc::new(VehicleService::new(vehicles.clone())),
            client_service: Arc::new(ClientService::new(clients)),
            sale_service: Arc::new(SaleService::new(sales, vehicles)),
        }
    }

    /// Estado con almacenamiento en memoria
    pub fn in_memory(config: EnvironmentConfig) -> Self {
        Self::new(
            config,
            Arc::new(InMemoryVehicleRepository::new()),
            Arc::new(InMemoryClientRepository::new()),
            Arc::new(InMemorySaleRepository::new()),
        )
    }

    /// Estado respaldado por PostgreSQL
    pub fn postgres(config: EnvironmentConfig, pool: PgPool) -> Self {
        Self::new(
            config,
            Arc::new(PgVehicleRepository::new(pool.clone())),
            Arc::new(PgClientRepository::new(pool.clone())),
            Arc::new(PgSaleRepository::new(pool)),
        )
    }
}
