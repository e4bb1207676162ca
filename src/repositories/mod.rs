//! Puertos de persistencia y sus adaptadores
//!
//! Los servicios dependen solo de estos traits. Hay dos implementaciones:
//! `memory` (tests y `STORAGE=memory`) y PostgreSQL (`STORAGE=postgres`).
//!
//! En todos los puertos `save` inserta cuando el `id` es `None` y actualiza
//! en caso contrario, devolviendo el registro almacenado.

pub mod client_repository;
pub mod memory;
pub mod sale_repository;
pub mod vehicle_repository;

use async_trait::async_trait;

use crate::models::{Client, Sale, Vehicle};
use crate::utils::errors::AppResult;

pub use client_repository::PgClientRepository;
pub use memory::{InMemoryClientRepository, InMemorySaleRepository, InMemoryVehicleRepository};
pub use sale_repository::PgSaleRepository;
pub use vehicle_repository::PgVehicleRepository;

#[async_trait]
pub trait VehicleRepository: Send + Sync {
    async fn save(&self, vehicle: Vehicle) -> AppResult<Vehicle>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Vehicle>>;

    async fn find_all(&self) -> AppResult<Vec<Vehicle>>;

    /// Solo vehículos con `available = true`
    async fn find_available(&self) -> AppResult<Vec<Vehicle>>;

    async fn delete(&self, id: i64) -> AppResult<()>;

    async fn exists_by_plate(&self, plate: &str) -> AppResult<bool>;
}

#[async_trait]
pub trait ClientRepository: Send + Sync {
    async fn save(&self, client: Client) -> AppResult<Client>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Client>>;

    async fn find_by_cpf(&self, cpf: &str) -> AppResult<Option<Client>>;
}

#[async_trait]
pub trait SaleRepository: Send + Sync {
    async fn save(&self, sale: Sale) -> AppResult<Sale>;

    async fn find_all(&self) -> AppResult<Vec<Sale>>;
}
