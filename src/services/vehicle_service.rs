//! Servicio de vehículos
//!
//! Ciclo de vida de un vehículo: registro, consulta, actualización y baja.
//! La unicidad de placa se verifica a nivel de aplicación (check-then-insert).

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::models::Vehicle;
use crate::repositories::VehicleRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppResult};

pub struct VehicleService {
    repository: Arc<dyn VehicleRepository>,
}

impl VehicleService {
    pub fn new(repository: Arc<dyn VehicleRepository>) -> Self {
        Self { repository }
    }

    /// Registrar un vehículo nuevo: siempre disponible y con fecha de registro actual
    pub async fn register(&self, vehicle: Vehicle) -> AppResult<Vehicle> {
        vehicle.validate()?;

        if self.repository.exists_by_plate(&vehicle.plate).await? {
            return Err(conflict_error("Vehicle", "plate", &vehicle.plate));
        }

        let new_vehicle = Vehicle {
            id: None,
            available: true,
            registered_at: Utc::now(),
            ..vehicle
        };

        let saved = self.repository.save(new_vehicle).await?;
        info!("🚗 Vehículo registrado: {} (id {:?})", saved.plate, saved.id);
        Ok(saved)
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Vehicle> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", "id", &id.to_string()))
    }

    pub async fn list_all(&self) -> AppResult<Vec<Vehicle>> {
        self.repository.find_all().await
    }

    pub async fn list_available(&self) -> AppResult<Vec<Vehicle>> {
        self.repository.find_available().await
    }

    /// Actualizar datos descriptivos. Disponibilidad y fecha de registro no cambian.
    pub async fn update(&self, id: i64, vehicle: Vehicle) -> AppResult<Vehicle> {
        let existing = self.get_by_id(id).await?;

        vehicle.validate()?;

        if vehicle.plate != existing.plate && self.repository.exists_by_plate(&vehicle.plate).await? {
            return Err(conflict_error("Vehicle", "plate", &vehicle.plate));
        }

        let updated = Vehicle {
            id: Some(id),
            available: existing.available,
            registered_at: existing.registered_at,
            ..vehicle
        };

        let saved = self.repository.save(updated).await?;
        info!("✏️ Vehículo {} actualizado", id);
        Ok(saved)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.get_by_id(id).await?;
        self.repository.delete(id).await?;
        info!("🗑️ Vehículo {} eliminado", id);
        Ok(())
    }
}
