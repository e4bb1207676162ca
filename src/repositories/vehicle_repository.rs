use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::Vehicle;
use crate::repositories::VehicleRepository;
use crate::utils::errors::{map_db_error, AppError, AppResult};

pub struct PgVehicleRepository {
    pool: PgPool,
}

impl PgVehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, vehicle: &Vehicle) -> AppResult<Vehicle> {
        sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (make, model, year, plate, color, price, available, registered_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#
        )
        .bind(&vehicle.make)
        .bind(&vehicle.model)
        .bind(vehicle.year)
        .bind(&vehicle.plate)
        .bind(&vehicle.color)
        .bind(vehicle.price)
        .bind(vehicle.available)
        .bind(vehicle.registered_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error("Error creating vehicle", e))
    }

    async fn update(&self, id: i64, vehicle: &Vehicle) -> AppResult<Vehicle> {
        sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET make = $2, model = $3, year = $4, plate = $5, color = $6,
                price = $7, available = $8, registered_at = $9
            WHERE id = $1
            RETURNING *
            "#
        )
        .bind(id)
        .bind(&vehicle.make)
        .bind(&vehicle.model)
        .bind(vehicle.year)
        .bind(&vehicle.plate)
        .bind(&vehicle.color)
        .bind(vehicle.price)
        .bind(vehicle.available)
        .bind(vehicle.registered_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("Error updating vehicle", e))?
        .ok_or_else(|| AppError::NotFound(format!("Vehicle not found with id: {}", id)))
    }
}

#[async_trait]
impl VehicleRepository for PgVehicleRepository {
    async fn save(&self, vehicle: Vehicle) -> AppResult<Vehicle> {
        match vehicle.id {
            Some(id) => self.update(id, &vehicle).await,
            None => self.insert(&vehicle).await,
        }
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Vehicle>> {
        sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error("Error finding vehicle", e))
    }

    async fn find_all(&self) -> AppResult<Vec<Vehicle>> {
        sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error("Error listing vehicles", e))
    }

    async fn find_available(&self) -> AppResult<Vec<Vehicle>> {
        sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE available = TRUE ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error("Error listing available vehicles", e))
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error("Error deleting vehicle", e))?;

        Ok(())
    }

    async fn exists_by_plate(&self, plate: &str) -> AppResult<bool> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM vehicles WHERE plate = $1)")
                .bind(plate)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| map_db_error("Error checking plate", e))?;

        Ok(result.0)
    }
}
