//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y sus reglas de negocio.
//! Mapea exactamente a la tabla `vehicles` y es también la forma
//! serializada que devuelve la API.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::{validate_positive, validate_vehicle_year};

/// Vehículo del inventario de la agencia
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    /// `None` hasta que el repositorio lo persiste
    pub id: Option<i64>,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub plate: String,
    pub color: Option<String>,
    pub price: Decimal,
    pub available: bool,
    pub registered_at: DateTime<Utc>,
}

impl Vehicle {
    /// Marca el vehículo como vendido. Solo puede ocurrir una vez.
    pub fn mark_as_sold(&mut self) -> AppResult<()> {
        if !self.available {
            return Err(AppError::IllegalState(
                "Vehicle has already been sold".to_string(),
            ));
        }
        self.available = false;
        Ok(())
    }

    /// Validaciones del dominio: año, precio y marca
    pub fn validate(&self) -> AppResult<()> {
        if validate_vehicle_year(self.year).is_err() {
            return Err(AppError::DomainValidation("Invalid year".to_string()));
        }
        if validate_positive(self.price).is_err() {
            return Err(AppError::DomainValidation(
                "Price must be greater than zero".to_string(),
            ));
        }
        if self.make.trim().is_empty() {
            return Err(AppError::DomainValidation("Make is required".to_string()));
        }
        Ok(())
    }
}
