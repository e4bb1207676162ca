//! Modelo de Sale
//!
//! Una venta guarda una copia (snapshot) del vehículo y del cliente
//! tal como estaban en el momento de la venta.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::client::Client;
use crate::models::vehicle::Vehicle;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::validate_positive;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: Option<i64>,
    pub vehicle: Vehicle,
    pub client: Client,
    pub price: Decimal,
    pub sold_at: DateTime<Utc>,
}

impl Sale {
    /// Crear una venta nueva, todavía sin persistir
    pub fn new(vehicle: Vehicle, client: Client, price: Decimal) -> Self {
        Self {
            id: None,
            vehicle,
            client,
            price,
            sold_at: Utc::now(),
        }
    }

    /// Vehículo y cliente deben existir en el almacenamiento y el precio ser positivo
    pub fn validate(&self) -> AppResult<()> {
        if self.vehicle.id.is_none() {
            return Err(AppError::DomainValidation("Vehicle is required".to_string()));
        }
        if self.client.id.is_none() {
            return Err(AppError::DomainValidation("Client is required".to_string()));
        }
        if validate_positive(self.price).is_err() {
            return Err(AppError::DomainValidation("Invalid sale price".to_string()));
        }
        Ok(())
    }
}
