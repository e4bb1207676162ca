//! Modelo de Client
//!
//! Cliente de la agencia. No existe operación de actualización:
//! una vez registrado, el cliente es inmutable.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::utils::errors::{AppError, AppResult};

/// Longitud exacta de un CPF sin puntuación
pub const CPF_LENGTH: usize = 11;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Client {
    pub id: Option<i64>,
    pub name: String,
    pub cpf: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl Client {
    /// Validaciones del dominio: CPF de 11 caracteres y nombre obligatorio
    pub fn validate(&self) -> AppResult<()> {
        if self.cpf.chars().count() != CPF_LENGTH {
            return Err(AppError::DomainValidation("Invalid CPF".to_string()));
        }
        if self.name.trim().is_empty() {
            return Err(AppError::DomainValidation("Name is required".to_string()));
        }
        Ok(())
    }
}
