//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use std::collections::BTreeMap;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{error, warn};

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Errores de forma del request (derivados de `validator`)
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// Reglas de negocio violadas por una entidad de dominio
    #[error("Invalid data: {0}")]
    DomainValidation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// Transición de estado inválida (ej. vender un vehículo ya vendido)
    #[error("Illegal state: {0}")]
    IllegalState(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
pub struct ErrorResponse {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    fn new(status: StatusCode, message: String) -> Self {
        Self {
            timestamp: Utc::now(),
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Error").to_string(),
            message,
        }
    }
}

impl AppError {
    /// Código HTTP asociado a cada variante
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_)
            | AppError::DomainValidation(_)
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) | AppError::IllegalState(_) => StatusCode::CONFLICT,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Aplana los errores de `validator` a un mapa campo -> mensaje
pub fn field_messages(errors: &validator::ValidationErrors) -> BTreeMap<String, String> {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, field_errors)| {
            field_errors.first().map(|e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("invalid value ({})", e.code));
                (field.to_string(), message)
            })
        })
        .collect()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            AppError::Validation(e) => {
                warn!("⚠️ Validation error: {}", e);
                (status, Json(field_messages(&e))).into_response()
            }

            AppError::Database(e) => {
                error!("❌ Database error: {}", e);
                (
                    status,
                    Json(ErrorResponse::new(
                        status,
                        "An error occurred while accessing the database".to_string(),
                    )),
                )
                    .into_response()
            }

            AppError::DomainValidation(msg)
            | AppError::BadRequest(msg)
            | AppError::NotFound(msg)
            | AppError::Conflict(msg)
            | AppError::IllegalState(msg) => {
                warn!("⚠️ {} {}: {}", status.as_u16(), status.canonical_reason().unwrap_or(""), msg);
                (status, Json(ErrorResponse::new(status, msg))).into_response()
            }
        }
    }
}

/// Cuerpo JSON ilegible o con tipos incorrectos
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Segmento de ruta que no se puede convertir (ej. id no numérico)
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, field: &str, value: &str) -> AppError {
    AppError::NotFound(format!("{} not found with {}: {}", resource, field, value))
}

/// Función helper para crear errores de conflicto
pub fn conflict_error(resource: &str, field: &str, value: &str) -> AppError {
    AppError::Conflict(format!("{} with {} '{}' already exists", resource, field, value))
}

/// Traduce errores de sqlx: una violación de UNIQUE es un conflicto
pub fn map_db_error(context: &str, e: sqlx::Error) -> AppError {
    let unique = e
        .as_database_error()
        .map(|db| db.is_unique_violation())
        .unwrap_or(false);

    if unique {
        AppError::Conflict(format!("{}: unique constraint violated", context))
    } else {
        error!("❌ {}: {}", context, e);
        AppError::Database(e)
    }
}
