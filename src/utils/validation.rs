//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! que no se pueden expresar con los atributos de `validator`.

use std::borrow::Cow;

use chrono::{Datelike, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use serde::Serialize;
use validator::{ValidationError, ValidationErrors};

/// Año mínimo aceptado para un vehículo
pub const MIN_VEHICLE_YEAR: i32 = 1950;

lazy_static! {
    /// Placas formato antiguo (ABC-1234) y Mercosul (ABC1D23)
    pub static ref PLATE_REGEX: Regex = Regex::new(r"^[A-Z]{3}-?[0-9][A-Z0-9][0-9]{2}$").unwrap();
    pub static ref CPF_REGEX: Regex = Regex::new(r"^\d{11}$").unwrap();
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^\d{10,11}$").unwrap();
}

fn error_with_message(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

/// Año máximo aceptado: el año actual más uno
pub fn max_vehicle_year() -> i32 {
    Utc::now().year() + 1
}

/// Validar que un string no esté vacío
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error_with_message("not_blank", "must not be blank"));
    }
    Ok(())
}

/// Validar que un valor esté en un rango específico
pub fn validate_range<T: PartialOrd + std::fmt::Display + Serialize>(
    value: T,
    min: T,
    max: T,
) -> Result<(), ValidationError> {
    if value < min || value > max {
        let mut error = error_with_message(
            "range",
            format!("must be between {} and {}", min, max),
        );
        error.add_param("min".into(), &min);
        error.add_param("max".into(), &max);
        error.add_param("actual".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar el año de fabricación de un vehículo
pub fn validate_vehicle_year(year: i32) -> Result<(), ValidationError> {
    validate_range(year, MIN_VEHICLE_YEAR, max_vehicle_year())
}

/// Validar que un valor sea positivo
pub fn validate_positive<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value <= T::zero() {
        let mut error = error_with_message("positive", "must be greater than zero");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar montos monetarios: mínimo 0.01
pub fn validate_money(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::new(1, 2) {
        let mut error = error_with_message("money", "must be at least 0.01");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Combina el resultado de `Validate::validate` con chequeos manuales por campo
pub fn merge_field_errors(
    base: Result<(), ValidationErrors>,
    checks: Vec<(&'static str, Result<(), ValidationError>)>,
) -> Result<(), ValidationErrors> {
    let mut errors = base.err().unwrap_or_else(ValidationErrors::new);

    for (field, check) in checks {
        if let Err(e) = check {
            errors.add(field, e);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
