use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::models::vehicle::Vehicle;
use crate::utils::validation::{
    merge_field_errors, validate_money, validate_not_blank, validate_vehicle_year, PLATE_REGEX,
};

// Request para crear o actualizar un vehículo
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VehicleRequest {
    #[validate(
        required(message = "make is required"),
        custom = "validate_not_blank",
        length(max = 50, message = "make must have at most 50 characters")
    )]
    pub make: Option<String>,

    #[validate(
        required(message = "model is required"),
        custom = "validate_not_blank",
        length(max = 50, message = "model must have at most 50 characters")
    )]
    pub model: Option<String>,

    #[validate(required(message = "year is required"))]
    pub year: Option<i32>,

    #[validate(
        required(message = "plate is required"),
        regex(path = "PLATE_REGEX", message = "invalid plate")
    )]
    pub plate: Option<String>,

    #[validate(length(max = 30, message = "color must have at most 30 characters"))]
    pub color: Option<String>,

    #[validate(required(message = "price is required"))]
    pub price: Option<Decimal>,
}

impl VehicleRequest {
    /// Validación completa: atributos derivados más año y precio
    pub fn validate_request(&self) -> Result<(), ValidationErrors> {
        let mut checks = Vec::new();
        if let Some(year) = self.year {
            checks.push(("year", validate_vehicle_year(year)));
        }
        if let Some(price) = &self.price {
            checks.push(("price", validate_money(price)));
        }
        merge_field_errors(self.validate(), checks)
    }
}

impl From<VehicleRequest> for Vehicle {
    /// Disponibilidad y fecha de registro las decide el servicio
    fn from(request: VehicleRequest) -> Self {
        Self {
            id: None,
            make: request.make.unwrap_or_default(),
            model: request.model.unwrap_or_default(),
            year: request.year.unwrap_or_default(),
            plate: request.plate.unwrap_or_default(),
            color: request.color,
            price: request.price.unwrap_or_default(),
            available: true,
            registered_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> VehicleRequest {
        VehicleRequest {
            make: Some("Fiat".to_string()),
            model: Some("Uno".to_string()),
            year: Some(2020),
            plate: Some("ABC-1234".to_string()),
            color: None,
            price: Some(Decimal::new(1500000, 2)),
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request().validate_request().is_ok());
    }

    #[test]
    fn test_missing_fields_reported_per_field() {
        let empty = VehicleRequest {
            make: None,
            model: None,
            year: None,
            plate: None,
            color: None,
            price: None,
        };
        let errors = empty.validate_request().unwrap_err();
        let fields = errors.field_errors();
        for field in ["make", "model", "year", "plate", "price"] {
            assert!(fields.contains_key(field), "missing error for {}", field);
        }
        assert!(!fields.contains_key("color"));
    }

    #[test]
    fn test_year_price_and_plate_rules() {
        let mut req = request();
        req.year = Some(1949);
        req.price = Some(Decimal::ZERO);
        req.plate = Some("abc1234".to_string());
        let errors = req.validate_request().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("year"));
        assert!(fields.contains_key("price"));
        assert!(fields.contains_key("plate"));
    }

    #[test]
    fn test_into_domain() {
        let vehicle = Vehicle::from(request());
        assert_eq!(vehicle.id, None);
        assert_eq!(vehicle.make, "Fiat");
        assert_eq!(vehicle.plate, "ABC-1234");
        assert!(vehicle.available);
    }
}
