use rust_decimal::Decimal;
use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::utils::validation::{merge_field_errors, validate_money};

// Request para realizar una venta
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaleRequest {
    #[validate(required(message = "vehicle_id is required"))]
    pub vehicle_id: Option<i64>,

    #[validate(required(message = "client_id is required"))]
    pub client_id: Option<i64>,

    #[validate(required(message = "price is required"))]
    pub price: Option<Decimal>,
}

impl SaleRequest {
    pub fn validate_request(&self) -> Result<(), ValidationErrors> {
        let checks = match &self.price {
            Some(price) => vec![("price", validate_money(price))],
            None => Vec::new(),
        };
        merge_field_errors(self.validate(), checks)
    }
}
