use serde::Deserialize;
use validator::Validate;

use crate::models::client::Client;
use crate::utils::validation::{validate_not_blank, CPF_REGEX, PHONE_REGEX};

// Request para registrar un cliente
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ClientRequest {
    #[validate(
        required(message = "name is required"),
        custom = "validate_not_blank",
        length(min = 3, max = 100, message = "name must have between 3 and 100 characters")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "cpf is required"),
        regex(path = "CPF_REGEX", message = "cpf must contain 11 digits")
    )]
    pub cpf: Option<String>,

    #[validate(regex(path = "PHONE_REGEX", message = "invalid phone"))]
    pub phone: Option<String>,

    #[validate(
        email(message = "invalid email"),
        length(max = 100, message = "email must have at most 100 characters")
    )]
    pub email: Option<String>,
}

impl From<ClientRequest> for Client {
    fn from(request: ClientRequest) -> Self {
        Self {
            id: None,
            name: request.name.unwrap_or_default(),
            cpf: request.cpf.unwrap_or_default(),
            phone: request.phone,
            email: request.email,
        }
    }
}
