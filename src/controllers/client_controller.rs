use std::sync::Arc;

use validator::Validate;

use crate::dto::client_dto::ClientRequest;
use crate::models::Client;
use crate::services::ClientService;
use crate::utils::errors::AppError;

pub struct ClientController {
    service: Arc<ClientService>,
}

impl ClientController {
    pub fn new(service: Arc<ClientService>) -> Self {
        Self { service }
    }

    pub async fn create(&self, request: ClientRequest) -> Result<Client, AppError> {
        request.validate()?;
        self.service.register(Client::from(request)).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Client, AppError> {
        self.service.get_by_id(id).await
    }

    pub async fn get_by_cpf(&self, cpf: &str) -> Result<Client, AppError> {
        self.service.get_by_cpf(cpf).await
    }
}
