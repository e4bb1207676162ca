use std::sync::Arc;

use tracing::info;

use crate::models::Client;
use crate::repositories::ClientRepository;
use crate::utils::errors::{not_found_error, AppError, AppResult};

pub struct ClientService {
    repository: Arc<dyn ClientRepository>,
}

impl ClientService {
    pub fn new(repository: Arc<dyn ClientRepository>) -> Self {
        Self { repository }
    }

    /// Registrar cliente. Un CPF duplicado es un 400, no un 409.
    pub async fn register(&self, client: Client) -> AppResult<Client> {
        client.validate()?;

        if self.repository.find_by_cpf(&client.cpf).await?.is_some() {
            return Err(AppError::BadRequest(
                "A client with this CPF is already registered".to_string(),
            ));
        }

        let saved = self.repository.save(Client { id: None, ..client }).await?;
        info!("👤 Cliente registrado con id {:?}", saved.id);
        Ok(saved)
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Client> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Client", "id", &id.to_string()))
    }

    pub async fn get_by_cpf(&self, cpf: &str) -> AppResult<Client> {
        self.repository
            .find_by_cpf(cpf)
            .await?
            .ok_or_else(|| not_found_error("Client", "CPF", cpf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryClientRepository;

    fn ana() -> Client {
        Client {
            id: None,
            name: "Ana Silva".to_string(),
            cpf: "12345678901".to_string(),
            phone: Some("11999998888".to_string()),
            email: None,
        }
    }

    #[tokio::test]
    async fn test_register_and_lookup() {
        let service = ClientService::new(Arc::new(InMemoryClientRepository::new()));
        let saved = service.register(ana()).await.unwrap();
        let id = saved.id.unwrap();

        assert_eq!(service.get_by_id(id).await.unwrap(), saved);
        assert_eq!(service.get_by_cpf("12345678901").await.unwrap(), saved);
    }

    #[tokio::test]
    async fn test_duplicate_cpf_is_bad_request() {
        let service = ClientService::new(Arc::new(InMemoryClientRepository::new()));
        service.register(ana()).await.unwrap();
        let result = service.register(ana()).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_invalid_cpf_and_missing_client() {
        let service = ClientService::new(Arc::new(InMemoryClientRepository::new()));
        let mut invalid = ana();
        invalid.cpf = "123".to_string();
        assert!(matches!(
            service.register(invalid).await,
            Err(AppError::DomainValidation(_))
        ));

        assert!(matches!(service.get_by_id(7).await, Err(AppError::NotFound(_))));
        assert!(matches!(
            service.get_by_cpf("00000000000").await,
            Err(AppError::NotFound(_))
        ));
    }
}
