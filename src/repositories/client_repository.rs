use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::Client;
use crate::repositories::ClientRepository;
use crate::utils::errors::{map_db_error, AppError, AppResult};

pub struct PgClientRepository {
    pool: PgPool,
}

impl PgClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientRepository for PgClientRepository {
    async fn save(&self, client: Client) -> AppResult<Client> {
        match client.id {
            None => sqlx::query_as::<_, Client>(
                r#"
                INSERT INTO clients (name, cpf, phone, email)
                VALUES ($1, $2, $3, $4)
                RETURNING *
                "#
            )
            .bind(&client.name)
            .bind(&client.cpf)
            .bind(&client.phone)
            .bind(&client.email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_error("Error creating client", e)),

            Some(id) => sqlx::query_as::<_, Client>(
                r#"
                UPDATE clients SET name = $2, cpf = $3, phone = $4, email = $5
                WHERE id = $1
                RETURNING *
                "#
            )
            .bind(id)
            .bind(&client.name)
            .bind(&client.cpf)
            .bind(&client.phone)
            .bind(&client.email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error("Error updating client", e))?
            .ok_or_else(|| AppError::NotFound(format!("Client not found with id: {}", id))),
        }
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Client>> {
        sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error("Error finding client", e))
    }

    async fn find_by_cpf(&self, cpf: &str) -> AppResult<Option<Client>> {
        sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE cpf = $1")
            .bind(cpf)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error("Error finding client by cpf", e))
    }
}
