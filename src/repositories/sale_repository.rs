use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::{FromRow, PgPool, Postgres};

use crate::models::{Client, Sale, Vehicle};
use crate::repositories::SaleRepository;
use crate::utils::errors::{map_db_error, AppError, AppResult};

// Fila de `sales`: la copia del vehículo y del cliente lleva prefijo por entidad
#[derive(Debug, FromRow)]
struct SaleRow {
    id: i64,
    price: Decimal,
    sold_at: DateTime<Utc>,
    vehicle_id: i64,
    vehicle_make: String,
    vehicle_model: String,
    vehicle_year: i32,
    vehicle_plate: String,
    vehicle_color: Option<String>,
    vehicle_price: Decimal,
    vehicle_available: bool,
    vehicle_registered_at: DateTime<Utc>,
    client_id: i64,
    client_name: String,
    client_cpf: String,
    client_phone: Option<String>,
    client_email: Option<String>,
}

impl From<SaleRow> for Sale {
    fn from(row: SaleRow) -> Self {
        Self {
            id: Some(row.id),
            vehicle: Vehicle {
                id: Some(row.vehicle_id),
                make: row.vehicle_make,
                model: row.vehicle_model,
                year: row.vehicle_year,
                plate: row.vehicle_plate,
                color: row.vehicle_color,
                price: row.vehicle_price,
                available: row.vehicle_available,
                registered_at: row.vehicle_registered_at,
            },
            client: Client {
                id: Some(row.client_id),
                name: row.client_name,
                cpf: row.client_cpf,
                phone: row.client_phone,
                email: row.client_email,
            },
            price: row.price,
            sold_at: row.sold_at,
        }
    }
}

const SELECT_SALES: &str = r#"
    SELECT
        id, price, sold_at,
        vehicle_id, vehicle_make, vehicle_model, vehicle_year, vehicle_plate,
        vehicle_color, vehicle_price, vehicle_available, vehicle_registered_at,
        client_id, client_name, client_cpf, client_phone, client_email
    FROM sales
"#;

type SaleIdQuery<'q> = QueryAs<'q, Postgres, (i64,), PgArguments>;

/// Enlaza la copia del vehículo y del cliente como parámetros $1..$16
fn bind_snapshot<'q>(
    query: SaleIdQuery<'q>,
    sale: &'q Sale,
    vehicle_id: i64,
    client_id: i64,
) -> SaleIdQuery<'q> {
    query
        .bind(vehicle_id)
        .bind(sale.vehicle.make.as_str())
        .bind(sale.vehicle.model.as_str())
        .bind(sale.vehicle.year)
        .bind(sale.vehicle.plate.as_str())
        .bind(sale.vehicle.color.as_deref())
        .bind(sale.vehicle.price)
        .bind(sale.vehicle.available)
        .bind(sale.vehicle.registered_at)
        .bind(client_id)
        .bind(sale.client.name.as_str())
        .bind(sale.client.cpf.as_str())
        .bind(sale.client.phone.as_deref())
        .bind(sale.client.email.as_deref())
        .bind(sale.price)
        .bind(sale.sold_at)
}

pub struct PgSaleRepository {
    pool: PgPool,
}

impl PgSaleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SaleRepository for PgSaleRepository {
    async fn save(&self, sale: Sale) -> AppResult<Sale> {
        let vehicle_id = sale
            .vehicle
            .id
            .ok_or_else(|| AppError::DomainValidation("Vehicle is required".to_string()))?;
        let client_id = sale
            .client
            .id
            .ok_or_else(|| AppError::DomainValidation("Client is required".to_string()))?;

        let (id,): (i64,) = match sale.id {
            None => bind_snapshot(
                sqlx::query_as::<_, (i64,)>(
                    r#"
                    INSERT INTO sales (
                        vehicle_id, vehicle_make, vehicle_model, vehicle_year, vehicle_plate,
                        vehicle_color, vehicle_price, vehicle_available, vehicle_registered_at,
                        client_id, client_name, client_cpf, client_phone, client_email,
                        price, sold_at
                    )
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
                    RETURNING id
                    "#,
                ),
                &sale,
                vehicle_id,
                client_id,
            )
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_error("Error creating sale", e))?,

            Some(id) => bind_snapshot(
                sqlx::query_as::<_, (i64,)>(
                    r#"
                    UPDATE sales SET
                        vehicle_id = $1, vehicle_make = $2, vehicle_model = $3,
                        vehicle_year = $4, vehicle_plate = $5, vehicle_color = $6,
                        vehicle_price = $7, vehicle_available = $8, vehicle_registered_at = $9,
                        client_id = $10, client_name = $11, client_cpf = $12,
                        client_phone = $13, client_email = $14,
                        price = $15, sold_at = $16
                    WHERE id = $17
                    RETURNING id
                    "#,
                ),
                &sale,
                vehicle_id,
                client_id,
            )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error("Error updating sale", e))?
            .ok_or_else(|| AppError::NotFound(format!("Sale not found with id: {}", id)))?,
        };

        Ok(Sale {
            id: Some(id),
            ..sale
        })
    }

    async fn find_all(&self) -> AppResult<Vec<Sale>> {
        let query = format!("{} ORDER BY id", SELECT_SALES);
        let rows = sqlx::query_as::<_, SaleRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error("Error listing sales", e))?;

        Ok(rows.into_iter().map(Sale::from).collect())
    }
}
