//! Configuración de conexión a PostgreSQL
//!
//! Este módulo abre el pool de conexiones y crea el esquema si no existe.

use anyhow::Result;
use sqlx::PgPool;
use tracing::info;

use crate::config::DatabaseConfig;

/// Esquema de la agencia. Las restricciones UNIQUE respaldan la verificación
/// de placa/CPF que hacen los servicios. `sales` guarda una copia del vehículo
/// y del cliente al momento de la venta, sin claves foráneas.
const SCHEMA: [&str; 3] = [
    r#"
    CREATE TABLE IF NOT EXISTS vehicles (
        id BIGSERIAL PRIMARY KEY,
        make VARCHAR(50) NOT NULL,
        model VARCHAR(50) NOT NULL,
        year INTEGER NOT NULL,
        plate VARCHAR(10) NOT NULL UNIQUE,
        color VARCHAR(30),
        price NUMERIC(10, 2) NOT NULL,
        available BOOLEAN NOT NULL,
        registered_at TIMESTAMPTZ NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS clients (
        id BIGSERIAL PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        cpf VARCHAR(11) NOT NULL UNIQUE,
        phone VARCHAR(15),
        email VARCHAR(100)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS sales (
        id BIGSERIAL PRIMARY KEY,
        vehicle_id BIGINT NOT NULL,
        vehicle_make VARCHAR(50) NOT NULL,
        vehicle_model VARCHAR(50) NOT NULL,
        vehicle_year INTEGER NOT NULL,
        vehicle_plate VARCHAR(10) NOT NULL,
        vehicle_color VARCHAR(30),
        vehicle_price NUMERIC(10, 2) NOT NULL,
        vehicle_available BOOLEAN NOT NULL,
        vehicle_registered_at TIMESTAMPTZ NOT NULL,
        client_id BIGINT NOT NULL,
        client_name VARCHAR(100) NOT NULL,
        client_cpf VARCHAR(11) NOT NULL,
        client_phone VARCHAR(15),
        client_email VARCHAR(100),
        price NUMERIC(10, 2) NOT NULL,
        sold_at TIMESTAMPTZ NOT NULL
    )
    "#,
];

/// Conexión a la base de datos
#[derive(Clone)]
pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    /// Conectar usando la configuración dada
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        info!("🔌 Conectando a {}", mask_database_url(&config.url));
        let pool = config.create_pool().await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Crear las tablas si no existen
    pub async fn run_migrations(&self) -> Result<(), sqlx::Error> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        info!("✅ Esquema de base de datos verificado");
        Ok(())
    }
}

/// Función helper para enmascarar la URL de la base de datos en logs
fn mask_database_url(url: &str) -> String {
    if let Some(at_pos) = url.find('@') {
        if let Some(_colon_pos) = url[..at_pos].rfind(':') {
            let protocol = &url[..url.find("://").map(|p| p + 3).unwrap_or(0)];
            let host = &url[at_pos + 1..];
            format!("{}***:***@{}", protocol, host)
        } else {
            url.to_string()
        }
    } else {
        url.to_string()
    }
}
