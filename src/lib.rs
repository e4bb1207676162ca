//! Car dealership management API
//!
//! Registro de vehículos y clientes, y ventas que vinculan un vehículo
//! con un cliente. Arquitectura de puertos y adaptadores:
//!
//! - `models`: entidades de dominio con sus reglas de negocio
//! - `services`: casos de uso, dependen solo de los puertos
//! - `repositories`: puertos de persistencia y adaptadores (memoria, PostgreSQL)
//! - `controllers` / `routes` / `dto`: adaptador HTTP sobre Axum

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::{response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use middleware::cors::cors_for;
use state::AppState;

/// Construir el router completo de la API
pub fn create_app(state: AppState) -> Router {
    let cors = cors_for(&state.config);

    Router::new()
        .route("/health", get(health_check))
        .nest("/vehicles", routes::vehicle_routes::create_vehicle_router())
        .nest("/clients", routes::client_routes::create_client_router())
        .nest("/sales", routes::sale_routes::create_sale_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Endpoint de salud simple
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
