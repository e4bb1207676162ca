//! Modelos del sistema
//! 
//! Este módulo contiene las entidades de dominio. Cada una es a la vez
//! fila de base de datos (`sqlx::FromRow`) y cuerpo de respuesta JSON.

pub mod client;
pub mod sale;
pub mod vehicle;

pub use client::Client;
pub use sale::Sale;
pub use vehicle::Vehicle;
