//! Controladores
//!
//! Traducen DTOs de entrada a entidades de dominio y llaman a los servicios.

pub mod client_controller;
pub mod sale_controller;
pub mod vehicle_controller;
