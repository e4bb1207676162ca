//! DTOs de entrada de la API
//!
//! Solo existen requests: las respuestas son las propias entidades de dominio.

pub mod client_dto;
pub mod sale_dto;
pub mod vehicle_dto;

pub use client_dto::ClientRequest;
pub use sale_dto::SaleRequest;
pub use vehicle_dto::VehicleRequest;
