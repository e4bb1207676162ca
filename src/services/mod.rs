//! Services module
//! 
//! Este módulo contiene la lógica de negocio de la aplicación.
//! Los servicios dependen solo de los puertos de `repositories`,
//! nunca de un adaptador concreto.

pub mod client_service;
pub mod sale_service;
pub mod vehicle_service;

pub use client_service::ClientService;
pub use sale_service::SaleService;
pub use vehicle_service::VehicleService;
