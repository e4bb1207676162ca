pub mod client_routes;
pub mod sale_routes;
pub mod vehicle_routes;
