use std::sync::Arc;

use crate::dto::sale_dto::SaleRequest;
use crate::models::Sale;
use crate::services::{ClientService, SaleService, VehicleService};
use crate::utils::errors::AppError;

pub struct SaleController {
    sales: Arc<SaleService>,
    vehicles: Arc<VehicleService>,
    clients: Arc<ClientService>,
}

impl SaleController {
    pub fn new(
        sales: Arc<SaleService>,
        vehicles: Arc<VehicleService>,
        clients: Arc<ClientService>,
    ) -> Self {
        Self {
            sales,
            vehicles,
            clients,
        }
    }

    /// Buscar vehículo y cliente por id y ejecutar la venta
    pub async fn create(&self, request: SaleRequest) -> Result<Sale, AppError> {
        request.validate_request()?;

        let vehicle = self
            .vehicles
            .get_by_id(request.vehicle_id.unwrap_or_default())
            .await?;
        let client = self
            .clients
            .get_by_id(request.client_id.unwrap_or_default())
            .await?;

        self.sales
            .sell(vehicle, client, request.price.unwrap_or_default())
            .await
    }

    pub async fn list_all(&self) -> Result<Vec<Sale>, AppError> {
        self.sales.list_all().await
    }

    pub async fn get_by_vehicle(&self, vehicle_id: i64) -> Result<Sale, AppError> {
        self.sales.find_by_vehicle(vehicle_id).await
    }
}
