use std::sync::Arc;

use crate::dto::vehicle_dto::VehicleRequest;
use crate::models::Vehicle;
use crate::services::VehicleService;
use crate::utils::errors::AppError;

pub struct VehicleController {
    service: Arc<VehicleService>,
}

impl VehicleController {
    pub fn new(service: Arc<VehicleService>) -> Self {
        Self { service }
    }

    pub async fn create(&self, request: VehicleRequest) -> Result<Vehicle, AppError> {
        request.validate_request()?;
        self.service.register(Vehicle::from(request)).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Vehicle, AppError> {
        self.service.get_by_id(id).await
    }

    pub async fn list_all(&self) -> Result<Vec<Vehicle>, AppError> {
        self.service.list_all().await
    }

    pub async fn list_available(&self) -> Result<Vec<Vehicle>, AppError> {
        self.service.list_available().await
    }

    pub async fn update(&self, id: i64, request: VehicleRequest) -> Result<Vehicle, AppError> {
        request.validate_request()?;
        self.service.update(id, Vehicle::from(request)).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.service.delete(id).await
    }
}
