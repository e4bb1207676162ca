//! Servicio de ventas
//!
//! Flujo de venta: validar, verificar disponibilidad, marcar el vehículo como
//! vendido, persistir el vehículo y luego la venta.
//!
//! No hay transacción que abarque los dos `save`: si el segundo falla, el
//! vehículo queda vendido sin venta asociada. Tampoco hay bloqueo entre la
//! verificación de disponibilidad y la escritura, así que dos ventas
//! concurrentes del mismo vehículo pueden pasar ambas.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::models::{Client, Sale, Vehicle};
use crate::repositories::{SaleRepository, VehicleRepository};
use crate::utils::errors::{AppError, AppResult};

pub struct SaleService {
    sales: Arc<dyn SaleRepository>,
    vehicles: Arc<dyn VehicleRepository>,
}

impl SaleService {
    pub fn new(sales: Arc<dyn SaleRepository>, vehicles: Arc<dyn VehicleRepository>) -> Self {
        Self { sales, vehicles }
    }

    /// Vender `vehicle` a `client` por `price`
    pub async fn sell(&self, vehicle: Vehicle, client: Client, price: Decimal) -> AppResult<Sale> {
        let draft = Sale::new(vehicle, client, price);
        draft.validate()?;

        if !draft.vehicle.available {
            warn!("🚫 Vehículo {:?} no disponible para venta", draft.vehicle.id);
            return Err(AppError::Conflict(format!(
                "Vehicle unavailable for sale: {}",
                draft.vehicle.id.unwrap_or_default()
            )));
        }

        let Sale {
            vehicle: mut sold_vehicle,
            client,
            price,
            ..
        } = draft;
        sold_vehicle.mark_as_sold()?;
        let sold_vehicle = self.vehicles.save(sold_vehicle).await?;

        let sale = self.sales.save(Sale::new(sold_vehicle, client, price)).await?;
        info!(
            "💰 Venta {:?} registrada: vehículo {:?} -> cliente {:?} por {}",
            sale.id, sale.vehicle.id, sale.client.id, sale.price
        );
        Ok(sale)
    }

    pub async fn list_all(&self) -> AppResult<Vec<Sale>> {
        self.sales.find_all().await
    }

    /// Primera venta registrada para el vehículo
    pub async fn find_by_vehicle(&self, vehicle_id: i64) -> AppResult<Sale> {
        self.sales
            .find_all()
            .await?
            .into_iter()
            .find(|s| s.vehicle.id == Some(vehicle_id))
            .ok_or_else(|| {
                AppError::NotFound(format!("No sale found for vehicle id: {}", vehicle_id))
            })
    }
}
