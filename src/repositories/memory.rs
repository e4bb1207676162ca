//! Adaptadores en memoria
//!
//! Tablas `BTreeMap` protegidas por `RwLock`, con ids secuenciales desde 1.
//! Cada operación es atómica por sí sola; no hay transacciones entre tablas.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::models::{Client, Sale, Vehicle};
use crate::repositories::{ClientRepository, SaleRepository, VehicleRepository};
use crate::utils::errors::AppResult;

/// Tabla genérica con autoincremento
#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T: Clone> Table<T> {
    /// Inserta o reemplaza; `set_id` asigna el id generado al registro
    fn upsert(&mut self, id: Option<i64>, mut row: T, set_id: impl FnOnce(&mut T, i64)) -> T {
        let id = match id {
            Some(id) => {
                if id >= self.next_id {
                    self.next_id = id + 1;
                }
                id
            }
            None => {
                let id = self.next_id;
                self.next_id += 1;
                id
            }
        };
        set_id(&mut row, id);
        self.rows.insert(id, row.clone());
        row
    }

    fn values(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }
}

#[derive(Clone, Default)]
pub struct InMemoryVehicleRepository {
    table: Arc<RwLock<Table<Vehicle>>>,
}

impl InMemoryVehicleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VehicleRepository for InMemoryVehicleRepository {
    async fn save(&self, vehicle: Vehicle) -> AppResult<Vehicle> {
        let mut table = self.table.write().await;
        let saved = table.upsert(vehicle.id, vehicle, |v, id| v.id = Some(id));
        debug!("💾 Vehículo guardado en memoria: {:?}", saved.id);
        Ok(saved)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Vehicle>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Vehicle>> {
        Ok(self.table.read().await.values())
    }

    async fn find_available(&self) -> AppResult<Vec<Vehicle>> {
        let table = self.table.read().await;
        Ok(table.rows.values().filter(|v| v.available).cloned().collect())
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        self.table.write().await.rows.remove(&id);
        Ok(())
    }

    async fn exists_by_plate(&self, plate: &str) -> AppResult<bool> {
        let table = self.table.read().await;
        Ok(table.rows.values().any(|v| v.plate == plate))
    }
}

#[derive(Clone, Default)]
pub struct InMemoryClientRepository {
    table: Arc<RwLock<Table<Client>>>,
}

impl InMemoryClientRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClientRepository for InMemoryClientRepository {
    async fn save(&self, client: Client) -> AppResult<Client> {
        let mut table = self.table.write().await;
        Ok(table.upsert(client.id, client, |c, id| c.id = Some(id)))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Client>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_by_cpf(&self, cpf: &str) -> AppResult<Option<Client>> {
        let table = self.table.read().await;
        Ok(table.rows.values().find(|c| c.cpf == cpf).cloned())
    }
}

#[derive(Clone, Default)]
pub struct InMemorySaleRepository {
    table: Arc<RwLock<Table<Sale>>>,
}

impl InMemorySaleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SaleRepository for InMemorySaleRepository {
    async fn save(&self, sale: Sale) -> AppResult<Sale> {
        let mut table = self.table.write().await;
        Ok(table.upsert(sale.id, sale, |s, id| s.id = Some(id)))
    }

    async fn find_all(&self) -> AppResult<Vec<Sale>> {
        Ok(self.table.read().await.values())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn vehicle(plate: &str) -> Vehicle {
        Vehicle {
            id: None,
            make: "Fiat".to_string(),
            model: "Uno".to_string(),
            year: 2020,
            plate: plate.to_string(),
            color: None,
            price: Decimal::new(1500000, 2),
            available: true,
            registered_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_save_assigns_sequential_ids() {
        let repo = InMemoryVehicleRepository::new();
        let first = repo.save(vehicle("ABC-1234")).await.unwrap();
        let second = repo.save(vehicle("DEF-5678")).await.unwrap();
        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
        assert_eq!(repo.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_save_with_id_updates() {
        let repo = InMemoryVehicleRepository::new();
        let mut saved = repo.save(vehicle("ABC-1234")).await.unwrap();
        saved.available = false;
        repo.save(saved.clone()).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert!(!all[0].available);
        assert!(repo.find_available().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_exists_by_plate_and_delete() {
        let repo = InMemoryVehicleRepository::new();
        let saved = repo.save(vehicle("ABC-1234")).await.unwrap();
        assert!(repo.exists_by_plate("ABC-1234").await.unwrap());
        assert!(!repo.exists_by_plate("XYZ-0000").await.unwrap());

        repo.delete(saved.id.unwrap()).await.unwrap();
        assert!(repo.find_by_id(saved.id.unwrap()).await.unwrap().is_none());
        assert!(!repo.exists_by_plate("ABC-1234").await.unwrap());
    }

    #[tokio::test]
    async fn test_client_find_by_cpf() {
        let repo = InMemoryClientRepository::new();
        let saved = repo
            .save(Client {
                id: None,
                name: "Ana Silva".to_string(),
                cpf: "12345678901".to_string(),
                phone: None,
                email: None,
            })
            .await
            .unwrap();

        let found = repo.find_by_cpf("12345678901").await.unwrap();
        assert_eq!(found, Some(saved));
        assert!(repo.find_by_cpf("00000000000").await.unwrap().is_none());
    }
}
