//! In-Memory Device Repository
//!
//! A single reader/writer lock guards the whole map: lookups and listings
//! share it, every mutation takes it exclusively.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::application::ports::{DeviceFilter, DeviceRepositoryPort, RepositoryError};
use crate::domain::Device;

/// In-memory device repository, used for tests
pub struct InMemoryDeviceRepository {
    devices: RwLock<HashMap<Uuid, Device>>,
}

impl InMemoryDeviceRepository {
    pub fn new() -> Self {
        Self {
            devices: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryDeviceRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DeviceRepositoryPort for InMemoryDeviceRepository {
    async fn create(&self, device: &Device) -> Result<Device, RepositoryError> {
        let mut devices = self.devices.write().await;
        if devices.contains_key(&device.id) {
            return Err(RepositoryError::Duplicate(device.id));
        }
        devices.insert(device.id, device.clone());
        Ok(device.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Device>, RepositoryError> {
        Ok(self.devices.read().await.get(&id).cloned())
    }

    async fn update(&self, device: &Device) -> Result<Device, RepositoryError> {
        let mut devices = self.devices.write().await;
        let stored = devices
            .get_mut(&device.id)
            .ok_or(RepositoryError::NotFound(device.id))?;

        stored.name = device.name.clone();
        stored.brand = device.brand.clone();
        stored.state = device.state;
        Ok(stored.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut devices = self.devices.write().await;
        match devices.get(&id) {
            None => Err(RepositoryError::NotFound(id)),
            // Re-checked here as well as in the command handler
            Some(device) if device.is_in_use() => Err(RepositoryError::InUse(id)),
            Some(_) => {
                devices.remove(&id);
                Ok(())
            }
        }
    }

    async fn list(&self, filter: &DeviceFilter) -> Result<Vec<Device>, RepositoryError> {
        Ok(self
            .devices
            .read()
            .await
            .values()
            .filter(|d| filter.matches(d))
            .cloned()
            .collect())
    }

    async fn health(&self) -> HashMap<String, String> {
        let count = self.devices.read().await.len();
        HashMap::from([
            ("status".to_string(), "up".to_string()),
            (
                "message".to_string(),
                format!("In-memory store is healthy ({} devices)", count),
            ),
        ])
    }

    async fn close(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}
