//! Device Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{DeviceFilter, DeviceRepositoryPort};
use crate::application::queries::{GetDevice, ListDevices};
use crate::domain::{Device, DeviceError, DeviceState};

/// GetDevice Handler
pub struct GetDeviceHandler {
    device_repo: Arc<dyn DeviceRepositoryPort>,
}

impl GetDeviceHandler {
    pub fn new(device_repo: Arc<dyn DeviceRepositoryPort>) -> Self {
        Self { device_repo }
    }

    pub async fn handle(&self, query: GetDevice) -> Result<Device, ApplicationError> {
        self.device_repo
            .find_by_id(query.device_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Device", query.device_id))
    }
}

/// ListDevices Handler
pub struct ListDevicesHandler {
    device_repo: Arc<dyn DeviceRepositoryPort>,
}

impl ListDevicesHandler {
    pub fn new(device_repo: Arc<dyn DeviceRepositoryPort>) -> Self {
        Self { device_repo }
    }

    pub async fn handle(&self, query: ListDevices) -> Result<Vec<Device>, ApplicationError> {
        let state = match query.state.as_deref().filter(|s| !s.is_empty()) {
            Some(raw) => match DeviceState::parse(raw) {
                Some(state) => Some(state),
                None => {
                    tracing::debug!(state = %raw, "Rejected unknown state filter");
                    return Err(DeviceError::InvalidState.into());
                }
            },
            None => None,
        };

        let filter = DeviceFilter::new(state, query.brand);
        let devices = self.device_repo.list(&filter).await?;

        tracing::debug!(
            count = devices.len(),
            state = ?filter.state,
            brand = ?filter.brand,
            "Devices listed"
        );

        Ok(devices)
    }
}
