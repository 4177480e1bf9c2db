//! Device Command Handlers
//!
//! Update and delete are read-then-write without a transaction: a concurrent
//! write landing between the two steps is not detected.

use std::sync::Arc;

use crate::application::commands::{CreateDevice, DeleteDevice, UpdateDevice};
use crate::application::error::ApplicationError;
use crate::application::ports::DeviceRepositoryPort;
use crate::application::validator;
use crate::domain::Device;

// ============================================================================
// CreateDevice
// ============================================================================

/// CreateDevice Handler
pub struct CreateDeviceHandler {
    device_repo: Arc<dyn DeviceRepositoryPort>,
}

impl CreateDeviceHandler {
    pub fn new(device_repo: Arc<dyn DeviceRepositoryPort>) -> Self {
        Self { device_repo }
    }

    pub async fn handle(&self, command: CreateDevice) -> Result<Device, ApplicationError> {
        let device = Device::new(command.name, command.brand);
        validator::validate_new_device(&device)?;

        let created = self.device_repo.create(&device).await?;

        tracing::info!(
            device_id = %created.id,
            name = %created.name,
            brand = %created.brand,
            "Device created"
        );

        Ok(created)
    }
}

// ============================================================================
// UpdateDevice
// ============================================================================

/// UpdateDevice Handler
pub struct UpdateDeviceHandler {
    device_repo: Arc<dyn DeviceRepositoryPort>,
}

impl UpdateDeviceHandler {
    pub fn new(device_repo: Arc<dyn DeviceRepositoryPort>) -> Self {
        Self { device_repo }
    }

    pub async fn handle(&self, command: UpdateDevice) -> Result<Device, ApplicationError> {
        let device_id = command.device_id;

        let mut device = self
            .device_repo
            .find_by_id(device_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Device", device_id))?;

        validator::validate_device_update(&command.patch, &device)?;
        device.apply(&command.patch);

        let updated = self.device_repo.update(&device).await?;

        tracing::info!(
            device_id = %device_id,
            state = %updated.state,
            "Device updated"
        );

        Ok(updated)
    }
}

// ============================================================================
// DeleteDevice
// ============================================================================

/// DeleteDevice Handler
pub struct DeleteDeviceHandler {
    device_repo: Arc<dyn DeviceRepositoryPort>,
}

impl DeleteDeviceHandler {
    pub fn new(device_repo: Arc<dyn DeviceRepositoryPort>) -> Self {
        Self { device_repo }
    }

    pub async fn handle(&self, command: DeleteDevice) -> Result<(), ApplicationError> {
        let device_id = command.device_id;

        let device = self
            .device_repo
            .find_by_id(device_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Device", device_id))?;

        validator::validate_deletion(&device)?;

        self.device_repo.delete(device_id).await?;

        tracing::info!(
            device_id = %device_id,
            name = %device.name,
            "Device deleted"
        );

        Ok(())
    }
}
