//! Device Commands

use uuid::Uuid;

use crate::domain::DevicePatch;

/// Create device command; missing fields arrive as empty strings
#[derive(Debug, Clone, Default)]
pub struct CreateDevice {
    pub name: String,
    pub brand: String,
}

/// Partially update device command
#[derive(Debug, Clone)]
pub struct UpdateDevice {
    pub device_id: Uuid,
    pub patch: DevicePatch,
}

/// Delete device command
#[derive(Debug, Clone)]
pub struct DeleteDevice {
    pub device_id: Uuid,
}
