//! Device Queries

use uuid::Uuid;

/// Fetch a single device
#[derive(Debug, Clone)]
pub struct GetDevice {
    pub device_id: Uuid,
}

/// List devices; filters are raw strings as received, empty means unconstrained
#[derive(Debug, Clone, Default)]
pub struct ListDevices {
    pub state: Option<String>,
    pub brand: Option<String>,
}
