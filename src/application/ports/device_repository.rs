//! Device Repository Port
//!
//! Storage abstraction for device records. Implementations live in the
//! infrastructure layer (SQLite, in-memory).

use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{Device, DeviceState};

/// Repository error
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No record with this id
    #[error("Entity not found: {0}")]
    NotFound(Uuid),

    /// A record with this id already exists
    #[error("Duplicate entity: {0}")]
    Duplicate(Uuid),

    /// Refused because the device is in use (in-memory store only)
    #[error("Entity in use: {0}")]
    InUse(Uuid),

    /// Driver or connection failure
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// A stored row could not be mapped back to a `Device`
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// List filter; `None` leaves that field unconstrained
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceFilter {
    pub state: Option<DeviceState>,
    /// Exact, case-sensitive match
    pub brand: Option<String>,
}

impl DeviceFilter {
    pub fn new(state: Option<DeviceState>, brand: Option<String>) -> Self {
        Self {
            state,
            brand: brand.filter(|b| !b.is_empty()),
        }
    }

    pub fn matches(&self, device: &Device) -> bool {
        self.state.map_or(true, |s| device.state == s)
            && self.brand.as_deref().map_or(true, |b| device.brand == b)
    }
}

/// Device Repository Port
#[async_trait]
pub trait DeviceRepositoryPort: Send + Sync {
    /// Persist a new device; fails with `Duplicate` if the id is taken
    async fn create(&self, device: &Device) -> Result<Device, RepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Device>, RepositoryError>;

    /// Overwrite name, brand and state of an existing device and return the stored row
    async fn update(&self, device: &Device) -> Result<Device, RepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;

    /// All devices matching every supplied filter; order is unspecified
    async fn list(&self, filter: &DeviceFilter) -> Result<Vec<Device>, RepositoryError>;

    /// Backend status map (`status` plus `message` or `error`)
    async fn health(&self) -> HashMap<String, String>;

    async fn close(&self) -> Result<(), RepositoryError>;
}
