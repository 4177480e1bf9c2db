//! Application layer - use-case orchestration
//!
//! Contains:
//! - ports: hexagonal port definitions (DeviceRepository)
//! - validator: device business rules
//! - commands: CQRS commands and their handlers
//! - queries: CQRS queries and their handlers
//! - error: application layer errors

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;
pub mod validator;

// Re-exports
pub use commands::{
    handlers::{CreateDeviceHandler, DeleteDeviceHandler, UpdateDeviceHandler},
    CreateDevice, DeleteDevice, UpdateDevice,
};

pub use error::ApplicationError;

pub use ports::{DeviceFilter, DeviceRepositoryPort, RepositoryError};

pub use queries::{
    handlers::{GetDeviceHandler, ListDevicesHandler},
    GetDevice, ListDevices,
};
