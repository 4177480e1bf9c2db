//! Application Ports - outbound port definitions
//!
//! Abstract interfaces between the application and infrastructure layers

mod device_repository;

pub use device_repository::{DeviceFilter, DeviceRepositoryPort, RepositoryError};
