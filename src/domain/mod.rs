//! Domain Layer
//!
//! Single bounded context:
//! - Device Context: device records and lifecycle state

pub mod device;

pub use device::{Device, DeviceError, DevicePatch, DeviceState};
