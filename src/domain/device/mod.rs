//! Device Context
//!
//! Responsibilities:
//! - Device entity and its lifecycle state
//! - Partial update (patch) semantics
//! - Domain errors for business-rule violations

mod entity;
mod errors;
mod value_objects;

pub use entity::{Device, DevicePatch};
pub use errors::DeviceError;
pub use value_objects::DeviceState;
