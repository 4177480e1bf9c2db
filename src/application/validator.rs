//! Device business rules
//!
//! Pure checks, independent of storage and transport.

use crate::domain::{Device, DeviceError, DevicePatch, DeviceState};

/// Case-insensitive match against the known device states
pub fn is_valid_state(state: &str) -> bool {
    DeviceState::parse(state).is_some()
}

pub fn validate_new_device(device: &Device) -> Result<(), DeviceError> {
    if device.name.is_empty() || device.brand.is_empty() {
        return Err(DeviceError::MissingFields);
    }
    Ok(())
}

/// Checks a patch against the current record.
///
/// A supplied value equal to the current one is not a change, so an in-use
/// device accepts a patch that repeats its name or brand.
pub fn validate_device_update(patch: &DevicePatch, current: &Device) -> Result<(), DeviceError> {
    let renaming = patch.name().is_some_and(|name| name != current.name);
    let rebranding = patch.brand().is_some_and(|brand| brand != current.brand);

    if current.is_in_use() && (renaming || rebranding) {
        return Err(DeviceError::InUseImmutable);
    }

    if let Some(state) = patch.state() {
        if !is_valid_state(state) {
            return Err(DeviceError::InvalidState);
        }
    }

    Ok(())
}

pub fn validate_deletion(current: &Device) -> Result<(), DeviceError> {
    if current.is_in_use() {
        return Err(DeviceError::InUseDeletion);
    }
    Ok(())
}
