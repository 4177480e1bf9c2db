//! Device Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeviceError {
    #[error("Name and brand are required")]
    MissingFields,

    #[error("Cannot update name or brand of a device currently in use")]
    InUseImmutable,

    #[error("Cannot delete a device currently in use")]
    InUseDeletion,

    #[error("Invalid device state")]
    InvalidState,
}
