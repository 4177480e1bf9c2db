//! Application layer errors
//!
//! Unified error type for commands and queries

use thiserror::Error;
use uuid::Uuid;

use crate::application::ports::RepositoryError;
use crate::domain::DeviceError;

/// Application layer error
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: Uuid,
    },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Business rule violation: {0}")]
    BusinessRuleViolation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl ApplicationError {
    pub fn not_found(resource_type: &'static str, id: Uuid) -> Self {
        Self::NotFound { resource_type, id }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    pub fn business_rule(message: impl Into<String>) -> Self {
        Self::BusinessRuleViolation(message.into())
    }
}

impl From<DeviceError> for ApplicationError {
    fn from(err: DeviceError) -> Self {
        match err {
            DeviceError::MissingFields | DeviceError::InvalidState => {
                Self::validation(err.to_string())
            }
            DeviceError::InUseImmutable | DeviceError::InUseDeletion => {
                Self::business_rule(err.to_string())
            }
        }
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => Self::not_found("Device", id),
            RepositoryError::Duplicate(id) => {
                Self::Conflict(format!("Device already exists: {}", id))
            }
            RepositoryError::InUse(_) => DeviceError::InUseDeletion.into(),
            other => Self::RepositoryError(other.to_string()),
        }
    }
}
