//! Data Transfer Objects

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use uuid::Uuid;

use super::error::ApiError;
use crate::domain::{Device, DeviceState};

// ============================================================================
// Decoding helpers
// ============================================================================

/// Decode a JSON body regardless of its Content-Type
pub fn decode_json<T: DeserializeOwned>(body: &[u8], message: &str) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "Rejected request body");
        ApiError::BadRequest(message.to_string())
    })
}

pub fn parse_device_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::BadRequest("Invalid device ID".to_string()))
}

// ============================================================================
// Device DTOs
// ============================================================================

/// Creation payload; missing fields decode as empty and fail validation
#[derive(Debug, Default, Deserialize)]
pub struct CreateDeviceRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub brand: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListDevicesParams {
    pub state: Option<String>,
    pub brand: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeviceResponse {
    pub id: Uuid,
    pub name: String,
    pub brand: String,
    pub state: DeviceState,
    pub created_at: DateTime<Utc>,
}

impl From<Device> for DeviceResponse {
    fn from(device: Device) -> Self {
        Self {
            id: device.id,
            name: device.name,
            brand: device.brand,
            state: device.state,
            created_at: device.created_at,
        }
    }
}

// ============================================================================
// Misc
// ============================================================================

#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub message: &'static str,
}
