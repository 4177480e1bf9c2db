//! Device HTTP Handlers

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::{CreateDevice, DeleteDevice, GetDevice, ListDevices, UpdateDevice};
use crate::domain::DevicePatch;
use crate::infrastructure::http::dto::{
    decode_json, parse_device_id, CreateDeviceRequest, DeviceResponse, ListDevicesParams,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// POST /devices
pub async fn create_device(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<DeviceResponse>), ApiError> {
    let req: CreateDeviceRequest = decode_json(&body, "Invalid device payload")?;

    let command = CreateDevice {
        name: req.name,
        brand: req.brand,
    };
    let device = state.create_device_handler.handle(command).await?;

    Ok((StatusCode::CREATED, Json(device.into())))
}

/// GET /devices/:id
pub async fn get_device(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<DeviceResponse>, ApiError> {
    let device_id = parse_device_id(&raw_id)?;

    let device = state
        .get_device_handler
        .handle(GetDevice { device_id })
        .await?;

    Ok(Json(device.into()))
}

/// GET /devices?state=&brand=
pub async fn list_devices(
    State(state): State<Arc<AppState>>,
    params: Result<Query<ListDevicesParams>, QueryRejection>,
) -> Result<Json<Vec<DeviceResponse>>, ApiError> {
    let Query(params) =
        params.map_err(|e| ApiError::BadRequest(format!("Invalid query parameters: {}", e)))?;

    let query = ListDevices {
        state: params.state,
        brand: params.brand,
    };
    let devices = state.list_devices_handler.handle(query).await?;

    Ok(Json(devices.into_iter().map(DeviceResponse::from).collect()))
}

/// PATCH /devices/:id
pub async fn update_device(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<Json<DeviceResponse>, ApiError> {
    let device_id = parse_device_id(&raw_id)?;
    let patch: DevicePatch = decode_json(&body, "Invalid input")?;

    let device = state
        .update_device_handler
        .handle(UpdateDevice { device_id, patch })
        .await?;

    Ok(Json(device.into()))
}

/// DELETE /devices/:id
pub async fn delete_device(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let device_id = parse_device_id(&raw_id)?;

    state
        .delete_device_handler
        .handle(DeleteDevice { device_id })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
