//! Application State

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateDeviceHandler, DeleteDeviceHandler, UpdateDeviceHandler,
    // Query handlers
    GetDeviceHandler, ListDevicesHandler,
    // Ports
    DeviceRepositoryPort,
};

/// Application state shared by every request
pub struct AppState {
    // ========== Ports ==========
    pub device_repo: Arc<dyn DeviceRepositoryPort>,

    // ========== Command Handlers ==========
    pub create_device_handler: CreateDeviceHandler,
    pub update_device_handler: UpdateDeviceHandler,
    pub delete_device_handler: DeleteDeviceHandler,

    // ========== Query Handlers ==========
    pub get_device_handler: GetDeviceHandler,
    pub list_devices_handler: ListDevicesHandler,
}

impl AppState {
    pub fn new(device_repo: Arc<dyn DeviceRepositoryPort>) -> Self {
        Self {
            device_repo: device_repo.clone(),

            create_device_handler: CreateDeviceHandler::new(device_repo.clone()),
            update_device_handler: UpdateDeviceHandler::new(device_repo.clone()),
            delete_device_handler: DeleteDeviceHandler::new(device_repo.clone()),

            get_device_handler: GetDeviceHandler::new(device_repo.clone()),
            list_devices_handler: ListDevicesHandler::new(device_repo),
        }
    }
}
