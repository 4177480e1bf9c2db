//! HTTP Routes
//!
//! API Endpoints:
//! - /ping          GET     liveness probe
//! - /health        GET     storage health
//! - /devices       POST    create a device
//! - /devices       GET     list devices, optional `state` and `brand` filters
//! - /devices/:id   GET     fetch one device
//! - /devices/:id   PATCH   partially update a device
//! - /devices/:id   DELETE  delete a device

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// All routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/health", get(handlers::health))
        .merge(device_routes())
}

/// Device routes
fn device_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/devices",
            get(handlers::list_devices).post(handlers::create_device),
        )
        .route(
            "/devices/:id",
            get(handlers::get_device)
                .patch(handlers::update_device)
                .delete(handlers::delete_device),
        )
}
