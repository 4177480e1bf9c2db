//! Query Handlers

mod device_handlers;

pub use device_handlers::*;
