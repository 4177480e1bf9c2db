//! Infrastructure Layer
//!
//! Concrete implementations of every port

pub mod http;
pub mod memory;
pub mod persistence;

pub use memory::InMemoryDeviceRepository;
pub use persistence::SqliteDeviceRepository;
