//! Device API - CRUD service for devices
//!
//! Architecture: DDD + CQRS + Hexagonal
//!
//! Domain (domain/):
//! - Device Context: device entity, lifecycle state, patch semantics
//!
//! Application (application/):
//! - Ports: DeviceRepositoryPort
//! - Validator: business rules for creation, update and deletion
//! - Commands / Queries: CQRS handlers
//!
//! Infrastructure (infrastructure/):
//! - HTTP: RESTful API, interceptor pipeline
//! - Persistence: SQLite repository
//! - Memory: in-memory repository

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
