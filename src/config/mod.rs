//! Configuration Module
//!
//! Layered configuration sources, highest priority first:
//! - environment variables
//! - configuration file (TOML)
//! - defaults

mod loader;
mod types;

pub use loader::{load_config, load_config_from_path, print_config, ConfigError};
pub use types::{AppConfig, DatabaseConfig, LogConfig, ServerConfig};
