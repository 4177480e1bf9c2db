//! SQLite Persistence

mod database;
mod device_repo;

pub use database::*;
pub use device_repo::*;
