//! Persistence Layer
//!
//! SQLite storage implementation

pub mod sqlite;

pub use self::sqlite::SqliteDeviceRepository;
