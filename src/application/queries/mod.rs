//! Application layer - queries (reads)
//!
//! CQRS query side: every read operation

mod device_queries;

pub mod handlers;

pub use device_queries::*;
