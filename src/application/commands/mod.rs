//! Application layer - commands (writes)
//!
//! CQRS command side: every write operation

mod device_commands;

pub mod handlers;

pub use device_commands::*;
