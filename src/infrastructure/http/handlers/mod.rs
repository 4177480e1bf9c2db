//! HTTP Handlers

mod device;
mod ping;

pub use device::*;
pub use ping::*;
