//! Adapters module - platform-specific implementations of ports.
pub mod global_logger;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
#[cfg(not(target_arch = "wasm32"))]
pub mod native;

#[cfg(not(target_arch = "wasm32"))]
pub use native::ConsoleLogger;
#[cfg(target_arch = "wasm32")]
pub use wasm::ConsoleLogger;

pub use global_logger::{debug_enabled, logger, set_debug_mode};
