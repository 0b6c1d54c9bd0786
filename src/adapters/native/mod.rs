//! Native adapters - headless implementations for non-WASM builds and tests.
pub mod console_logger;
pub mod manual_timer;
pub mod memory_host;
pub mod memory_render;

pub use console_logger::ConsoleLogger;
pub use manual_timer::ManualTimer;
pub use memory_host::MemoryHost;
pub use memory_render::{MemoryRenderTarget, PageSnapshot, RenderedBanner};
