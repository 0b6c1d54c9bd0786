//! WASM adapters - implementations using browser APIs.
pub mod console_logger;
pub mod dom_render;
pub mod error_conversions;
pub mod telegram_host;
pub mod timer;

pub use console_logger::ConsoleLogger;
pub use dom_render::DomRenderTarget;
pub use telegram_host::TelegramHost;
pub use timer::BrowserTimer;
