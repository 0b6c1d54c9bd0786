//! Ports module - Defines the interfaces (traits) that abstract the page and the host.
//!
//! The domain layer only talks to these traits. Browser adapters bind them to
//! `window.Telegram.WebApp` and the DOM, headless adapters keep everything in memory.
//!
//! Execution is single-threaded, so ports are shared as `Rc<dyn Port>` and
//! carry no `Send + Sync` bound.

pub mod host;
pub mod logger;
pub mod render;
pub mod timer;

pub use host::{HostPort, ViewportCallback};
pub use logger::LoggerPort;
pub use render::{CloseCallback, RenderTargetPort};
pub use timer::{TimerCallback, TimerHandle, TimerPort};
