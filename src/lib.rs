//! Mini app integration for the browser: host theme synchronisation and
//! dismissible notification banners.

// Hexagonal architecture modules
pub mod adapters;
pub mod config;
pub mod domain;
pub mod facades;
pub mod platform;
pub mod ports;

pub use config::UiConfig;
pub use domain::error::UiError;
pub use domain::notification::{BannerId, NotificationPresenter, Severity};
pub use domain::theme::{ColorScheme, ThemeContext, ThemeParams, ThemeSynchronizer};
pub use platform::Platform;
