use crate::domain::error::UiError;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

pub const DEFAULT_DARK_CLASS: &str = "dark-theme";
pub const DEFAULT_BUTTON_COLOR_VARIABLE: &str = "--tg-theme-button-color";
pub const DEFAULT_CONTAINER_SELECTOR: &str = ".container";
pub const DEFAULT_AUTO_DISMISS_MS: u32 = 5000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    pub dark_class: String,
    pub button_color_variable: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            dark_class: DEFAULT_DARK_CLASS.to_string(),
            button_color_variable: DEFAULT_BUTTON_COLOR_VARIABLE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NotificationConfig {
    pub container_selector: String,
    pub auto_dismiss_ms: u32,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            container_selector: DEFAULT_CONTAINER_SELECTOR.to_string(),
            auto_dismiss_ms: DEFAULT_AUTO_DISMISS_MS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UiConfig {
    pub theme: ThemeConfig,
    pub notifications: NotificationConfig,
}

impl UiConfig {
    /// Parses a partial JSON document, keeping defaults for omitted fields.
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        serde_json::from_str(raw).map_err(|e| UiError::config(format!("Invalid config: {e}")))
    }
}

static CONFIG: Lazy<RwLock<UiConfig>> = Lazy::new(|| RwLock::new(UiConfig::default()));

/// Returns a copy of the process-wide configuration.
pub fn current() -> UiConfig {
    CONFIG.read().clone()
}

pub fn set(config: UiConfig) {
    *CONFIG.write() = config;
}
