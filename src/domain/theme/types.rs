use serde::{Deserialize, Serialize};

pub const DARK_SCHEME: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Dark,
    #[default]
    Light,
}

impl ColorScheme {
    /// Only the literal `"dark"` selects dark mode; anything else, including
    /// an absent indicator, is light.
    pub fn from_indicator(indicator: Option<&str>) -> Self {
        match indicator {
            Some(DARK_SCHEME) => ColorScheme::Dark,
            _ => ColorScheme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ColorScheme::Dark
    }
}

/// Colour tokens supplied by the host, keyed the way the host names them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeParams {
    pub bg_color: Option<String>,
    pub text_color: Option<String>,
    pub hint_color: Option<String>,
    pub link_color: Option<String>,
    pub button_color: Option<String>,
    pub button_text_color: Option<String>,
    pub secondary_bg_color: Option<String>,
}

impl ThemeParams {
    pub fn button_color(&self) -> Option<&str> {
        self.button_color.as_deref().filter(|color| !color.is_empty())
    }
}

/// Snapshot of the host theme context. Never cached between calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeContext {
    pub color_scheme: Option<String>,
    pub theme_params: Option<ThemeParams>,
}

impl ThemeContext {
    pub fn scheme(&self) -> ColorScheme {
        ColorScheme::from_indicator(self.color_scheme.as_deref())
    }

    pub fn button_color(&self) -> Option<&str> {
        self.theme_params.as_ref().and_then(ThemeParams::button_color)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeOutcome {
    pub scheme: ColorScheme,
    /// The button colour written this call, `None` when the variable was left as is.
    pub button_color: Option<String>,
}
