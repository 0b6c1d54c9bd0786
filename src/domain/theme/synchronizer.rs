use super::types::ThemeOutcome;
use crate::config::ThemeConfig;
use crate::domain::error::UiError;
use crate::platform::Platform;
use std::cell::RefCell;
use std::rc::Rc;

/// Projects the host colour scheme and button colour onto the page.
pub struct ThemeSynchronizer {
    platform: Platform,
    config: RefCell<ThemeConfig>,
}

impl ThemeSynchronizer {
    pub fn new(platform: Platform, config: ThemeConfig) -> Self {
        Self {
            platform,
            config: RefCell::new(config),
        }
    }

    /// Replaces the class and variable names used by later calls.
    pub fn reconfigure(&self, config: ThemeConfig) {
        *self.config.borrow_mut() = config;
    }

    /// Re-reads the host context and applies it. Idempotent.
    ///
    /// The button colour is sticky: when the host omits it, the style
    /// variable keeps whatever value it already had.
    pub fn apply(&self) -> Result<ThemeOutcome, UiError> {
        let config = self.config.borrow().clone();
        let context = self.platform.host().theme_context()?;
        let scheme = context.scheme();
        let render = self.platform.render();

        render.set_root_class(&config.dark_class, scheme.is_dark())?;

        let button_color = context.button_color().map(str::to_string);
        if let Some(color) = &button_color {
            render.set_style_variable(&config.button_color_variable, color)?;
        }

        self.platform.logger().debug(&format!(
            "Theme applied: scheme={:?}, button_color={:?}",
            scheme, button_color
        ));

        Ok(ThemeOutcome {
            scheme,
            button_color,
        })
    }

    /// Startup hook: apply once, expand the host viewport, then re-apply on
    /// every viewport change.
    ///
    /// The subscription holds a weak reference; the caller keeps the
    /// synchronizer alive for as long as events should be handled.
    pub fn install(self: &Rc<Self>) -> Result<(), UiError> {
        self.apply()?;
        self.platform.host().expand()?;

        let weak = Rc::downgrade(self);
        self.platform
            .host()
            .on_viewport_changed(Rc::new(move || {
                let Some(synchronizer) = weak.upgrade() else {
                    return;
                };
                if let Err(e) = synchronizer.apply() {
                    synchronizer
                        .platform
                        .logger()
                        .error(&format!("Failed to re-apply theme: {e}"));
                }
            }))
    }
}
