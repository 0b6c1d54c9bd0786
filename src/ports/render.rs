use crate::domain::error::UiError;
use crate::domain::notification::{Banner, BannerId};
use std::rc::Rc;

pub type CloseCallback = Rc<dyn Fn()>;

/// Render target port - the only output channel of the crate.
pub trait RenderTargetPort {
    /// Adds `class` to the page root when `present`, removes it otherwise.
    fn set_root_class(&self, class: &str, present: bool) -> Result<(), UiError>;

    /// Sets a globally scoped CSS custom property.
    fn set_style_variable(&self, name: &str, value: &str) -> Result<(), UiError>;

    /// Inserts `banner` as the first child of the element matching `container_selector`.
    ///
    /// `on_close` must be wired to the banner's close button.
    /// Returns `UiError::ContainerNotFound` when no element matches.
    fn prepend_banner(
        &self,
        container_selector: &str,
        banner: &Banner,
        on_close: CloseCallback,
    ) -> Result<(), UiError>;

    /// Closes the banner with `id`. Returns `false` if it was already gone.
    fn close_banner(&self, id: BannerId) -> Result<bool, UiError>;
}
