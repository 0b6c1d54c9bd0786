use crate::domain::error::UiError;
use crate::domain::theme::ThemeContext;
use std::rc::Rc;

pub type ViewportCallback = Rc<dyn Fn()>;

/// Host port - the mini app container embedding the page.
pub trait HostPort {
    /// Reads a fresh snapshot of the host theme context.
    ///
    /// Fails only when the host object itself is missing. Absent nested
    /// fields come back as `None`.
    fn theme_context(&self) -> Result<ThemeContext, UiError>;

    /// Asks the host to present the page at full viewport height.
    fn expand(&self) -> Result<(), UiError>;

    /// Registers `callback` for every "viewport changed" signal.
    fn on_viewport_changed(&self, callback: ViewportCallback) -> Result<(), UiError>;
}
