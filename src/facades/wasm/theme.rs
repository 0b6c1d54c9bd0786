use crate::config;
use crate::domain::error::UiError;
use crate::domain::theme::ThemeSynchronizer;
use crate::platform::Platform;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

thread_local! {
    static SYNCHRONIZER: RefCell<Option<Rc<ThemeSynchronizer>>> = RefCell::new(None);
}

pub(crate) fn synchronizer() -> Rc<ThemeSynchronizer> {
    SYNCHRONIZER.with(|slot| {
        slot.borrow_mut()
            .get_or_insert_with(|| {
                Rc::new(ThemeSynchronizer::new(
                    Platform::new(),
                    config::current().theme,
                ))
            })
            .clone()
    })
}

pub(crate) fn reconfigure(theme: config::ThemeConfig) {
    SYNCHRONIZER.with(|slot| {
        if let Some(synchronizer) = slot.borrow().as_ref() {
            synchronizer.reconfigure(theme);
        }
    });
}

/// Startup hook: applies the theme, expands the host and follows viewport changes.
pub(crate) fn install() -> Result<(), UiError> {
    synchronizer().install()
}

#[wasm_bindgen(js_name = applyTheme)]
pub fn apply_theme() -> Result<(), JsValue> {
    synchronizer().apply()?;
    Ok(())
}
