use crate::config;
use crate::domain::notification::{BannerId, NotificationPresenter, Severity};
use crate::platform::Platform;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

thread_local! {
    static PRESENTER: RefCell<Option<Rc<NotificationPresenter>>> = RefCell::new(None);
}

fn presenter() -> Rc<NotificationPresenter> {
    PRESENTER.with(|slot| {
        slot.borrow_mut()
            .get_or_insert_with(|| {
                NotificationPresenter::new(Platform::new(), config::current().notifications)
            })
            .clone()
    })
}

pub(crate) fn reconfigure(notifications: config::NotificationConfig) {
    PRESENTER.with(|slot| {
        if let Some(presenter) = slot.borrow().as_ref() {
            presenter.reconfigure(notifications);
        }
    });
}

/// Shows `message` as escaped text and returns the banner id.
///
/// Throws when the notification container is missing from the page.
#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: &str, severity: Option<String>) -> Result<u32, JsValue> {
    let severity = Severity::from_option(severity.as_deref());
    let id = presenter().show(message, severity)?;
    Ok(id.0)
}

/// Shows trusted markup verbatim. Never pass user-supplied content here.
#[wasm_bindgen(js_name = showNotificationMarkup)]
pub fn show_notification_markup(markup: &str, severity: Option<String>) -> Result<u32, JsValue> {
    let severity = Severity::from_option(severity.as_deref());
    let id = presenter().show_markup(markup, severity)?;
    Ok(id.0)
}

#[wasm_bindgen(js_name = dismissNotification)]
pub fn dismiss_notification(id: u32) -> Result<bool, JsValue> {
    Ok(presenter().dismiss(BannerId(id))?)
}
