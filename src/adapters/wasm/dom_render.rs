use crate::adapters::logger;
use crate::domain::error::UiError;
use crate::domain::notification::types::CLOSE_BUTTON_CLASS;
use crate::domain::notification::{Banner, BannerId};
use crate::ports::{CloseCallback, RenderTargetPort};
use std::cell::RefCell;
use std::collections::HashMap;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

pub const BANNER_ID_ATTRIBUTE: &str = "data-banner-id";

/// Close button and the click listener attached to it.
struct CloseListener {
    button: Element,
    closure: Closure<dyn Fn()>,
}

impl CloseListener {
    /// Unhooks the closure from the button so later clicks never reach it.
    fn detach(self) {
        let _ = self
            .button
            .remove_event_listener_with_callback("click", self.closure.as_ref().unchecked_ref());
    }
}

thread_local! {
    // Listeners stay registered until their banner is closed.
    static CLOSE_LISTENERS: RefCell<HashMap<BannerId, CloseListener>> =
        RefCell::new(HashMap::new());
}

/// Render target bound to the current `document`.
#[derive(Clone, Copy)]
pub struct DomRenderTarget;

impl DomRenderTarget {
    pub fn new() -> Self {
        Self
    }

    fn document(&self) -> Result<Document, UiError> {
        web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| UiError::dom("No document available"))
    }

    fn find_banner(&self, id: BannerId) -> Result<Option<Element>, UiError> {
        let selector = format!("[{BANNER_ID_ATTRIBUTE}=\"{id}\"]");
        Ok(self.document()?.query_selector(&selector)?)
    }

    fn build_banner(&self, document: &Document, banner: &Banner) -> Result<Element, UiError> {
        let element = document.create_element("div")?;
        element.set_class_name(&banner.class_name());
        element.set_attribute("role", banner.role())?;
        element.set_attribute(BANNER_ID_ATTRIBUTE, &banner.id.to_string())?;
        element.set_inner_html(&banner.inner_html());
        Ok(element)
    }

    fn wire_close_button(
        &self,
        element: &Element,
        id: BannerId,
        on_close: CloseCallback,
    ) -> Result<(), UiError> {
        let Some(button) = element.query_selector(&format!(".{CLOSE_BUTTON_CLASS}"))? else {
            return Err(UiError::dom("Banner has no close button"));
        };

        let closure = Closure::wrap(Box::new(move || on_close()) as Box<dyn Fn()>);
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        CLOSE_LISTENERS.with(|listeners| {
            listeners
                .borrow_mut()
                .insert(id, CloseListener { button, closure })
        });
        Ok(())
    }
}

impl Default for DomRenderTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderTargetPort for DomRenderTarget {
    fn set_root_class(&self, class: &str, present: bool) -> Result<(), UiError> {
        let document = self.document()?;
        let root = match document.body() {
            Some(body) => Element::from(body),
            None => document
                .document_element()
                .ok_or_else(|| UiError::dom("Document has no root element"))?,
        };
        root.class_list().toggle_with_force(class, present)?;
        Ok(())
    }

    fn set_style_variable(&self, name: &str, value: &str) -> Result<(), UiError> {
        let root = self
            .document()?
            .document_element()
            .ok_or_else(|| UiError::dom("Document has no root element"))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| UiError::dom("Document root is not an HTML element"))?;
        root.style().set_property(name, value)?;
        Ok(())
    }

    fn prepend_banner(
        &self,
        container_selector: &str,
        banner: &Banner,
        on_close: CloseCallback,
    ) -> Result<(), UiError> {
        let document = self.document()?;
        let container = document
            .query_selector(container_selector)?
            .ok_or_else(|| UiError::ContainerNotFound(container_selector.to_string()))?;

        let element = self.build_banner(&document, banner)?;
        self.wire_close_button(&element, banner.id, on_close)?;
        container.insert_before(&element, container.first_child().as_ref())?;
        Ok(())
    }

    fn close_banner(&self, id: BannerId) -> Result<bool, UiError> {
        // The toolkit fades the element out before removing it, and the
        // button stays clickable meanwhile.
        let listener = CLOSE_LISTENERS.with(|listeners| listeners.borrow_mut().remove(&id));
        if let Some(listener) = listener {
            listener.detach();
        }

        let Some(element) = self.find_banner(id)? else {
            return Ok(false);
        };
        element.remove_attribute(BANNER_ID_ATTRIBUTE)?;
        match close_with_toolkit(&element) {
            Ok(true) => {}
            Ok(false) => element.remove(),
            Err(e) => {
                logger().warn(&format!("Alert close failed, removing banner {id}: {e}"));
                element.remove();
            }
        }
        Ok(true)
    }
}

/// Hands the element to `bootstrap.Alert` when the toolkit is loaded.
/// Returns `false` when it is not, leaving removal to the caller.
fn close_with_toolkit(element: &Element) -> Result<bool, UiError> {
    let alert = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("bootstrap"))
        .ok()
        .filter(|bootstrap| bootstrap.is_object())
        .and_then(|bootstrap| js_sys::Reflect::get(&bootstrap, &JsValue::from_str("Alert")).ok())
        .filter(|alert| alert.is_function());
    let Some(alert) = alert else {
        return Ok(false);
    };

    let factory = js_sys::Reflect::get(&alert, &JsValue::from_str("getOrCreateInstance"))?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| UiError::dom("bootstrap.Alert.getOrCreateInstance is not a function"))?;
    let instance = factory.call1(&alert, element)?;
    let close = js_sys::Reflect::get(&instance, &JsValue::from_str("close"))?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| UiError::dom("Alert instance has no close()"))?;
    close.call0(&instance)?;
    Ok(true)
}
