use crate::adapters::logger;
use crate::domain::error::UiError;
use crate::domain::theme::{ThemeContext, ThemeParams};
use crate::ports::{HostPort, ViewportCallback};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub const VIEWPORT_CHANGED_EVENT: &str = "viewportChanged";

#[wasm_bindgen]
extern "C" {
    /// `window.Telegram.WebApp`
    #[wasm_bindgen(js_name = Object)]
    pub type WebApp;

    #[wasm_bindgen(method, catch)]
    fn expand(this: &WebApp) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = onEvent)]
    fn on_event(this: &WebApp, event: &str, handler: &js_sys::Function) -> Result<(), JsValue>;
}

/// Host adapter reading `window.Telegram.WebApp` on every call.
#[derive(Clone, Copy)]
pub struct TelegramHost;

impl TelegramHost {
    pub fn new() -> Self {
        Self
    }

    fn web_app(&self) -> Result<WebApp, UiError> {
        let telegram = get_object(&js_sys::global(), "Telegram")
            .ok_or_else(|| UiError::host_unavailable("window.Telegram is not defined"))?;
        let web_app = get_object(&telegram, "WebApp")
            .ok_or_else(|| UiError::host_unavailable("window.Telegram.WebApp is not defined"))?;
        Ok(web_app.unchecked_into::<WebApp>())
    }
}

impl Default for TelegramHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HostPort for TelegramHost {
    fn theme_context(&self) -> Result<ThemeContext, UiError> {
        let web_app = self.web_app()?;

        let color_scheme = js_sys::Reflect::get(&web_app, &JsValue::from_str("colorScheme"))
            .ok()
            .and_then(|value| value.as_string());

        let theme_params = get_object(&web_app, "themeParams").and_then(|params| {
            serde_wasm_bindgen::from_value::<ThemeParams>(params)
                .map_err(|e| logger().warn(&format!("Ignoring malformed themeParams: {e:?}")))
                .ok()
        });

        Ok(ThemeContext {
            color_scheme,
            theme_params,
        })
    }

    fn expand(&self) -> Result<(), UiError> {
        self.web_app()?.expand().map_err(UiError::from)
    }

    fn on_viewport_changed(&self, callback: ViewportCallback) -> Result<(), UiError> {
        let web_app = self.web_app()?;
        let handler = Closure::wrap(Box::new(move || callback()) as Box<dyn Fn()>);
        web_app.on_event(VIEWPORT_CHANGED_EVENT, handler.as_ref().unchecked_ref())?;
        handler.forget();
        Ok(())
    }
}

/// Reads `target[key]`, treating `undefined`, `null` and non-objects as absent.
fn get_object(target: &JsValue, key: &str) -> Option<JsValue> {
    js_sys::Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|value| value.is_object())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_missing_host_is_unavailable() {
        let _ = js_sys::Reflect::delete_property(&js_sys::global(), &JsValue::from_str("Telegram"));
        let host = TelegramHost::new();
        assert!(matches!(
            host.theme_context(),
            Err(UiError::HostUnavailable(_))
        ));
    }

    #[wasm_bindgen_test]
    fn test_get_object_skips_primitives() {
        let target = js_sys::Object::new();
        js_sys::Reflect::set(&target, &"n".into(), &JsValue::from_f64(1.0)).unwrap();
        js_sys::Reflect::set(&target, &"o".into(), &js_sys::Object::new()).unwrap();

        assert!(get_object(&target, "n").is_none());
        assert!(get_object(&target, "o").is_some());
        assert!(get_object(&target, "missing").is_none());
    }
}
