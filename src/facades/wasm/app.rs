use super::{notification, theme};
use crate::adapters::{logger, set_debug_mode as set_debug_flag};
use crate::config::{self, UiConfig};
use crate::domain::error::UiError;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Document;

#[wasm_bindgen(start)]
pub fn start_app() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    on_dom_ready(run_startup)?;
    Ok(())
}

/// Replaces the configuration. Omitted fields take their defaults.
#[wasm_bindgen]
pub fn configure(options: JsValue) -> Result<(), JsValue> {
    let config = if options.is_undefined() || options.is_null() {
        UiConfig::default()
    } else {
        serde_wasm_bindgen::from_value::<UiConfig>(options)
            .map_err(|e| UiError::config(format!("Invalid options: {e:?}")))?
    };

    theme::reconfigure(config.theme.clone());
    notification::reconfigure(config.notifications.clone());
    config::set(config);
    Ok(())
}

#[wasm_bindgen(js_name = setDebugMode)]
pub fn set_debug_mode(enabled: bool) {
    set_debug_flag(enabled);
}

fn run_startup() {
    if let Err(e) = theme::install() {
        logger().error(&format!("Mini app startup failed: {e}"));
    }
}

/// Runs `callback` once the DOM is parsed, immediately if it already is.
fn on_dom_ready(callback: fn()) -> Result<(), UiError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| UiError::dom("No document available"))?;
    let loading = document.ready_state() == "loading";
    when_ready(&document, loading, callback)
}

fn when_ready(document: &Document, loading: bool, callback: fn()) -> Result<(), UiError> {
    if !loading {
        callback();
        return Ok(());
    }

    let listener = Closure::once_into_js(callback);
    document.add_event_listener_with_callback("DOMContentLoaded", listener.unchecked_ref())?;
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use js_sys::{Function, Object, Reflect};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    static READY_CALLS: AtomicUsize = AtomicUsize::new(0);

    fn count_ready() {
        READY_CALLS.fetch_add(1, Ordering::SeqCst);
    }

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    #[wasm_bindgen_test]
    fn test_ready_document_runs_callback_now() {
        let before = READY_CALLS.load(Ordering::SeqCst);

        when_ready(&document(), false, count_ready).unwrap();

        assert_eq!(READY_CALLS.load(Ordering::SeqCst), before + 1);
    }

    #[wasm_bindgen_test]
    fn test_loading_document_waits_for_dom_content_loaded() {
        let document = document();
        let before = READY_CALLS.load(Ordering::SeqCst);

        when_ready(&document, true, count_ready).unwrap();
        assert_eq!(READY_CALLS.load(Ordering::SeqCst), before);

        let event = web_sys::Event::new("DOMContentLoaded").unwrap();
        document.dispatch_event(&event).unwrap();
        assert_eq!(READY_CALLS.load(Ordering::SeqCst), before + 1);
    }

    /// Stub `Telegram.WebApp` that counts `expand()` calls and keeps the
    /// last `viewportChanged` handler.
    fn install_web_app(scheme: &str) -> Object {
        let web_app = Object::new();
        Reflect::set(&web_app, &"colorScheme".into(), &scheme.into()).unwrap();
        let expand = Function::new_no_args("this.expanded = (this.expanded || 0) + 1;");
        Reflect::set(&web_app, &"expand".into(), &expand).unwrap();
        let on_event = Function::new_with_args("name, cb", "this.onViewport = cb;");
        Reflect::set(&web_app, &"onEvent".into(), &on_event).unwrap();
        let telegram = Object::new();
        Reflect::set(&telegram, &"WebApp".into(), &web_app).unwrap();
        Reflect::set(&js_sys::global(), &"Telegram".into(), &telegram).unwrap();
        web_app
    }

    fn remove_web_app() {
        Reflect::delete_property(&js_sys::global(), &"Telegram".into()).unwrap();
    }

    fn body_classes() -> web_sys::DomTokenList {
        document().body().unwrap().class_list()
    }

    #[wasm_bindgen_test]
    fn test_start_app_installs_theme_on_loaded_page() {
        let web_app = install_web_app("dark");
        body_classes().remove_1("dark-theme").unwrap();

        start_app().unwrap();

        let expanded = Reflect::get(&web_app, &"expanded".into()).unwrap();
        assert_eq!(expanded.as_f64(), Some(1.0));
        assert!(body_classes().contains("dark-theme"));

        body_classes().remove_1("dark-theme").unwrap();
        remove_web_app();
    }

    #[wasm_bindgen_test]
    fn test_configure_keeps_startup_subscription() {
        let web_app = install_web_app("light");
        start_app().unwrap();

        let theme = Object::new();
        Reflect::set(&theme, &"darkClass".into(), &"night".into()).unwrap();
        let options = Object::new();
        Reflect::set(&options, &"theme".into(), &theme).unwrap();
        configure(options.into()).unwrap();

        Reflect::set(&web_app, &"colorScheme".into(), &"dark".into()).unwrap();
        let on_viewport = Reflect::get(&web_app, &"onViewport".into())
            .unwrap()
            .dyn_into::<Function>()
            .unwrap();
        on_viewport.call0(&JsValue::NULL).unwrap();

        assert!(body_classes().contains("night"));
        assert!(!body_classes().contains("dark-theme"));

        configure(JsValue::UNDEFINED).unwrap();
        body_classes().remove_1("night").unwrap();
        remove_web_app();
    }
}
