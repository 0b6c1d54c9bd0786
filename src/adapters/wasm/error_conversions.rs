use crate::domain::error::UiError;
use wasm_bindgen::JsValue;

/// Conversion from JsValue to UiError for WASM infrastructure
impl From<JsValue> for UiError {
    fn from(err: JsValue) -> Self {
        let message = err
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&err, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|message| message.as_string())
            })
            .unwrap_or_else(|| "Unknown JavaScript error".to_string());
        UiError::dom(message)
    }
}

/// Conversion from UiError to JsValue for WASM boundary
impl From<UiError> for JsValue {
    fn from(error: UiError) -> Self {
        js_sys::Error::new(&error.to_string()).into()
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_js_error_message_is_kept() {
        let err: UiError = JsValue::from(js_sys::Error::new("boom")).into();
        assert_eq!(err, UiError::Dom("boom".to_string()));
    }

    #[wasm_bindgen_test]
    fn test_ui_error_becomes_js_error() {
        let value: JsValue = UiError::ContainerNotFound(".container".to_string()).into();
        assert!(value.is_instance_of::<js_sys::Error>());
    }
}
