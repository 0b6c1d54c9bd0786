#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use js_sys::{Function, Reflect};
use miniapp_ui::facades::wasm::notification::{dismiss_notification, show_notification};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

/// Alert stub whose `close()` only counts calls, like Bootstrap's fade-out
/// which leaves the element in place for a while.
const COUNTING_ALERT: &str = "
    const Alert = function () {};
    Alert.getOrCreateInstance = function (el) {
        return { close() { el.dataset.closed = String(Number(el.dataset.closed || 0) + 1); } };
    };
    window.bootstrap = { Alert };
";

const FAILING_ALERT: &str = "
    const Alert = function () {};
    Alert.getOrCreateInstance = function () {
        return { close() { throw new Error('close failed'); } };
    };
    window.bootstrap = { Alert };
";

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn install_toolkit(source: &str) {
    Function::new_no_args(source).call0(&wasm_bindgen::JsValue::NULL).unwrap();
}

fn remove_toolkit() {
    Reflect::delete_property(&js_sys::global(), &"bootstrap".into()).unwrap();
}

fn fresh_container() -> Element {
    while let Some(existing) = document().query_selector(".container").unwrap() {
        existing.remove();
    }
    let container = document().create_element("div").unwrap();
    container.set_class_name("container");
    document().body().unwrap().append_child(&container).unwrap();
    container
}

fn close_button(banner: &Element) -> HtmlElement {
    banner
        .query_selector(".btn-close")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
}

#[wasm_bindgen_test]
fn test_toolkit_closes_banner_instead_of_removing() {
    install_toolkit(COUNTING_ALERT);
    let container = fresh_container();
    let id = show_notification("Saved", None).unwrap();
    let banner = container.first_element_child().unwrap();

    assert!(dismiss_notification(id).unwrap());

    assert!(banner.is_connected());
    assert_eq!(banner.get_attribute("data-closed").as_deref(), Some("1"));
    assert!(banner.get_attribute("data-banner-id").is_none());
    assert!(!dismiss_notification(id).unwrap());
    remove_toolkit();
}

#[wasm_bindgen_test]
fn test_second_click_while_fading_is_ignored() {
    install_toolkit(COUNTING_ALERT);
    let container = fresh_container();
    let id = show_notification("Saved", Some("warning".to_string())).unwrap();
    let banner = container.first_element_child().unwrap();
    let button = close_button(&banner);

    button.click();
    button.click();

    assert!(banner.is_connected());
    assert_eq!(banner.get_attribute("data-closed").as_deref(), Some("1"));
    assert!(!dismiss_notification(id).unwrap());
    remove_toolkit();
}

#[wasm_bindgen_test]
fn test_failing_toolkit_falls_back_to_removal() {
    install_toolkit(FAILING_ALERT);
    let container = fresh_container();
    let id = show_notification("Saved", None).unwrap();

    assert!(dismiss_notification(id).unwrap());

    assert!(container.first_element_child().is_none());
    remove_toolkit();
}
