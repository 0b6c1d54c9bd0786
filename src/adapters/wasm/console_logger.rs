use crate::adapters::global_logger::debug_enabled;
use crate::ports::LoggerPort;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn debug(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);
}

#[derive(Debug, Clone, Copy)]
pub struct ConsoleLogger;

impl ConsoleLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerPort for ConsoleLogger {
    fn log(&self, message: &str) {
        log(message);
    }

    fn debug(&self, message: &str) {
        if debug_enabled() {
            debug(message);
        }
    }

    fn warn(&self, message: &str) {
        warn(message);
    }

    fn error(&self, message: &str) {
        error(message);
    }
}
