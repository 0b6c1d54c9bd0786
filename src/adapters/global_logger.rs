//! Global logger instance - automatically selects implementation based on build target.
//!
//! Supports both WASM (browser console) and native (stdout/stderr) platforms.
//! The correct implementation is selected at compile time based on the target architecture.
use crate::ports::LoggerPort;
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(not(target_arch = "wasm32"))]
use crate::adapters::native::ConsoleLogger;
#[cfg(target_arch = "wasm32")]
use crate::adapters::wasm::ConsoleLogger;

pub static LOGGER: Lazy<ConsoleLogger> = Lazy::new(ConsoleLogger::new);

static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

/// Get the global logger instance.
#[inline]
pub fn logger() -> &'static dyn LoggerPort {
    &*LOGGER
}

pub fn set_debug_mode(enabled: bool) {
    DEBUG_MODE.store(enabled, Ordering::SeqCst);
}

#[inline]
pub fn debug_enabled() -> bool {
    DEBUG_MODE.load(Ordering::SeqCst)
}
