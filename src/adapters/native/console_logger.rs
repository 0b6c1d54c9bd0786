use crate::adapters::global_logger::debug_enabled;
use crate::ports::LoggerPort;

/// Native logger implementation using stdout/stderr.
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
        println!("[LOG] {message}");
    }

    fn debug(&self, message: &str) {
        if debug_enabled() {
            println!("[DEBUG] {message}");
        }
    }

    fn warn(&self, message: &str) {
        eprintln!("[WARN] {message}");
    }

    fn error(&self, message: &str) {
        eprintln!("[ERROR] {message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_creation() {
        let logger = ConsoleLogger::new();
        logger.log("test");
    }

    #[test]
    fn test_logger_all_methods() {
        let logger = ConsoleLogger::default();
        logger.log("test log");
        logger.debug("test debug");
        logger.warn("test warn");
        logger.error("test error");
    }
}
