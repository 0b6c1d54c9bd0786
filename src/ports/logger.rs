/// Logger port - provides logging capabilities across platforms.
///
/// Abstracts logging from platform-specific implementations:
/// - WASM: Console API (console.log, console.debug, ...)
/// - Native: standard output / standard error
pub trait LoggerPort {
    /// Log an informational message.
    fn log(&self, message: &str);

    /// Log a debug message. Adapters drop it unless debug mode is on.
    fn debug(&self, message: &str);

    /// Log a warning message.
    fn warn(&self, message: &str);

    /// Log an error message.
    fn error(&self, message: &str);
}
