use crate::bindings::LogLevel;

/// Logs messages to the JavaScript console through the `jsLog` binding.
///
/// On non-WebAssembly targets (unit tests), messages go to stderr instead.
pub struct Logger;

impl Logger {
    /// Log a very important error or highly unexpected event.
    pub fn error(log: &str) {
        Logger::log(LogLevel::Error, log);
    }

    /// Log a less important error or unexpected event.
    pub fn warn(log: &str) {
        Logger::log(LogLevel::Warn, log);
    }

    /// Log an important event.
    pub fn info(log: &str) {
        Logger::log(LogLevel::Info, log);
    }

    /// Log a debugging event.
    pub fn debug(log: &str) {
        Logger::log(LogLevel::Debug, log);
    }

    #[cfg(target_arch = "wasm32")]
    fn log(level: LogLevel, log: &str) {
        crate::bindings::jsLog(level, log);
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn log(level: LogLevel, log: &str) {
        eprintln!("[{:?}] {}", level, log);
    }
}
