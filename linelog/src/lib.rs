//! # linelog
//! Leveled, timestamped, thread-safe line logger writing to a swappable sink.
//!
//! ## Usage
//! ```toml
//! // Cargo.toml
//! ...
//! [dependencies]
//! linelog = "0.1.0"
//! ```
//!
//! ```rust
//! linelog::info!("Hello {}", "world");
//! // 2024-03-09 07:05:03.042 [INFO] Hello world   (on stderr)
//! ```
//!
//! Each `{}` takes the next argument, anything implementing `Display`.
//! Placeholders left over once the arguments run out are written as is,
//! extra arguments are ignored.
//!
//! ## Configuring the process-wide logger
//! ```rust
//! use linelog::{Severity, SharedBuffer, logger_config};
//!
//! let buffer = SharedBuffer::new();
//! let guard = logger_config()
//!     .with_sink(buffer.clone())
//!     .with_threshold(Severity::Warn)
//!     .no_timestamp()
//!     .init_global();
//!
//! linelog::info!("Ignored message");
//! linelog::error!("An error {}", 42);
//! // dropping the guard restores stderr and the previous settings
//! drop(guard);
//! assert_eq!(buffer.contents(), "[ERROR] An error 42\n");
//! ```
//!
//! ## Multi-threaded logging to a file
//! Lines from different threads never interleave.
//! ```rust
//! use linelog::logger_config;
//!
//! let path = std::env::temp_dir().join("linelog_doc_threads.log");
//! std::fs::remove_file(&path).ok();
//! let guard = logger_config()
//!     .with_log_file(&path)
//!     .expect("Unable to create log file")
//!     .init_global();
//! let handles: Vec<_> = (0..4).map(|i| {
//!     std::thread::spawn(move || {
//!         for j in 0..10 {
//!             linelog::warn!("thread {} message {}", i, j);
//!         }
//!     })
//! }).collect();
//! for h in handles { h.join().unwrap(); }
//! drop(guard);
//! assert_eq!(std::fs::read_to_string(&path).unwrap().lines().count(), 40);
//! ```
//!
//! ## Runtime configuration
//! The free functions act on the same process-wide logger and take effect
//! for every later line. The logger starts at `INFO` with timestamps on.
//! `logger_config().from_env()` opts into `LINELOG_LEVEL` and `LINELOG_TIMESTAMP`.
//! ```rust
//! use linelog::Severity;
//!
//! linelog::set_threshold(Severity::Debug);
//! linelog::enable_timestamp(false);
//! linelog::debug!("now visible");
//! assert_eq!(linelog::threshold(), Severity::Debug);
//! ```

mod bridge;
mod config;
mod logger;
mod macros;

use std::{fmt::Display, sync::LazyLock};

pub use bridge::{LogBridge, install_log_bridge};
pub use config::{ConfigBuilder, LoggerGuard, logger_config};
pub use linelog_core::{
    IoWriter, LogError, LogFile, LogStderr, LogStdout, LogWriter, Severity, SharedBuffer,
    format_message,
};
pub use logger::Logger;

/// Process-wide logger, writing to stderr until redirected.
static GLOBAL_LOGGER: LazyLock<Logger> = LazyLock::new(Logger::new);

/// The process-wide logger used by the free functions and macros.
pub fn global() -> &'static Logger {
    &GLOBAL_LOGGER
}

/// Redirects the process-wide logger and hands back the previous sink,
/// so it can be restored with [`replace_sink`].
pub fn set_sink<W: LogWriter + 'static>(sink: W) -> Box<dyn LogWriter> {
    global().set_sink(sink)
}

pub fn replace_sink(sink: Box<dyn LogWriter>) -> Box<dyn LogWriter> {
    global().replace_sink(sink)
}

pub fn set_threshold(threshold: Severity) {
    global().set_threshold(threshold)
}

pub fn threshold() -> Severity {
    global().threshold()
}

pub fn enable_timestamp(enabled: bool) {
    global().enable_timestamp(enabled)
}

pub fn is_timestamp_enabled() -> bool {
    global().is_timestamp_enabled()
}

pub fn enable_color(enabled: bool) {
    global().enable_color(enabled)
}

pub fn is_color_enabled() -> bool {
    global().is_color_enabled()
}

pub fn log(severity: Severity, template: &str, args: &[&dyn Display]) {
    global().log(severity, template, args)
}

pub fn trace(template: &str, args: &[&dyn Display]) {
    global().trace(template, args)
}

pub fn debug(template: &str, args: &[&dyn Display]) {
    global().debug(template, args)
}

pub fn info(template: &str, args: &[&dyn Display]) {
    global().info(template, args)
}

pub fn warn(template: &str, args: &[&dyn Display]) {
    global().warn(template, args)
}

pub fn error(template: &str, args: &[&dyn Display]) {
    global().error(template, args)
}

pub fn fatal(template: &str, args: &[&dyn Display]) {
    global().fatal(template, args)
}
