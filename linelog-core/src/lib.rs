//! # linelog-core
//! Core utilities for linelog - severities, placeholder formatting, line layout and sinks.

mod config;
mod error;
mod format;
mod line;
mod log_writer;
mod severity;
mod timestamp;

pub use config::LineLogConfig;
pub use error::LogError;
pub use format::{PLACEHOLDER, format_message};
pub use line::format_line;
pub use log_writer::{IoWriter, LogFile, LogStderr, LogStdout, LogWriter, SharedBuffer};
pub use severity::Severity;
pub use timestamp::{TIMESTAMP_FORMAT, format_timestamp, format_timestamp_at};
