use std::{
    fmt::Display,
    sync::{Mutex, MutexGuard, PoisonError},
};

use linelog_core::{LogStderr, LogWriter, Severity, format_line, format_message, format_timestamp};

/// Everything guarded by the logger's single lock.
pub(crate) struct LoggerState {
    pub(crate) sink: Box<dyn LogWriter>,
    pub(crate) threshold: Severity,
    pub(crate) timestamp: bool,
    pub(crate) color: bool,
}

impl Default for LoggerState {
    fn default() -> Self {
        Self {
            sink: Box::new(LogStderr),
            threshold: Severity::Info,
            timestamp: true,
            color: false,
        }
    }
}

/// Leveled line logger writing to one sink.
///
/// Every operation takes the same lock, so a line is written and flushed
/// without interleaving with other lines or with configuration changes.
/// Messages are formatted before the lock is taken.
///
/// The sink must not log through the same logger: doing so deadlocks.
pub struct Logger {
    state: Mutex<LoggerState>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::from_state(LoggerState::default())
    }
}

impl Logger {
    /// Logger writing to stderr at threshold `INFO`, timestamps on.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_state(state: LoggerState) -> Self {
        Self {
            state: Mutex::new(state),
        }
    }

    // a panic inside a sink must not disable logging for everybody else
    fn lock(&self) -> MutexGuard<'_, LoggerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn swap_state(&self, state: LoggerState) -> LoggerState {
        std::mem::replace(&mut *self.lock(), state)
    }

    /// Redirects output to `sink` and hands back the previous sink.
    pub fn set_sink<W: LogWriter + 'static>(&self, sink: W) -> Box<dyn LogWriter> {
        self.replace_sink(Box::new(sink))
    }

    pub fn replace_sink(&self, sink: Box<dyn LogWriter>) -> Box<dyn LogWriter> {
        std::mem::replace(&mut self.lock().sink, sink)
    }

    pub fn set_threshold(&self, threshold: Severity) {
        self.lock().threshold = threshold;
    }

    pub fn threshold(&self) -> Severity {
        self.lock().threshold
    }

    pub fn enable_timestamp(&self, enabled: bool) {
        self.lock().timestamp = enabled;
    }

    pub fn is_timestamp_enabled(&self) -> bool {
        self.lock().timestamp
    }

    pub fn enable_color(&self, enabled: bool) {
        self.lock().color = enabled;
    }

    pub fn is_color_enabled(&self) -> bool {
        self.lock().color
    }

    /// Whether a line of `severity` would currently be written.
    pub fn enabled(&self, severity: Severity) -> bool {
        severity >= self.threshold()
    }

    /// Formats and writes one line if `severity` passes the threshold.
    ///
    /// Each `{}` in `template` takes the next argument; see
    /// [`format_message`] for unmatched placeholders and extra arguments.
    /// Sink errors are ignored.
    pub fn log(&self, severity: Severity, template: &str, args: &[&dyn Display]) {
        if !self.enabled(severity) {
            return;
        }
        let message = format_message(template, args);
        let mut state = self.lock();
        let timestamp = state.timestamp.then(format_timestamp);
        let line = format_line(timestamp.as_deref(), severity, &message, state.color);
        let _ = state.sink.write_line(&line);
        let _ = state.sink.flush();
    }

    pub fn trace(&self, template: &str, args: &[&dyn Display]) {
        self.log(Severity::Trace, template, args)
    }

    pub fn debug(&self, template: &str, args: &[&dyn Display]) {
        self.log(Severity::Debug, template, args)
    }

    pub fn info(&self, template: &str, args: &[&dyn Display]) {
        self.log(Severity::Info, template, args)
    }

    pub fn warn(&self, template: &str, args: &[&dyn Display]) {
        self.log(Severity::Warn, template, args)
    }

    pub fn error(&self, template: &str, args: &[&dyn Display]) {
        self.log(Severity::Error, template, args)
    }

    pub fn fatal(&self, template: &str, args: &[&dyn Display]) {
        self.log(Severity::Fatal, template, args)
    }

    pub fn flush(&self) {
        let _ = self.lock().sink.flush();
    }
}
