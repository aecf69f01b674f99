use std::{
    path::Path,
    sync::{
        Mutex, MutexGuard, PoisonError,
        atomic::{AtomicU64, Ordering},
    },
};

use linelog_core::{LineLogConfig, LogError, LogFile, LogStderr, LogStdout, LogWriter, Severity};

use crate::{
    bridge::install_log_bridge,
    global,
    logger::{Logger, LoggerState},
};

/// State active before each live guard, oldest guard first.
struct GuardFrame {
    id: u64,
    previous: LoggerState,
}

static GUARD_STACK: Mutex<Vec<GuardFrame>> = Mutex::new(Vec::new());
static NEXT_GUARD_ID: AtomicU64 = AtomicU64::new(0);

fn guard_stack() -> MutexGuard<'static, Vec<GuardFrame>> {
    GUARD_STACK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Returned by [`ConfigBuilder::init_global`]. Dropping it detaches the
/// configuration it installed and flushes that sink.
///
/// Guards stack. Dropping the most recent one restores the configuration
/// that was active before it. Dropping an older one first only removes its
/// configuration from the stack, so the newer guard later restores what was
/// active before both.
pub struct LoggerGuard {
    id: u64,
}

impl Drop for LoggerGuard {
    fn drop(&mut self) {
        let mut stack = guard_stack();
        let Some(pos) = stack.iter().position(|frame| frame.id == self.id) else {
            return;
        };
        let GuardFrame { previous, .. } = stack.remove(pos);
        let mut detached = match stack.get_mut(pos) {
            // a newer guard is live: it now restores what preceded this one
            Some(newer) => std::mem::replace(&mut newer.previous, previous),
            None => global().swap_state(previous),
        };
        let _ = detached.sink.flush();
    }
}

/// Builder for configuring and initializing a logger.
pub struct ConfigBuilder {
    sink: Option<Box<dyn LogWriter>>,
    threshold: Severity,
    timestamp: bool,
    color: bool,
    log_bridge: bool,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self {
            sink: None,
            threshold: Severity::Info,
            timestamp: true,
            color: false,
            log_bridge: false,
        }
    }
}

impl ConfigBuilder {
    fn into_state(self) -> (LoggerState, bool) {
        let Self {
            sink,
            threshold,
            timestamp,
            color,
            log_bridge,
        } = self;
        let state = LoggerState {
            sink: sink.unwrap_or_else(|| Box::new(LogStderr)),
            threshold,
            timestamp,
            color,
        };
        (state, log_bridge)
    }

    /// Sets the minimum severity written.
    pub fn with_threshold(self, threshold: Severity) -> Self {
        Self { threshold, ..self }
    }
    /// Enables or disables the timestamp prefix.
    pub fn with_timestamp(self, yes: bool) -> Self {
        Self {
            timestamp: yes,
            ..self
        }
    }
    /// Disables the timestamp prefix, lines start with the level name.
    pub fn no_timestamp(self) -> Self {
        Self {
            timestamp: false,
            ..self
        }
    }
    /// Enables or disables ANSI colouring of level names.
    pub fn with_color(self, yes: bool) -> Self {
        Self { color: yes, ..self }
    }
    /// Overrides the threshold and timestamp flag with `LINELOG_LEVEL` and
    /// `LINELOG_TIMESTAMP`, each only when set to a valid value.
    pub fn from_env(self) -> Self {
        let LineLogConfig { level, timestamp } = LineLogConfig::from_env();
        Self {
            threshold: level.unwrap_or(self.threshold),
            timestamp: timestamp.unwrap_or(self.timestamp),
            ..self
        }
    }
    /// Sets the sink lines are written to.
    pub fn with_sink<W: LogWriter + 'static>(self, sink: W) -> Self {
        Self {
            sink: Some(Box::new(sink)),
            ..self
        }
    }
    /// Writes lines to standard error, the default.
    pub fn with_stderr(self) -> Self {
        self.with_sink(LogStderr)
    }
    /// Writes lines to standard output.
    pub fn with_stdout(self) -> Self {
        self.with_sink(LogStdout)
    }
    /// Appends lines to a file, created if it does not exist.
    pub fn with_log_file<P: AsRef<Path>>(self, path: P) -> Result<Self, LogError> {
        Ok(self.with_sink(LogFile::new(path)?))
    }
    /// Appends lines to a file if a path is given.
    pub fn maybe_with_log_file<P: AsRef<Path>>(self, path: Option<P>) -> Result<Self, LogError> {
        match path {
            Some(path) => self.with_log_file(path),
            None => Ok(self),
        }
    }
    /// Also routes `log::info!` and friends through the process-wide logger
    /// once [`ConfigBuilder::init_global`] runs. Ignored by [`ConfigBuilder::build`].
    pub fn with_log_bridge(self) -> Self {
        Self {
            log_bridge: true,
            ..self
        }
    }
    /// Builds an independent logger.
    pub fn build(self) -> Logger {
        Logger::from_state(self.into_state().0)
    }
    /// Applies the configuration to the process-wide logger.
    /// Returns a guard detaching it again when dropped.
    #[must_use = "LoggerGuard detaches the configuration when dropped. Do \"let _guard = logger_config().init_global();\""]
    pub fn init_global(self) -> LoggerGuard {
        let (state, log_bridge) = self.into_state();
        if log_bridge {
            // another facade logger, or ours from an earlier call, keeps the slot
            let _ = install_log_bridge();
        }
        let mut stack = guard_stack();
        let previous = global().swap_state(state);
        let id = NEXT_GUARD_ID.fetch_add(1, Ordering::Relaxed);
        stack.push(GuardFrame { id, previous });
        LoggerGuard { id }
    }
}

/// Returns a default ConfigBuilder for configuring the logger.
pub fn logger_config() -> ConfigBuilder {
    ConfigBuilder::default()
}
