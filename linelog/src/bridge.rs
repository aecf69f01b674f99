use log::{LevelFilter, Log, Metadata, Record};

use linelog_core::LogError;

use crate::global;

/// Forwards records of the `log` facade to the process-wide logger.
/// Records are written verbatim, `{}` in them is not substituted.
pub struct LogBridge;

impl Log for LogBridge {
    /// Reads the threshold under the logger lock. `log` checks it again,
    /// so `log_enabled!` followed by a call takes the lock one extra time.
    fn enabled(&self, metadata: &Metadata) -> bool {
        global().enabled(metadata.level().into())
    }

    fn log(&self, record: &Record) {
        global().log(record.level().into(), "{}", &[record.args()]);
    }

    fn flush(&self) {
        global().flush();
    }
}

/// Registers [`LogBridge`] as the `log` facade logger.
///
/// Fails with [`LogError::Bridge`] if a facade logger is already registered.
pub fn install_log_bridge() -> Result<(), LogError> {
    log::set_boxed_logger(Box::new(LogBridge))?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}
