use thiserror::Error;

/// Errors raised while setting a logger up. Emitting a line never fails.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("unknown severity `{0}`, expected one of TRACE, DEBUG, INFO, WARN, ERROR, FATAL")]
    UnknownSeverity(String),

    #[error("unable to open log file: {0}")]
    Io(#[from] std::io::Error),

    #[error("a logger is already registered with the log facade: {0}")]
    Bridge(#[from] log::SetLoggerError),
}
