use std::{fmt, str::FromStr};

use log::{Level, LevelFilter};

use crate::error::LogError;

/// Severity of a log line, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Fatal,
}

impl Severity {
    /// All severities in ascending order.
    pub const ALL: [Severity; 6] = [
        Severity::Trace,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Fatal,
    ];

    /// Uppercase name as it appears between the brackets of a line.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    /// Closest `log` facade filter. The facade has no fatal level.
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            Severity::Trace => LevelFilter::Trace,
            Severity::Debug => LevelFilter::Debug,
            Severity::Info => LevelFilter::Info,
            Severity::Warn => LevelFilter::Warn,
            Severity::Error | Severity::Fatal => LevelFilter::Error,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|severity| severity.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| LogError::UnknownSeverity(s.to_string()))
    }
}

impl From<Level> for Severity {
    fn from(level: Level) -> Self {
        match level {
            Level::Error => Severity::Error,
            Level::Warn => Severity::Warn,
            Level::Info => Severity::Info,
            Level::Debug => Severity::Debug,
            Level::Trace => Severity::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_order() {
        for window in Severity::ALL.windows(2) {
            assert!(window[0] < window[1]);
        }
        assert_eq!(Severity::default(), Severity::Info);
    }

    #[test]
    fn test_parse_any_case() {
        assert_eq!("warn".parse::<Severity>().unwrap(), Severity::Warn);
        assert_eq!("Fatal".parse::<Severity>().unwrap(), Severity::Fatal);
        assert_eq!(" TRACE ".parse::<Severity>().unwrap(), Severity::Trace);
        for severity in Severity::ALL {
            assert_eq!(severity.to_string().parse::<Severity>().unwrap(), severity);
        }
    }

    #[test]
    fn test_parse_unknown() {
        let err = "verbose".parse::<Severity>().unwrap_err();
        assert!(matches!(err, LogError::UnknownSeverity(ref s) if s == "verbose"));
        assert!(err.to_string().contains("verbose"));
    }

    #[test]
    fn test_log_facade_mapping() {
        assert_eq!(Severity::from(Level::Error), Severity::Error);
        assert_eq!(Severity::from(Level::Trace), Severity::Trace);
        assert_eq!(Severity::Fatal.to_level_filter(), LevelFilter::Error);
        assert_eq!(Severity::Debug.to_level_filter(), LevelFilter::Debug);
    }
}
