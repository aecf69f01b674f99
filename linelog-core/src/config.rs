use derive_from_env::FromEnv;

use crate::severity::Severity;

#[derive(FromEnv)]
#[from_env(prefix = "LINELOG")]
#[allow(non_snake_case)]
struct LevelEnv {
    LEVEL: Severity,
}

#[derive(FromEnv)]
#[from_env(prefix = "LINELOG")]
#[allow(non_snake_case)]
struct TimestampEnv {
    TIMESTAMP: bool,
}

/// Settings a logger may take from `LINELOG_LEVEL` and `LINELOG_TIMESTAMP`.
///
/// Each variable is read on its own: a missing or unparseable one is `None`
/// and does not affect the other.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LineLogConfig {
    pub level: Option<Severity>,
    pub timestamp: Option<bool>,
}

impl LineLogConfig {
    pub fn from_env() -> Self {
        Self {
            level: LevelEnv::from_env().ok().map(|env| env.LEVEL),
            timestamp: TimestampEnv::from_env().ok().map(|env| env.TIMESTAMP),
        }
    }
}
