use linelog_core::{LineLogConfig, Severity};

fn set(key: &str, value: &str) {
    // SAFETY: this binary holds a single test, no other thread reads the environment
    unsafe { std::env::set_var(key, value) }
}

fn unset(key: &str) {
    // SAFETY: see `set`
    unsafe { std::env::remove_var(key) }
}

#[test]
fn test_env_variables_parsed_independently() {
    unset("LINELOG_LEVEL");
    unset("LINELOG_TIMESTAMP");
    assert_eq!(LineLogConfig::from_env(), LineLogConfig::default());

    set("LINELOG_LEVEL", "debug");
    set("LINELOG_TIMESTAMP", "yes");
    assert_eq!(
        LineLogConfig::from_env(),
        LineLogConfig {
            level: Some(Severity::Debug),
            timestamp: None,
        }
    );

    set("LINELOG_LEVEL", "loud");
    set("LINELOG_TIMESTAMP", "false");
    assert_eq!(
        LineLogConfig::from_env(),
        LineLogConfig {
            level: None,
            timestamp: Some(false),
        }
    );

    unset("LINELOG_LEVEL");
    unset("LINELOG_TIMESTAMP");
}
