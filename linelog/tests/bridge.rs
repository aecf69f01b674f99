use linelog::{LogError, Severity, SharedBuffer, install_log_bridge, logger_config};

#[test]
fn test_log_facade_records_are_forwarded() {
    let buffer = SharedBuffer::new();
    let _guard = logger_config()
        .with_sink(buffer.clone())
        .with_threshold(Severity::Debug)
        .no_timestamp()
        .with_log_bridge()
        .init_global();

    log::info!("Hello, {}!", "facade");
    log::trace!("below threshold");
    log::error!("literal {{}} stays");
    assert!(log::log_enabled!(log::Level::Debug));
    assert!(!log::log_enabled!(log::Level::Trace));

    assert_eq!(
        buffer.lines(),
        vec!["[INFO] Hello, facade!", "[ERROR] literal {} stays"]
    );

    assert!(matches!(install_log_bridge(), Err(LogError::Bridge(_))));
}
