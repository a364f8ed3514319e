use log::{Level, Log, Metadata};
use testlog::env::{
    GENERAL_DEBUG_ENV_KEY, LOG_FILE_ENV_KEY, NETWORKING_DEBUG_ENV_KEY, THIRD_PARTY_DEBUG_ENV_KEY,
};
use testlog::{global, logger, networking, TestReporter};

#[test]
fn nothing_enabled_means_no_output_and_no_side_effects() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("unused.log");
    std::env::set_var(GENERAL_DEBUG_ENV_KEY, "not a bool");
    std::env::remove_var(NETWORKING_DEBUG_ENV_KEY);
    std::env::set_var(THIRD_PARTY_DEBUG_ENV_KEY, "0");
    std::env::set_var(LOG_FILE_ENV_KEY, &path);

    let t = TestReporter::new();
    let log = logger(&t);
    assert!(log.is_noop());
    assert!(!log.enabled(&Metadata::builder().level(Level::Error).build()));
    log.emit(Level::Error, "silent", format_args!("dropped"));

    assert!(!networking::is_debug_logging());
    assert!(!global::is_routed());
    assert!(!path.exists());
}
