use log::{Level, Log, Metadata};
use testlog::env::{
    GENERAL_DEBUG_ENV_KEY, LOG_FILE_ENV_KEY, NETWORKING_DEBUG_ENV_KEY, THIRD_PARTY_DEBUG_ENV_KEY,
};
use testlog::{global, logger, networking, Sink, TestReporter};

#[test]
fn general_toggle_returns_active_logger() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("berty.log");
    std::env::set_var(GENERAL_DEBUG_ENV_KEY, "1");
    std::env::remove_var(NETWORKING_DEBUG_ENV_KEY);
    std::env::remove_var(THIRD_PARTY_DEBUG_ENV_KEY);
    std::env::set_var(LOG_FILE_ENV_KEY, &path);

    let t = TestReporter::new();
    let log = logger(&t);
    assert!(!log.is_noop());
    assert_eq!(log.sink(), Some(&Sink::File(path.clone())));
    assert!(log.enabled(&Metadata::builder().level(Level::Debug).build()));

    log.emit(Level::Debug, "berty::test", format_args!("debug entry"));
    log.emit(Level::Error, "berty::test", format_args!("error entry"));
    log.emit(Level::Trace, "berty::test", format_args!("trace entry"));
    log.flush();

    assert!(!networking::is_debug_logging());
    assert!(global::global().is_noop());
    assert!(!global::is_routed());

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("DEBUG"), "{contents}");
    assert!(contents.contains("debug entry"), "{contents}");
    assert!(contents.contains("error entry"), "{contents}");
    assert!(!contents.contains("trace entry"), "{contents}");
}
