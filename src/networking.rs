use crate::global;
use log::{LevelFilter, Log, Metadata, Record};
use std::sync::OnceLock;

/// Records whose target starts with this are networking library output.
pub const NETWORKING_TARGET: &str = "libp2p";

static VERBOSE: OnceLock<Box<dyn Log>> = OnceLock::new();

/// Turns on the networking library's debug output on stderr. Idempotent.
pub fn set_debug_logging() {
    VERBOSE.get_or_init(|| {
        let mut builder = pretty_env_logger::formatted_builder();
        builder
            .filter_module(NETWORKING_TARGET, LevelFilter::Debug)
            .is_test(true);
        let verbose: Box<dyn Log> = Box::new(builder.build());
        verbose
    });
    global::install();
}

/// Whether `target` belongs to the networking library.
pub fn is_networking_target(target: &str) -> bool {
    target.starts_with(NETWORKING_TARGET)
}

pub fn is_debug_logging() -> bool {
    VERBOSE.get().is_some()
}

pub(crate) fn level_filter() -> LevelFilter {
    if is_debug_logging() {
        LevelFilter::Debug
    } else {
        LevelFilter::Off
    }
}

pub(crate) fn enabled(metadata: &Metadata) -> bool {
    VERBOSE
        .get()
        .is_some_and(|verbose| verbose.enabled(metadata))
}

pub(crate) fn log(record: &Record) {
    if let Some(verbose) = VERBOSE.get() {
        verbose.log(record);
    }
}

pub(crate) fn flush() {
    if let Some(verbose) = VERBOSE.get() {
        verbose.flush();
    }
}
