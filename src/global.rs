//! The process-wide default logger.
//!
//! Libraries that log through the `log` facade cannot be handed a logger, and
//! the facade only accepts one logger per process. A router is installed on
//! first use; it forwards networking records to the networking verbose sink
//! and every other record to the currently installed [`TestLogger`].
//! Replacing the logger is global and not scoped to a test.

use crate::logger::TestLogger;
use crate::networking;
use log::{trace, warn, Log, Metadata, Record};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Once, PoisonError, RwLock};

static CURRENT: RwLock<TestLogger> = RwLock::new(TestLogger::noop());
static ROUTED: AtomicBool = AtomicBool::new(false);

struct Router;

static ROUTER: Router = Router;

impl Log for Router {
    fn enabled(&self, metadata: &Metadata) -> bool {
        if networking::is_networking_target(metadata.target()) {
            return networking::enabled(metadata);
        }
        CURRENT
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .enabled(metadata)
    }

    // Networking records only ever reach the networking sink.
    fn log(&self, record: &Record) {
        if networking::is_networking_target(record.target()) {
            networking::log(record);
            return;
        }
        CURRENT
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .log(record);
    }

    fn flush(&self) {
        networking::flush();
        CURRENT
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .flush();
    }
}

/// Installs the router into the `log` facade once and refreshes the facade's
/// max level. Returns whether the router owns the facade.
pub(crate) fn install() -> bool {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| match log::set_logger(&ROUTER) {
        Ok(()) => ROUTED.store(true, Ordering::SeqCst),
        Err(_) => warn!("a logger is already installed; global debug output will not be routed"),
    });
    refresh_max_level();
    is_routed()
}

/// Whether the `log` facade forwards to [`global`].
pub fn is_routed() -> bool {
    ROUTED.load(Ordering::SeqCst)
}

fn refresh_max_level() {
    if is_routed() {
        log::set_max_level(global().level_filter().max(networking::level_filter()));
    }
}

/// The logger currently receiving `log` facade records. No-op until replaced.
pub fn global() -> TestLogger {
    CURRENT
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Makes `logger` the process-wide default and returns the one it replaced.
pub fn replace_globals(logger: TestLogger) -> TestLogger {
    let previous = {
        let mut current = CURRENT.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *current, logger)
    };
    install();
    trace!("replaced global logger {:?}", previous);
    previous
}
