//! Test-time logging.
//!
//! [`logger`] hands each test a logger that is silent unless the run opted in:
//!
//! - `BERTY_DEBUG` (or the `--debug` flag) returns a colorized development logger,
//! - `LIBP2P_DEBUG` turns on the networking library's own debug output,
//! - `ORBITDB_DEBUG` installs the development logger as the process-wide `log` logger,
//! - `LOGFILE` sends the development logger's output to a file instead of stderr.
//!
//! ```no_run
//! use log::{Level, Log};
//! use testlog::{logger, TestReporter};
//!
//! let t = TestReporter::new();
//! let log = logger(&t);
//! log.emit(Level::Debug, "my_test", format_args!("connected"));
//! log.flush();
//! ```

pub mod config;
pub mod context;
pub mod env;
pub mod error;
pub mod flag;
pub mod global;
pub mod logger;
pub mod networking;

#[cfg(test)]
mod util;

pub use config::DebugConfig;
pub use context::{TestContext, TestReporter};
pub use env::parse_bool_from_env;
pub use error::{LoggerError, LoggerResult};
pub use logger::{logger, logger_with, DebugHooks, ProcessHooks, Sink, TestLogger};
