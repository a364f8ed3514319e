use crate::config::DebugConfig;
use crate::context::TestContext;
use crate::error::{LoggerError, LoggerResult};
use crate::{global, networking};
use env_logger::{Target, WriteStyle};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Where an active logger writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    Stderr,
    File(PathBuf),
}

struct ActiveLogger {
    inner: env_logger::Logger,
    sink: Sink,
}

/// A logger handed to a test: either an active development logger or a no-op
/// that drops every record.
#[derive(Clone, Default)]
pub struct TestLogger {
    active: Option<Arc<ActiveLogger>>,
}

impl fmt::Debug for TestLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.active {
            Some(active) => f
                .debug_struct("TestLogger")
                .field("sink", &active.sink)
                .field("level", &active.inner.filter())
                .finish(),
            None => f.write_str("TestLogger(noop)"),
        }
    }
}

impl TestLogger {
    pub const fn noop() -> Self {
        TestLogger { active: None }
    }

    /// Builds the human-readable development logger: capitalized colored
    /// levels, debug and above, no backtraces, written to `log_file` if given
    /// and to stderr otherwise.
    pub fn development(log_file: Option<&Path>) -> LoggerResult<Self> {
        let sink = match log_file {
            Some(path) => Sink::File(path.to_path_buf()),
            None => Sink::Stderr,
        };

        let mut builder = env_logger::Builder::new();
        builder
            .filter_level(LevelFilter::Debug)
            .is_test(true)
            .format(|buf, record| {
                let level_style = buf.default_level_style(record.level());
                writeln!(
                    buf,
                    "{}\t{level_style}{:<5}{level_style:#}\t{}\t{}",
                    buf.timestamp_millis(),
                    record.level(),
                    record.target(),
                    record.args()
                )
            });

        match &sink {
            Sink::Stderr => {
                builder.target(Target::Stderr);
            }
            Sink::File(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|source| LoggerError::OpenLogFile {
                        path: path.clone(),
                        source,
                    })?;
                builder
                    .target(Target::Pipe(Box::new(file)))
                    .write_style(WriteStyle::Always);
            }
        }

        Ok(TestLogger {
            active: Some(Arc::new(ActiveLogger {
                inner: builder.build(),
                sink,
            })),
        })
    }

    pub fn is_noop(&self) -> bool {
        self.active.is_none()
    }

    pub fn sink(&self) -> Option<&Sink> {
        self.active.as_ref().map(|active| &active.sink)
    }

    /// The most verbose level this logger lets through; `Off` for the no-op.
    pub fn level_filter(&self) -> LevelFilter {
        self.active
            .as_ref()
            .map_or(LevelFilter::Off, |active| active.inner.filter())
    }

    /// Logs a single message without going through the `log` facade.
    pub fn emit(&self, level: Level, target: &str, args: fmt::Arguments<'_>) {
        self.log(
            &Record::builder()
                .level(level)
                .target(target)
                .args(args)
                .build(),
        );
    }
}

impl Log for TestLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.active
            .as_ref()
            .is_some_and(|active| active.inner.enabled(metadata))
    }

    fn log(&self, record: &Record) {
        if let Some(active) = &self.active {
            if active.inner.matches(record) {
                active.inner.log(record);
            }
        }
    }

    fn flush(&self) {
        if let Some(active) = &self.active {
            active.inner.flush();
        }
    }
}

/// Side effects the factory performs for libraries that do not take a logger
/// as an argument.
pub trait DebugHooks {
    fn enable_networking_debug(&self);
    fn install_global_logger(&self, logger: &TestLogger);
}

/// Applies the hooks to the process: networking verbose mode and the global
/// `log` facade logger.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessHooks;

impl DebugHooks for ProcessHooks {
    fn enable_networking_debug(&self) {
        networking::set_debug_logging();
    }

    fn install_global_logger(&self, logger: &TestLogger) {
        global::replace_globals(logger.clone());
    }
}

/// Returns the logger a test should use, resolved from the environment and the
/// `--debug` flag.
#[track_caller]
pub fn logger(ctx: &dyn TestContext) -> TestLogger {
    let config = DebugConfig::from_env();
    logger_with(ctx, &config, &ProcessHooks)
}

/// Same as [`logger`] with an explicit configuration and side-effect hooks.
///
/// Nothing is built when no toggle is on. Otherwise the development logger is
/// built, the networking and global hooks run for their own toggles, and the
/// logger is handed back only when `general_debug` is set. A build failure is
/// reported to `ctx` and yields the no-op logger without running any hook.
#[track_caller]
pub fn logger_with(
    ctx: &dyn TestContext,
    config: &DebugConfig,
    hooks: &dyn DebugHooks,
) -> TestLogger {
    let caller = Location::caller();

    if !config.is_debug_enabled() {
        return TestLogger::noop();
    }

    let logger = match TestLogger::development(config.log_file()) {
        Ok(logger) => logger,
        Err(err) => {
            ctx.report_error(format!("{}: setup debug logger error: `{}`", caller, err));
            return TestLogger::noop();
        }
    };

    if config.networking_debug {
        hooks.enable_networking_debug();
    }

    if config.third_party_debug {
        hooks.install_global_logger(&logger);
    }

    if config.general_debug {
        return logger;
    }

    TestLogger::noop()
}
