use crate::env::{
    parse_bool_from_env, GENERAL_DEBUG_ENV_KEY, LOG_FILE_ENV_KEY, NETWORKING_DEBUG_ENV_KEY,
    THIRD_PARTY_DEBUG_ENV_KEY,
};
use crate::flag;
use log::debug;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Once;

/// Which debug outputs a test run opted into.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DebugConfig {
    /// Return the active logger to the caller.
    pub general_debug: bool,
    /// Turn on the networking library's own verbose output.
    pub networking_debug: bool,
    /// Install the built logger as the process-wide default logger.
    pub third_party_debug: bool,
    /// Write active output here instead of stderr.
    pub log_file: Option<PathBuf>,
}

impl DebugConfig {
    /// Resolves the configuration from the environment and the `--debug` flag.
    ///
    /// A `.env` file in the working directory is loaded once per process; it
    /// never overrides variables that are already set.
    pub fn from_env() -> Self {
        static DOTENV: Once = Once::new();
        DOTENV.call_once(|| {
            dotenv::dotenv().ok();
        });
        Self::from_env_and_flag(flag::debug())
    }

    /// Same as [`DebugConfig::from_env`] with an explicit flag value and no `.env` loading.
    pub fn from_env_and_flag(debug_flag: bool) -> Self {
        let config = DebugConfig {
            general_debug: parse_bool_from_env(GENERAL_DEBUG_ENV_KEY) || debug_flag,
            networking_debug: parse_bool_from_env(NETWORKING_DEBUG_ENV_KEY),
            third_party_debug: parse_bool_from_env(THIRD_PARTY_DEBUG_ENV_KEY),
            log_file: std::env::var_os(LOG_FILE_ENV_KEY)
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
        };
        debug!("resolved debug config: {:?}", config);
        config
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.general_debug || self.third_party_debug || self.networking_debug
    }

    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }
}
