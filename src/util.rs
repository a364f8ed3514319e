use crate::env::{
    GENERAL_DEBUG_ENV_KEY, LOG_FILE_ENV_KEY, NETWORKING_DEBUG_ENV_KEY, THIRD_PARTY_DEBUG_ENV_KEY,
};
use std::sync::{Mutex, MutexGuard, PoisonError};

static ENV_LOCK: Mutex<()> = Mutex::new(());

const KEYS: [&str; 4] = [
    GENERAL_DEBUG_ENV_KEY,
    NETWORKING_DEBUG_ENV_KEY,
    THIRD_PARTY_DEBUG_ENV_KEY,
    LOG_FILE_ENV_KEY,
];

/// Serializes tests that touch the debug variables and clears them on both ends.
pub(crate) struct EnvGuard {
    _lock: MutexGuard<'static, ()>,
}

impl EnvGuard {
    pub(crate) fn clean() -> Self {
        let lock = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        clear();
        EnvGuard { _lock: lock }
    }

    pub(crate) fn set(&self, key: &str, value: &str) {
        std::env::set_var(key, value);
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        clear();
    }
}

fn clear() {
    for key in KEYS {
        std::env::remove_var(key);
    }
}
