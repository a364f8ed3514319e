use log::trace;

pub const GENERAL_DEBUG_ENV_KEY: &str = "BERTY_DEBUG";
pub const NETWORKING_DEBUG_ENV_KEY: &str = "LIBP2P_DEBUG";
pub const THIRD_PARTY_DEBUG_ENV_KEY: &str = "ORBITDB_DEBUG";
pub const LOG_FILE_ENV_KEY: &str = "LOGFILE";

/// Parses the conventional textual forms of a boolean.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and their false
/// counterparts `0`, `f`, `F`, `FALSE`, `false`, `False`.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Reads `key` from the environment as a boolean. Unset, non-unicode and
/// unparsable values are all `false`.
pub fn parse_bool_from_env(key: &str) -> bool {
    let Ok(value) = std::env::var(key) else {
        return false;
    };
    let parsed = parse_bool(&value);
    trace!("loaded {} from env: {:?} => {:?}", key, value, parsed);
    parsed.unwrap_or(false)
}
