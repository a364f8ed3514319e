use crate::env::parse_bool;
use clap::{ArgAction, Parser};
use log::trace;
use std::sync::OnceLock;

#[derive(Parser, Debug)]
#[command(
    no_binary_name = true,
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
struct DebugFlag {
    /// is more verbose logging
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true",
        value_parser = parse_flag_value
    )]
    debug: bool,
}

fn parse_flag_value(value: &str) -> Result<bool, String> {
    parse_bool(value).ok_or_else(|| format!("invalid boolean value '{value}'"))
}

/// Maps `-debug[=v]` and `--debug[=v]` onto the long form; drops anything else
/// so the test harness's own arguments never reach the parser.
fn normalize(arg: &str) -> Option<String> {
    let rest = arg.strip_prefix("--").or_else(|| arg.strip_prefix('-'))?;
    if rest == "debug" || rest.starts_with("debug=") {
        Some(format!("--{rest}"))
    } else {
        None
    }
}

/// Whether `arg` is one of the debug flag forms `parse_debug_flag` reads.
pub fn is_debug_arg(arg: &str) -> bool {
    normalize(arg).is_some()
}

/// Parses the debug flag out of an argument list. Malformed values are `false`.
pub fn parse_debug_flag<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let relevant: Vec<String> = args
        .into_iter()
        .filter_map(|arg| normalize(arg.as_ref()))
        .collect();
    match DebugFlag::try_parse_from(relevant) {
        Ok(flag) => flag.debug,
        Err(err) => {
            trace!("ignoring malformed debug flag: {}", err);
            false
        }
    }
}

/// The process-wide `--debug` flag, parsed from the process arguments on first use.
pub fn debug() -> bool {
    static DEBUG: OnceLock<bool> = OnceLock::new();
    *DEBUG.get_or_init(|| {
        parse_debug_flag(
            std::env::args_os()
                .skip(1)
                .map(|arg| arg.to_string_lossy().into_owned()),
        )
    })
}
