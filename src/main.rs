use clap::Parser;
use log::{Level, Log};
use std::cell::Cell;
use std::path::PathBuf;
use std::process::ExitCode;
use testlog::env::LOG_FILE_ENV_KEY;
use testlog::flag::{is_debug_arg, parse_debug_flag};
use testlog::{global, logger_with, networking, DebugConfig, ProcessHooks};

/// Show which test debug outputs the current environment enables.
///
/// Also accepts the test debug flag (`-debug`, `--debug`, `-debug=<bool>`),
/// which has the same effect as BERTY_DEBUG=1.
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// Write the development logger's output to this file
    #[arg(long, env = LOG_FILE_ENV_KEY)]
    log_file: Option<PathBuf>,
    /// Print the resolved configuration as JSON
    #[arg(long)]
    json: bool,
    /// Build the logger and emit one record per level through it
    #[arg(long, short)]
    probe: bool,
}

/// Splits the debug flag off so clap never sees its single-dash form.
fn split_debug_flag(args: Vec<String>) -> (bool, Vec<String>) {
    let debug = parse_debug_flag(args.iter().skip(1));
    let rest = args.into_iter().filter(|arg| !is_debug_arg(arg)).collect();
    (debug, rest)
}

fn main() -> ExitCode {
    dotenv::dotenv().ok();

    let args = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    let (debug, rest) = split_debug_flag(args);
    let cli = Cli::parse_from(rest);

    let mut config = DebugConfig::from_env_and_flag(debug);
    if let Some(path) = cli.log_file.filter(|path| !path.as_os_str().is_empty()) {
        config.log_file = Some(path);
    }

    if cli.json {
        match serde_json::to_string_pretty(&config) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                eprintln!("failed to serialize config: {}", err);
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("general debug:     {}", config.general_debug);
        println!("networking debug:  {}", config.networking_debug);
        println!("third-party debug: {}", config.third_party_debug);
        match config.log_file() {
            Some(path) => println!("log file:          {}", path.display()),
            None => println!("log file:          <stderr>"),
        }
    }

    if !cli.probe {
        return ExitCode::SUCCESS;
    }

    let failed = Cell::new(false);
    let ctx = |message: String| {
        eprintln!("{}", message);
        failed.set(true);
    };
    let logger = logger_with(&ctx, &config, &ProcessHooks);
    println!("returned logger:   {:?}", logger);
    println!("global logger:     {:?}", global::global());
    println!("networking debug:  {}", networking::is_debug_logging());

    for level in [Level::Error, Level::Warn, Level::Info, Level::Debug, Level::Trace] {
        logger.emit(level, "testlog::probe", format_args!("probe at {}", level));
        log::log!(target: "orbitdb::probe", level, "global probe at {}", level);
        log::log!(target: "libp2p::probe", level, "networking probe at {}", level);
    }
    logger.flush();
    log::logger().flush();

    if failed.get() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    fn args(args: &[&str]) -> Vec<String> {
        args.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn test_single_dash_debug_flag() {
        let (debug, rest) = split_debug_flag(args(&["testlog", "-debug", "--json"]));
        assert!(debug);
        let cli = Cli::try_parse_from(rest).unwrap();
        assert!(cli.json);
        assert!(!cli.probe);
    }

    #[test]
    fn test_debug_flag_forms() {
        assert!(split_debug_flag(args(&["testlog", "--debug"])).0);
        assert!(!split_debug_flag(args(&["testlog", "-debug=false"])).0);
        assert!(!split_debug_flag(args(&["testlog", "--probe"])).0);
        let (_, rest) = split_debug_flag(args(&["testlog", "--debug=1", "-p"]));
        assert_eq!(rest, args(&["testlog", "-p"]));
    }
}
