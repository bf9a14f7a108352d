use std::io::Write;

use chrono::Local;
use env_logger::{Builder, Env, Target};
use log::{self, LevelFilter};
use yansi::Paint;

use crate::error::{DeskError, Result};

/// Initializes logging on stderr with the given default level.
///
/// `RUST_LOG` still wins when set. Valid levels are: off, error, warn, info,
/// debug, trace.
pub fn init(log_level: &str) -> Result<()> {
    let env = Env::default()
        .filter_or("RUST_LOG", log_level)
        .write_style_or("RUST_LOG_STYLE", "auto");

    Builder::from_env(env)
        .target(Target::Stderr)
        .format(|buf, record| writeln!(buf, "{}", format_log(record)))
        .try_init()
        .map_err(|e| DeskError::new(&format!("logger already initialized: {}", e)))
}

/// Formats a log record as `[timestamp] LEVEL [target] message`
pub fn format_log(record: &log::Record) -> String {
    let level = match record.level() {
        log::Level::Error => Paint::red("ERROR").bold(),
        log::Level::Warn => Paint::yellow("WARN ").bold(),
        log::Level::Info => Paint::cyan("INFO ").bold(),
        log::Level::Debug => Paint::blue("DEBUG").bold(),
        log::Level::Trace => Paint::new("TRACE"),
    };

    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let target = if record.target().is_empty() {
        record.module_path().unwrap_or("desk")
    } else {
        record.target()
    };

    format!("[{}] {} [{}] {}", timestamp, level, target, record.args())
}

/// Parses a log level name, defaulting to `Warn` for anything unknown
pub fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Warn,
    }
}

/// Maps a `-v` count onto a level name: 0 → warn, 1 → info, 2 → debug, 3+ → trace
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
