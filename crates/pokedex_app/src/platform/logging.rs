//! Logger setup for the `pokedex` binary.
//!
//! The interactive screen owns the terminal, so the default destination is
//! `./pokedex.log`. Each run appends to the file.

use std::fs::{File, OpenOptions};
use std::path::Path;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

pub const LOG_FILE: &str = "pokedex.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogDestination {
    File,
    /// Warnings and errors go to stderr, the rest to stdout.
    Terminal,
    Both,
}

impl LogDestination {
    fn writes_file(self) -> bool {
        matches!(self, LogDestination::File | LogDestination::Both)
    }

    fn writes_terminal(self) -> bool {
        matches!(self, LogDestination::Terminal | LogDestination::Both)
    }
}

/// Installs the global logger. A second call, or an unopenable log file, only costs output.
pub fn initialize(destination: LogDestination, level: LevelFilter) {
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if destination.writes_terminal() {
        loggers.push(TermLogger::new(
            level,
            logger_config(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }
    if destination.writes_file() {
        match open_log_file(Path::new(LOG_FILE)) {
            Ok(file) => loggers.push(WriteLogger::new(level, logger_config(), file)),
            Err(err) => eprintln!("Warning: cannot open {LOG_FILE}: {err}"),
        }
    }
    if loggers.is_empty() {
        return;
    }
    let _ = CombinedLogger::init(loggers);
}

fn logger_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        // Connection-pool chatter from the http stack.
        .add_filter_ignore_str("hyper")
        .add_filter_ignore_str("reqwest")
        .build()
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
