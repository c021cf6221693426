#![deny(missing_docs)]
//! `pokedex_*` logging macros shared by every crate in the workspace.
//!
//! The macros forward to the `log` facade, so callers need `log` as a
//! dependency. Whichever binary or test harness runs installs the backend.

#[doc(hidden)]
#[macro_export]
macro_rules! __pokedex_log {
    ($level:ident, $($arg:tt)*) => {{
        log::$level!($($arg)*);
    }};
}

/// Trace-level message: per-item detail such as cache hits.
#[macro_export]
macro_rules! pokedex_trace {
    ($($arg:tt)*) => { $crate::__pokedex_log!(trace, $($arg)*) };
}

/// Debug-level message: requests and engine commands.
#[macro_export]
macro_rules! pokedex_debug {
    ($($arg:tt)*) => { $crate::__pokedex_log!(debug, $($arg)*) };
}

/// Info-level message: effects and lifecycle.
#[macro_export]
macro_rules! pokedex_info {
    ($($arg:tt)*) => { $crate::__pokedex_log!(info, $($arg)*) };
}

/// Warn-level message: recoverable failures that fall back to defaults.
#[macro_export]
macro_rules! pokedex_warn {
    ($($arg:tt)*) => { $crate::__pokedex_log!(warn, $($arg)*) };
}

/// Error-level message: failures the user loses data to.
#[macro_export]
macro_rules! pokedex_error {
    ($($arg:tt)*) => { $crate::__pokedex_log!(error, $($arg)*) };
}

/// Environment variable read by [`initialize_for_tests`] for the log level.
pub const TEST_LOG_ENV: &str = "POKEDEX_TEST_LOG";

/// Installs a terminal logger for tests, once per process.
///
/// The level comes from `POKEDEX_TEST_LOG` (`off`, `error`, ... `trace`),
/// defaulting to `debug`. A logger installed elsewhere first is left alone.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
    use std::sync::Once;

    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let level = std::env::var(TEST_LOG_ENV)
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(log::LevelFilter::Debug);
        let _ = TermLogger::init(
            level,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Never,
        );
    });
}
