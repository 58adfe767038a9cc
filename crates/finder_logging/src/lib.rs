#![deny(missing_docs)]
//! Shared logging utilities for the imagefinder workspace.
//!
//! This crate provides the `finder_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger. Binaries decide where
//! the output goes; libraries only ever log through these macros.

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! finder_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! finder_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! finder_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! finder_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! finder_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Maps a verbosity flag to the level filter used by the binaries.
pub fn level_for(verbose: bool) -> log::LevelFilter {
    if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    }
}

/// Initializes a terminal logger for use in tests.
///
/// Safe to call from every test: it no-ops once a logger is installed.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let level = level_for(cfg!(debug_assertions));

    // Another test may have won the race to install the logger.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
