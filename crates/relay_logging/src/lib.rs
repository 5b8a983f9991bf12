#![deny(missing_docs)]
//! Shared logging utilities for the relay workspace.
//!
//! This crate provides the `relay_*` logging macros used across the codebase,
//! a per-thread pipeline sequence number for correlating the log lines of one
//! click, and a minimal test initializer for the global logger. Each macro
//! prefixes its record with the calling thread's current sequence number.

use std::cell::Cell;

thread_local! {
    /// Thread-local storage for the current pipeline sequence number.
    static PIPELINE_SEQ: Cell<u64> = const { Cell::new(0) };
}

/// Sets the pipeline sequence number for the current thread.
/// The driver should call this once per handled click, before dispatching.
pub fn set_pipeline_seq(seq: u64) {
    PIPELINE_SEQ.with(|v| v.set(seq));
}

/// Retrieves the pipeline sequence number for the current thread.
/// Returns 0 if no pipeline has been started on this thread.
pub fn get_pipeline_seq() -> u64 {
    PIPELINE_SEQ.with(|v| v.get())
}

/// Logs a trace-level message, prefixed with the thread's pipeline sequence.
#[macro_export]
macro_rules! relay_trace {
    ($($arg:tt)*) => {{
        log::trace!("[{}] {}", $crate::get_pipeline_seq(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message, prefixed with the thread's pipeline sequence.
#[macro_export]
macro_rules! relay_info {
    ($($arg:tt)*) => {{
        log::info!("[{}] {}", $crate::get_pipeline_seq(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message, prefixed with the thread's pipeline sequence.
#[macro_export]
macro_rules! relay_debug {
    ($($arg:tt)*) => {{
        log::debug!("[{}] {}", $crate::get_pipeline_seq(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message, prefixed with the thread's pipeline sequence.
#[macro_export]
macro_rules! relay_warn {
    ($($arg:tt)*) => {{
        log::warn!("[{}] {}", $crate::get_pipeline_seq(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message, prefixed with the thread's pipeline sequence.
#[macro_export]
macro_rules! relay_error {
    ($($arg:tt)*) => {{
        log::error!("[{}] {}", $crate::get_pipeline_seq(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
