//! `log` adapter for mutator guest modules
//!
//! This crate adapts [`log`](https://docs.rs/log) to guest modules. `log` is a standard logging crate,
//! used widely across the ecosystem; the `mutator` dispatch logs each invocation's stages through it.
//!
//! The host ABI has no logging primitive. Its `error` import is reserved for the one
//! error report an invocation may make, so log records go to the module's standard error
//! instead, which hosts running WASI guests typically capture. Build guests for
//! `wasm32-wasip1`: `wasm32-unknown-unknown` has no standard error, and
//! [`configure_logging`] refuses to install a logger there.
//!
//! You are likely to be interested in the sibling crates:
//! * `mutator`: transform dispatch and the `mutator!` export macro.
//! * `mutator-host`: the host ABI, buffers and channels.

use log::SetLoggerError;
use thiserror::Error;

mod stderr_logger;

/// Which logging mode to use?
pub enum LogMode {
    /// Write one line per record to standard error.
    Stderr,
}

#[derive(Debug, Error)]
pub enum LogConfigError {
    #[error("Logging is already configured")]
    AlreadyConfigured,
    #[error("Failed to initialize stderr logger: {cause}")]
    StderrInit { cause: SetLoggerError },
    #[error("Standard error is not available on this target")]
    Unsupported,
}

/// Initializes the logging system with the specified log level and mode.
///
/// Only the first call installs a logger. Later calls return
/// [`LogConfigError::AlreadyConfigured`] and change nothing. On targets where
/// standard error discards everything written to it, such as
/// `wasm32-unknown-unknown`, this returns [`LogConfigError::Unsupported`].
pub fn configure_logging(level: log::LevelFilter, mode: LogMode) -> Result<(), LogConfigError> {
    match mode {
        LogMode::Stderr if !stderr_logger::STDERR_AVAILABLE => Err(LogConfigError::Unsupported),
        LogMode::Stderr => stderr_logger::StderrLog::init(level),
    }
}
