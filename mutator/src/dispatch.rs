use std::panic::{AssertUnwindSafe, catch_unwind};

use mutator_host::{Announced, Channels, Host};

use crate::{Transform, TransformError, TransformResult};

/// The path an invocation took through dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Path {
    /// Empty data unit: nothing fetched, nothing emitted.
    Skipped,
    /// The original buffer was emitted as-is.
    Unchanged,
    /// The policy's output was emitted.
    Mutated,
    /// An error was signaled and the original buffer was emitted.
    Error,
}

/// What one invocation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// The path taken.
    pub path: Path,
    /// Emissions the host accepted.
    pub emitted: usize,
    /// Emissions the host rejected.
    pub rejected: usize,
    /// Whether an error was signaled.
    pub error_signaled: bool,
}

impl Report {
    fn skipped() -> Self {
        Self {
            path: Path::Skipped,
            emitted: 0,
            rejected: 0,
            error_signaled: false,
        }
    }
}

/// Process one data unit of `length` bytes with `policy`.
///
/// This is the body of the exported `receive` entry point: fetch, transform, then emit
/// and/or signal. It runs to completion and keeps nothing for the next invocation.
/// A panicking policy is reported as an internal error instead of unwinding into
/// the host.
pub fn receive_template<H, T>(host: &mut H, length: usize, policy: &T) -> Report
where
    H: Host,
    T: Transform + ?Sized,
{
    let Some(announced) = Announced::new(length) else {
        log::debug!("empty data unit, nothing to do");
        return Report::skipped();
    };
    let input = announced.fetch(host);

    let result = catch_unwind(AssertUnwindSafe(|| policy.transform(&input))).unwrap_or_else(
        |payload| TransformResult::Error(TransformError::Internal(panic_message(&*payload))),
    );
    log::debug!("transform of {} bytes: {}", input.len(), result.name());

    let mut channels = Channels::new(host);
    let path = match result {
        TransformResult::Error(error) => {
            log::warn!("transform failed, passing the data unit through: {error}");
            channels.signal_error(&error.to_string());
            channels.emit(&input);
            Path::Error
        }
        TransformResult::Unchanged => {
            channels.emit(&input);
            Path::Unchanged
        }
        TransformResult::Mutated(output) => {
            for _ in 0..policy.fan_out().get() {
                channels.emit(&output);
            }
            Path::Mutated
        }
    };

    Report {
        path,
        emitted: channels.emitted(),
        rejected: channels.rejected(),
        error_signaled: channels.error_signaled(),
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("panicked: {message}")
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("panicked: {message}")
    } else {
        "panicked".to_string()
    }
}
