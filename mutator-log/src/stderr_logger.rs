use std::fmt::Write;

use log::{LevelFilter, Log, Metadata, Record, set_logger_racy, set_max_level};

use crate::LogConfigError;

/// Whether `std::io::stderr` reaches anything. Bare wasm has no stderr and drops
/// every write.
pub const STDERR_AVAILABLE: bool = !cfg!(all(target_family = "wasm", target_os = "unknown"));

pub struct StderrLog {
    level: LevelFilter,
}

impl StderrLog {
    pub fn init(log_level: LevelFilter) -> Result<(), LogConfigError> {
        static mut LOGGER: Option<StderrLog> = None;

        // SAFETY: concurrency requirement is satisfied by the single threaded nature
        // of a guest module, whose invocations never interleave.
        #[allow(static_mut_refs)]
        unsafe {
            if LOGGER.is_some() {
                return Err(LogConfigError::AlreadyConfigured);
            }
            let logger = LOGGER.insert(StderrLog { level: log_level });
            set_logger_racy(logger).map_err(|cause| LogConfigError::StderrInit { cause })?;
        }
        set_max_level(log_level);
        Ok(())
    }
}

impl StderrLog {
    fn format(record: &Record<'_>) -> String {
        let mut buffer = String::with_capacity(128);
        let level = record.level().as_str();
        let module = record.module_path().unwrap_or("<unknown>");
        let file = record.file().unwrap_or("<unknown>");
        let line = record.line().unwrap_or(0);
        let log_message = record.args();
        let _ = write!(&mut buffer, "{level} {module} {file}:{line} {log_message}");
        buffer
    }
}

impl Log for StderrLog {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", Self::format(record));
        }
    }

    fn flush(&self) {}
}
