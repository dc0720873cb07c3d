//! No-op logger implementation

use super::entry::LogEntry;
use super::level::Severity;
use super::traits::Logger;

/// A logger that does nothing
///
/// Useful for testing or when logging is not needed. Its threshold is
/// `Fatal`, so no level is enabled and messages are never formatted.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl NoOpLogger {
    /// Create a new no-op logger
    pub fn new() -> Self {
        Self
    }
}

impl Logger for NoOpLogger {
    fn threshold(&self) -> Severity {
        Severity::Fatal
    }

    fn write_entry(&self, _entry: &LogEntry) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::SharedLogger;
    use std::sync::Arc;

    #[test]
    fn test_noop_logger() {
        let logger = NoOpLogger::new();

        // These should all do nothing without panicking
        logger.debug("debug message");
        logger.info("info message");
        logger.warning("warning message");
        logger.error("error message");
        logger.fatal("fatal message");

        for level in Severity::ALL {
            assert!(!logger.enabled(level));
        }
    }

    #[test]
    fn test_noop_behind_shared_handle() {
        let shared: SharedLogger = Arc::new(NoOpLogger);
        crate::log_fatal!(shared, "ignored {}", 1);
    }
}
