//! Console logger implementation

use std::fmt;
use std::io::{self, Write};

use parking_lot::Mutex;

use super::entry::LogEntry;
use super::level::Severity;
use super::traits::Logger;
use crate::config::ConsoleConfig;
use crate::error::LogResult;

/// A logger that writes one line per entry to stdout
///
/// The writer sits behind a mutex so lines from concurrent callers are
/// never interleaved.
pub struct ConsoleLogger {
    threshold: Severity,
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleLogger {
    /// Create a console logger from a level name such as `"info"`
    pub fn new(level: &str) -> LogResult<Self> {
        Ok(Self::with_threshold(Severity::parse(level)?))
    }

    /// Create a console logger from a construction config
    pub fn from_config(config: &ConsoleConfig) -> LogResult<Self> {
        Self::new(&config.level)
    }

    /// Create a console logger with an already parsed threshold
    pub fn with_threshold(threshold: Severity) -> Self {
        Self::with_writer(threshold, io::stdout())
    }

    /// Create a logger that writes to an arbitrary stream instead of stdout
    pub fn with_writer(threshold: Severity, writer: impl Write + Send + 'static) -> Self {
        Self {
            threshold,
            out: Mutex::new(Box::new(writer)),
        }
    }
}

impl fmt::Debug for ConsoleLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleLogger")
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}

impl Logger for ConsoleLogger {
    fn threshold(&self) -> Severity {
        self.threshold
    }

    fn write_entry(&self, entry: &LogEntry) {
        let line = entry.to_line();
        let mut out = self.out.lock();
        if let Err(error) = out.write_all(line.as_bytes()).and_then(|_| out.flush()) {
            tracing::warn!(%error, "failed to write log entry to console");
        }
    }
}
