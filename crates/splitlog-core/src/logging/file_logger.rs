//! Size-rotated file logger
//!
//! Every enabled entry goes to `<dir>/<name>`. ERROR and FATAL entries are
//! also copied to `<dir>/<name>.err`. Each file has its own lock that covers
//! the whole size-check, rotate and write sequence, so concurrent callers
//! never interleave lines or rotate the same file twice.

use std::fmt;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::entry::LogEntry;
use super::level::Severity;
use super::rotation::RotatingFile;
use super::traits::Logger;
use crate::config::{secondary_path_for, FileConfig};
use crate::error::{FileRole, LogError, LogResult};

/// Logger writing to a primary file and an error-only file
///
/// # Example
///
/// ```no_run
/// use splitlog_core::logging::{FileLogger, Logger};
///
/// let logger = FileLogger::open("info", "/var/log/app", "app.log", 10 * 1024 * 1024)?;
/// logger.warning("queue is backing up");
/// splitlog_core::log_error!(logger, "request {} failed: {}", 42, "timeout");
/// logger.close();
/// # Ok::<(), splitlog_core::LogError>(())
/// ```
pub struct FileLogger {
    threshold: Severity,
    directory: PathBuf,
    file_name: String,
    max_size: u64,
    primary: Mutex<RotatingFile>,
    secondary: Mutex<RotatingFile>,
}

impl FileLogger {
    /// Open (or create) both log files in append mode
    ///
    /// Fails without keeping any handle open if either file cannot be opened.
    pub fn open(
        level: &str,
        directory: impl Into<PathBuf>,
        file_name: impl Into<String>,
        max_size: u64,
    ) -> LogResult<Self> {
        Self::from_config(&FileConfig::new(level, directory, file_name, max_size))
    }

    /// Open a logger from a construction config
    pub fn from_config(config: &FileConfig) -> LogResult<Self> {
        let threshold = config.validate()?;
        let primary_path = config.primary_path();
        let secondary_path = secondary_path_for(&primary_path);

        // If the second open fails, `primary` is dropped here and its handle released
        let primary = RotatingFile::open(primary_path, FileRole::Primary, config.max_size)?;
        let secondary = RotatingFile::open(secondary_path, FileRole::Secondary, config.max_size)?;

        Ok(Self {
            threshold,
            directory: config.directory.clone(),
            file_name: config.file_name.clone(),
            max_size: config.max_size,
            primary: Mutex::new(primary),
            secondary: Mutex::new(secondary),
        })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn max_size(&self) -> u64 {
        self.max_size
    }

    /// Path of the file receiving every entry
    pub fn primary_path(&self) -> PathBuf {
        self.primary.lock().path().to_path_buf()
    }

    /// Path of the file receiving ERROR and FATAL entries
    pub fn secondary_path(&self) -> PathBuf {
        self.secondary.lock().path().to_path_buf()
    }

    /// Release both file handles
    ///
    /// Safe to call more than once. Entries logged afterwards are dropped
    /// and reported on the diagnostic channel.
    pub fn close(&self) {
        self.secondary.lock().close();
        self.primary.lock().close();
    }

    pub fn is_closed(&self) -> bool {
        self.primary.lock().is_closed()
    }

    /// Rotate both files now, regardless of size
    pub fn rotate(&self) -> LogResult<()> {
        self.primary.lock().rotate()?;
        self.secondary.lock().rotate()?;
        Ok(())
    }

    fn write_to(file: &Mutex<RotatingFile>, line: &str) {
        let mut file = file.lock();
        if let Err(error) = file.write(line.as_bytes()) {
            report(file.role(), file.path(), &error);
        }
    }
}

fn report(role: FileRole, path: &Path, error: &LogError) {
    match error {
        LogError::Closed => {
            tracing::warn!(file = %role, path = %path.display(), "log entry dropped: logger is closed");
        }
        _ => {
            tracing::error!(file = %role, path = %path.display(), %error, "log entry dropped");
        }
    }
}

impl fmt::Debug for FileLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileLogger")
            .field("threshold", &self.threshold)
            .field("directory", &self.directory)
            .field("file_name", &self.file_name)
            .field("max_size", &self.max_size)
            .finish_non_exhaustive()
    }
}

impl Logger for FileLogger {
    fn threshold(&self) -> Severity {
        self.threshold
    }

    fn write_entry(&self, entry: &LogEntry) {
        let line = entry.to_line();
        Self::write_to(&self.primary, &line);
        if entry.severity.is_error() {
            Self::write_to(&self.secondary, &line);
        }
    }
}
