//! A single log entry and its line format

use std::fmt;

use chrono::{DateTime, Local};

use super::level::Severity;
use super::site::CallSite;

/// Timestamp layout at the start of every line
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One formatted log call, produced and written within the call itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub severity: Severity,
    pub site: CallSite,
    pub message: String,
}

impl LogEntry {
    /// Create an entry stamped with the current local time
    pub fn now(severity: Severity, site: CallSite, message: impl Into<String>) -> Self {
        Self::at(Local::now(), severity, site, message)
    }

    /// Create an entry with an explicit timestamp
    pub fn at(
        timestamp: DateTime<Local>,
        severity: Severity,
        site: CallSite,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            severity,
            site,
            message: message.into(),
        }
    }

    /// Render the full line, including the trailing space and newline
    ///
    /// `[YYYY-MM-DD HH:MM:SS] [LEVEL] [file function line] message \n`
    pub fn to_line(&self) -> String {
        format!("{}\n", self)
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Log scrapers rely on the space before the newline
        write!(
            f,
            "[{}] [{}] [{} {} {}] {} ",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.severity,
            self.site.file(),
            self.site.function(),
            self.site.line(),
            self.message,
        )
    }
}
