//! Error types for logger construction and file management

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Which of the two files a [`FileLogger`](crate::logging::FileLogger) manages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
    /// `<dir>/<name>`, receives every enabled entry
    Primary,
    /// `<dir>/<name>.err`, receives ERROR and FATAL entries only
    Secondary,
}

impl FileRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileRole::Primary => "primary",
            FileRole::Secondary => "secondary",
        }
    }
}

impl fmt::Display for FileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while building or driving a logger
///
/// Only construction surfaces these to callers. Failures during a live
/// logging call (`Rotation`, `Closed`) are reported on the diagnostic
/// channel and the entry is dropped.
#[derive(Error, Debug)]
pub enum LogError {
    #[error("Unknown log level: {0:?}")]
    UnknownLevel(String),

    #[error("Failed to open {which} log file {}: {source}", .path.display())]
    Open {
        which: FileRole,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to rotate log file {}: {source}", .path.display())]
    Rotation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write log file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Logger is closed")]
    Closed,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl LogError {
    /// Create an open error for the given file
    pub fn open(which: FileRole, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Open {
            which,
            path: path.into(),
            source,
        }
    }

    /// Create a rotation error for the given file
    pub fn rotation(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Rotation {
            path: path.into(),
            source,
        }
    }

    /// Create a write error for the given file
    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

pub type LogResult<T> = Result<T, LogError>;
