//! Construction parameters for the logging backends
//!
//! These are plain values. The library never reads config files itself;
//! embedding applications deserialize them from their own configuration or
//! use [`FileConfig::from_env`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LogError, LogResult};
use crate::logging::Severity;

/// Default rotation size: 10 MiB
pub const DEFAULT_MAX_SIZE: u64 = 10 * 1024 * 1024;

/// Default primary file name
pub const DEFAULT_FILE_NAME: &str = "splitlog.log";

/// Default threshold name
pub const DEFAULT_LEVEL: &str = "info";

/// Console backend parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Threshold level name, validated at construction
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

/// File backend parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileConfig {
    /// Threshold level name, validated at construction
    #[serde(default = "default_level")]
    pub level: String,
    /// Directory holding the log files
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
    /// Primary file name; the error file is `<file_name>.err`
    #[serde(default = "default_file_name")]
    pub file_name: String,
    /// Rotate a file once it reaches this many bytes
    #[serde(default = "default_max_size")]
    pub max_size: u64,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            directory: default_directory(),
            file_name: default_file_name(),
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

impl FileConfig {
    pub fn new(
        level: impl Into<String>,
        directory: impl Into<PathBuf>,
        file_name: impl Into<String>,
        max_size: u64,
    ) -> Self {
        Self {
            level: level.into(),
            directory: directory.into(),
            file_name: file_name.into(),
            max_size,
        }
    }

    /// Build a config from `SPLITLOG_*` environment variables
    ///
    /// - `SPLITLOG_LEVEL`: threshold name (default `info`)
    /// - `SPLITLOG_DIR`: directory (default: system temp dir)
    /// - `SPLITLOG_FILE`: primary file name (default `splitlog.log`)
    /// - `SPLITLOG_MAX_SIZE`: rotation size in bytes (default 10 MiB)
    pub fn from_env() -> LogResult<Self> {
        let mut config = Self::default();
        if let Ok(level) = std::env::var("SPLITLOG_LEVEL") {
            config.level = level;
        }
        if let Ok(dir) = std::env::var("SPLITLOG_DIR") {
            config.directory = PathBuf::from(dir);
        }
        if let Ok(file) = std::env::var("SPLITLOG_FILE") {
            config.file_name = file;
        }
        if let Ok(size) = std::env::var("SPLITLOG_MAX_SIZE") {
            config.max_size = size.trim().parse().map_err(|_| {
                LogError::InvalidConfig(format!("SPLITLOG_MAX_SIZE is not a byte count: {:?}", size))
            })?;
        }
        Ok(config)
    }

    /// Check everything that can be checked without touching the file system
    pub fn validate(&self) -> LogResult<Severity> {
        if self.max_size == 0 {
            return Err(LogError::InvalidConfig("max_size must be greater than zero".to_string()));
        }
        if self.file_name.is_empty() {
            return Err(LogError::InvalidConfig("file_name must not be empty".to_string()));
        }
        Severity::parse(&self.level)
    }

    /// Full path of the primary file
    pub fn primary_path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }

    /// Full path of the error-only file
    pub fn secondary_path(&self) -> PathBuf {
        secondary_path_for(&self.primary_path())
    }
}

pub(crate) fn secondary_path_for(primary: &Path) -> PathBuf {
    let mut name = primary.as_os_str().to_owned();
    name.push(".err");
    PathBuf::from(name)
}

fn default_level() -> String {
    DEFAULT_LEVEL.to_string()
}

fn default_directory() -> PathBuf {
    std::env::temp_dir()
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

fn default_max_size() -> u64 {
    DEFAULT_MAX_SIZE
}
