//! Splitlog Core
//!
//! Leveled logging with two interchangeable backends behind one trait:
//! a console writer and a size-rotated file writer that copies ERROR and
//! FATAL entries to a separate `.err` file.
//!
//! Loggers are ordinary values. Build one at startup, share it behind an
//! `Arc<dyn Logger>` and log through the trait methods or the `log_*!`
//! macros, which also record the calling function's name.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use splitlog_core::{ConsoleLogger, FileLogger, Logger, SharedLogger};
//!
//! let logger: SharedLogger = if std::env::var("LOG_TO_FILE").is_ok() {
//!     Arc::new(FileLogger::open("info", "./", "app.log", 256)?)
//! } else {
//!     Arc::new(ConsoleLogger::new("info")?)
//! };
//!
//! logger.info("This is Info");
//! splitlog_core::log_error!(logger, "This is Error {} {}", "No Error.", "hello world!");
//! # Ok::<(), splitlog_core::LogError>(())
//! ```
//!
//! Failures while logging never reach the caller. They are reported through
//! `tracing`, so install a subscriber to see them.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{ConsoleConfig, FileConfig};
pub use error::{FileRole, LogError, LogResult};
pub use logging::{
    BoxedLogger, CallSite, ConsoleLogger, FileLogger, LogEntry, Logger, LoggerExt, NoOpLogger,
    Severity, SharedLogger,
};
