//! Leveled logging with interchangeable backends
//!
//! Call sites depend on the [`Logger`] trait only; pick a backend at startup
//! and pass it down as a [`SharedLogger`] or a reference.

mod traits;
mod noop;
mod console;
mod entry;
mod level;
pub mod site;
pub mod rotation;
pub mod file_logger;

pub use traits::{Logger, LoggerExt, BoxedLogger, SharedLogger};
pub use noop::NoOpLogger;
pub use console::ConsoleLogger;
pub use entry::{LogEntry, TIMESTAMP_FORMAT};
pub use level::Severity;
pub use site::CallSite;
pub use rotation::RotatingFile;
pub use file_logger::FileLogger;
