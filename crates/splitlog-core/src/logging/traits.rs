//! Logger trait definition

use std::fmt;
use std::sync::Arc;

use super::entry::LogEntry;
use super::level::Severity;
use super::site::CallSite;

/// Leveled logger shared by every backend
///
/// Backends supply a threshold and a sink for finished entries; gating,
/// call-site resolution and formatting happen in the provided methods, so
/// call sites only ever depend on this trait. The leveled methods check the
/// threshold before walking the stack for the caller's function name.
///
/// Implementations:
/// - `ConsoleLogger`: one line per entry on stdout
/// - `FileLogger`: size-rotated primary file plus an error-only file
/// - `NoOpLogger`: discards everything
///
/// Logging never fails from the caller's point of view. Backends report their
/// own I/O trouble on the diagnostic channel and drop the entry.
pub trait Logger: Send + Sync {
    /// Entries must rank strictly above this level to be written
    fn threshold(&self) -> Severity;

    /// Write a fully formed entry; called only for enabled levels
    fn write_entry(&self, entry: &LogEntry);

    /// Check whether a level would be written
    fn enabled(&self, severity: Severity) -> bool {
        severity.passes(self.threshold())
    }

    /// Gate, format and write one entry
    ///
    /// The message is only rendered when the level is enabled.
    fn log(&self, severity: Severity, site: CallSite, args: fmt::Arguments<'_>) {
        if !self.enabled(severity) {
            return;
        }
        let message = match args.as_str() {
            Some(literal) => literal.to_string(),
            None => args.to_string(),
        };
        self.write_entry(&LogEntry::now(severity, site, message));
    }

    /// Log a debug message
    #[track_caller]
    fn debug(&self, message: &str) {
        if self.enabled(Severity::Debug) {
            self.log(Severity::Debug, CallSite::caller(), format_args!("{}", message));
        }
    }

    /// Log a trace message
    #[track_caller]
    fn trace(&self, message: &str) {
        if self.enabled(Severity::Trace) {
            self.log(Severity::Trace, CallSite::caller(), format_args!("{}", message));
        }
    }

    /// Log an info message
    #[track_caller]
    fn info(&self, message: &str) {
        if self.enabled(Severity::Info) {
            self.log(Severity::Info, CallSite::caller(), format_args!("{}", message));
        }
    }

    /// Log a warning message
    #[track_caller]
    fn warning(&self, message: &str) {
        if self.enabled(Severity::Warning) {
            self.log(Severity::Warning, CallSite::caller(), format_args!("{}", message));
        }
    }

    /// Log an error message
    #[track_caller]
    fn error(&self, message: &str) {
        if self.enabled(Severity::Error) {
            self.log(Severity::Error, CallSite::caller(), format_args!("{}", message));
        }
    }

    /// Log a fatal message; the process keeps running
    #[track_caller]
    fn fatal(&self, message: &str) {
        if self.enabled(Severity::Fatal) {
            self.log(Severity::Fatal, CallSite::caller(), format_args!("{}", message));
        }
    }
}

/// Type alias for a boxed logger
pub type BoxedLogger = Box<dyn Logger>;

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

impl<L: Logger + ?Sized> Logger for &L {
    fn threshold(&self) -> Severity {
        (**self).threshold()
    }

    fn write_entry(&self, entry: &LogEntry) {
        (**self).write_entry(entry)
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn threshold(&self) -> Severity {
        (**self).threshold()
    }

    fn write_entry(&self, entry: &LogEntry) {
        (**self).write_entry(entry)
    }
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    fn threshold(&self) -> Severity {
        (**self).threshold()
    }

    fn write_entry(&self, entry: &LogEntry) {
        (**self).write_entry(entry)
    }
}

/// Extension trait for logging with format arguments
pub trait LoggerExt: Logger {
    /// Log a debug message with format arguments
    #[track_caller]
    fn debug_fmt(&self, args: fmt::Arguments<'_>) {
        if self.enabled(Severity::Debug) {
            self.log(Severity::Debug, CallSite::caller(), args);
        }
    }

    /// Log a trace message with format arguments
    #[track_caller]
    fn trace_fmt(&self, args: fmt::Arguments<'_>) {
        if self.enabled(Severity::Trace) {
            self.log(Severity::Trace, CallSite::caller(), args);
        }
    }

    /// Log an info message with format arguments
    #[track_caller]
    fn info_fmt(&self, args: fmt::Arguments<'_>) {
        if self.enabled(Severity::Info) {
            self.log(Severity::Info, CallSite::caller(), args);
        }
    }

    /// Log a warning message with format arguments
    #[track_caller]
    fn warning_fmt(&self, args: fmt::Arguments<'_>) {
        if self.enabled(Severity::Warning) {
            self.log(Severity::Warning, CallSite::caller(), args);
        }
    }

    /// Log an error message with format arguments
    #[track_caller]
    fn error_fmt(&self, args: fmt::Arguments<'_>) {
        if self.enabled(Severity::Error) {
            self.log(Severity::Error, CallSite::caller(), args);
        }
    }

    /// Log a fatal message with format arguments
    #[track_caller]
    fn fatal_fmt(&self, args: fmt::Arguments<'_>) {
        if self.enabled(Severity::Fatal) {
            self.log(Severity::Fatal, CallSite::caller(), args);
        }
    }
}

// Implement LoggerExt for all Logger implementations
impl<T: Logger + ?Sized> LoggerExt for T {}

/// Log at an explicit level, capturing the enclosing function name
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $level:expr, $($arg:tt)*) => {
        $crate::logging::Logger::log(
            &$logger,
            $level,
            $crate::call_site!(),
            format_args!($($arg)*),
        )
    };
}

/// Convenience macros for logging
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log_at!($logger, $crate::logging::Severity::Debug, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log_at!($logger, $crate::logging::Severity::Trace, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log_at!($logger, $crate::logging::Severity::Info, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log_at!($logger, $crate::logging::Severity::Warning, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log_at!($logger, $crate::logging::Severity::Error, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log_at!($logger, $crate::logging::Severity::Fatal, $($arg)*)
    };
}
