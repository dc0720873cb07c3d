//! Severity levels and level-name parsing

use std::fmt;
use std::str::FromStr;

use crate::error::{LogError, LogResult};

/// Log severity, ordered by rank
///
/// A logger configured with threshold `T` emits an entry at level `L` only
/// when `L > T`. `Unknown` is the lowest rank and enables every real level;
/// `Fatal` as a threshold enables nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Unknown = 0,
    Debug = 1,
    Trace = 2,
    Info = 3,
    Warning = 4,
    Error = 5,
    Fatal = 6,
}

impl Severity {
    /// The six levels a message can be logged at, lowest first
    pub const ALL: [Severity; 6] = [
        Severity::Debug,
        Severity::Trace,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Fatal,
    ];

    /// Parse a level name, ignoring case
    ///
    /// Accepts `debug`, `trace`, `info`, `warning`, `error` and `fatal`.
    /// Anything else, including the empty string and `unknown`, is rejected.
    pub fn parse(name: &str) -> LogResult<Self> {
        match name.to_ascii_lowercase().as_str() {
            "debug" => Ok(Severity::Debug),
            "trace" => Ok(Severity::Trace),
            "info" => Ok(Severity::Info),
            "warning" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            "fatal" => Ok(Severity::Fatal),
            _ => Err(LogError::UnknownLevel(name.to_string())),
        }
    }

    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Upper-case label used in log lines; empty for `Unknown`
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Unknown => "",
            Severity::Debug => "DEBUG",
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    /// Whether an entry at `self` passes a logger configured with `threshold`
    pub fn passes(self, threshold: Severity) -> bool {
        self > threshold
    }

    /// Whether entries at this level are duplicated to the error file
    pub fn is_error(self) -> bool {
        self >= Severity::Error
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_are_ordered() {
        assert_eq!(Severity::Unknown.rank(), 0);
        assert!(Severity::Trace > Severity::Debug);
        assert!(Severity::Info > Severity::Trace);
        assert!(Severity::Warning > Severity::Info);
        assert!(Severity::Error > Severity::Warning);
        assert!(Severity::Fatal > Severity::Error);
        assert_eq!(Severity::Fatal.rank(), 6);
    }

    #[test]
    fn test_parse_any_casing() {
        for level in Severity::ALL {
            let lower = level.as_str().to_lowercase();
            assert_eq!(Severity::parse(&lower).unwrap(), level);
            assert_eq!(Severity::parse(level.as_str()).unwrap(), level);

            // Alternate casing: wArNiNg
            let mixed: String = lower
                .chars()
                .enumerate()
                .map(|(i, c)| if i % 2 == 1 { c.to_ascii_uppercase() } else { c })
                .collect();
            assert_eq!(mixed.parse::<Severity>().unwrap(), level);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        for name in ["", "unknown", "warn", "err", " info", "info ", "critical", "débug"] {
            match Severity::parse(name) {
                Err(LogError::UnknownLevel(got)) => assert_eq!(got, name),
                other => panic!("expected UnknownLevel for {:?}, got {:?}", name, other),
            }
        }
    }

    #[test]
    fn test_enablement_is_strictly_greater() {
        let thresholds = [
            Severity::Unknown,
            Severity::Debug,
            Severity::Trace,
            Severity::Info,
            Severity::Warning,
            Severity::Error,
            Severity::Fatal,
        ];
        for threshold in thresholds {
            for level in Severity::ALL {
                assert_eq!(level.passes(threshold), level.rank() > threshold.rank());
            }
        }
        assert!(!Severity::Trace.passes(Severity::Info));
        assert!(Severity::Warning.passes(Severity::Info));
        assert!(!Severity::Fatal.passes(Severity::Fatal));
    }

    #[test]
    fn test_error_levels() {
        assert!(Severity::Error.is_error());
        assert!(Severity::Fatal.is_error());
        assert!(!Severity::Warning.is_error());
        assert!(!Severity::Debug.is_error());
    }

    #[test]
    fn test_display() {
        assert_eq!(Severity::Warning.to_string(), "WARNING");
        assert_eq!(Severity::Unknown.to_string(), "");
    }
}
