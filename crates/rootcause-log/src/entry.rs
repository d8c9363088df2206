//! Log entries as seen by sinks.

use std::fmt;

/// Severity of a log entry, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LogSeverity {
    #[default]
    Info,
    Warning,
    Error,
    Fatal,
}

impl LogSeverity {
    /// Get severity as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            LogSeverity::Info => "INFO",
            LogSeverity::Warning => "WARNING",
            LogSeverity::Error => "ERROR",
            LogSeverity::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for LogSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<tracing::Level> for LogSeverity {
    fn from(level: tracing::Level) -> Self {
        match level {
            tracing::Level::ERROR => LogSeverity::Error,
            tracing::Level::WARN => LogSeverity::Warning,
            _ => LogSeverity::Info,
        }
    }
}

/// A formatted log line together with its severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    severity: LogSeverity,
    text: String,
}

impl LogEntry {
    pub fn new(severity: LogSeverity, text: impl Into<String>) -> Self {
        Self {
            severity,
            text: text.into(),
        }
    }

    pub fn severity(&self) -> LogSeverity {
        self.severity
    }

    /// The formatted text of the entry.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_order() {
        assert!(LogSeverity::Info < LogSeverity::Warning);
        assert!(LogSeverity::Warning < LogSeverity::Error);
        assert!(LogSeverity::Error < LogSeverity::Fatal);
    }

    #[test]
    fn test_from_tracing_level() {
        assert_eq!(LogSeverity::from(tracing::Level::ERROR), LogSeverity::Error);
        assert_eq!(LogSeverity::from(tracing::Level::WARN), LogSeverity::Warning);
        assert_eq!(LogSeverity::from(tracing::Level::INFO), LogSeverity::Info);
        assert_eq!(LogSeverity::from(tracing::Level::TRACE), LogSeverity::Info);
    }

    #[test]
    fn test_entry_display() {
        let entry = LogEntry::new(LogSeverity::Warning, "disk almost full");
        assert_eq!(entry.to_string(), "disk almost full");
        assert_eq!(entry.severity().to_string(), "WARNING");
    }
}
