//! Configuration of the recent-log history.

/// Environment variable holding the number of log lines kept for status
/// enrichment.
pub const NUM_FORWARDED_LOG_MESSAGES_ENV: &str = "ROOTCAUSE_NUM_FORWARDED_LOG_MESSAGES";

/// Number of log lines kept when the environment does not say otherwise.
pub const DEFAULT_NUM_FORWARDED_LOG_MESSAGES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogHistoryConfig {
    /// Maximum number of buffered lines. Zero disables capture.
    pub capacity: usize,
}

impl Default for LogHistoryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_NUM_FORWARDED_LOG_MESSAGES,
        }
    }
}

impl LogHistoryConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| {
            std::env::var_os(name).map(|value| value.to_string_lossy().into_owned())
        })
    }

    /// Read the configuration through `lookup`, which maps a variable name
    /// to its value.
    ///
    /// A missing variable yields the default. A value that is not an
    /// integer logs a warning and also yields the default. Zero or negative
    /// values disable capture.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: FnOnce(&str) -> Option<String>,
    {
        let Some(raw) = lookup(NUM_FORWARDED_LOG_MESSAGES_ENV) else {
            return Self::default();
        };

        match raw.trim().parse::<i64>() {
            Ok(value) => Self {
                capacity: usize::try_from(value).unwrap_or(0),
            },
            Err(_) => {
                tracing::warn!(
                    "Failed to parse env variable {}={} as int. Using the default value {}.",
                    NUM_FORWARDED_LOG_MESSAGES_ENV,
                    raw,
                    DEFAULT_NUM_FORWARDED_LOG_MESSAGES
                );
                Self::default()
            }
        }
    }

    /// True if any lines are kept at all.
    pub fn is_enabled(&self) -> bool {
        self.capacity > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(value: Option<&str>) -> LogHistoryConfig {
        LogHistoryConfig::from_lookup(|name| {
            assert_eq!(name, NUM_FORWARDED_LOG_MESSAGES_ENV);
            value.map(str::to_string)
        })
    }

    #[test]
    fn test_missing_uses_default() {
        assert_eq!(lookup(None).capacity, 5);
    }

    #[test]
    fn test_parses_integer() {
        assert_eq!(lookup(Some("12")).capacity, 12);
        assert_eq!(lookup(Some(" 3 ")).capacity, 3);
    }

    #[test]
    fn test_malformed_falls_back_to_default() {
        assert_eq!(lookup(Some("lots")).capacity, 5);
        assert_eq!(lookup(Some("")).capacity, 5);
        assert_eq!(lookup(Some("2.5")).capacity, 5);
    }

    #[test]
    fn test_non_positive_disables() {
        assert!(!lookup(Some("0")).is_enabled());
        assert!(!lookup(Some("-4")).is_enabled());
        assert!(lookup(None).is_enabled());
    }
}
