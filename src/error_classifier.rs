use crate::store::error::StoreError;
use log::LevelFilter;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => log::Level::Trace,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Info => log::Level::Info,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Error => log::Level::Error,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify_fetch_error(&self, error: &StoreError) -> LogLevel {
        match error {
            // Non-critical: Temporary server issues
            StoreError::Http { status, .. } if *status == 429 => LogLevel::Debug,
            StoreError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Critical: Auth, malformed responses
            StoreError::Http { status, .. } if *status == 401 => LogLevel::Error,
            StoreError::Http { status, .. } if *status == 403 => LogLevel::Error,
            StoreError::Decode(_) => LogLevel::Error,

            // Network issues - usually temporary
            _ => LogLevel::Warn,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http_error(status: u16) -> StoreError {
        StoreError::Http {
            status,
            message: "test".to_string(),
        }
    }

    #[test]
    fn test_rate_limit_is_debug() {
        let classifier = ErrorClassifier::new();
        assert_eq!(
            classifier.classify_fetch_error(&http_error(429)),
            LogLevel::Debug
        );
    }

    #[test]
    fn test_server_errors_are_warn() {
        let classifier = ErrorClassifier::new();
        assert_eq!(
            classifier.classify_fetch_error(&http_error(500)),
            LogLevel::Warn
        );
        assert_eq!(
            classifier.classify_fetch_error(&http_error(503)),
            LogLevel::Warn
        );
    }

    #[test]
    fn test_auth_errors_are_error() {
        let classifier = ErrorClassifier::new();
        assert_eq!(
            classifier.classify_fetch_error(&http_error(401)),
            LogLevel::Error
        );
        assert_eq!(
            classifier.classify_fetch_error(&http_error(403)),
            LogLevel::Error
        );
    }

    #[test]
    fn test_decode_errors_are_error() {
        let classifier = ErrorClassifier::new();
        let decode: serde_json::Error = serde_json::from_str::<u32>("not json").unwrap_err();
        assert_eq!(
            classifier.classify_fetch_error(&StoreError::Decode(decode)),
            LogLevel::Error
        );
    }
}
