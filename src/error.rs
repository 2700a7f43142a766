//! Error types for the chronicle client
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use crate::types::Game;
use thiserror::Error;

/// Retcode returned when the account has made too many requests in a short window
pub const RETCODE_VISITS_TOO_FREQUENTLY: i64 = -110;

/// The main error type for the chronicle client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Max retries ({max_retries}) exceeded")]
    MaxRetriesExceeded { max_retries: u32 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // API Errors (non-zero retcode)
    // ============================================================================
    #[error("Cookies are not valid (retcode {retcode}): {message}")]
    InvalidCookies { retcode: i64, message: String },

    #[error("User's data is not public: {message}")]
    DataNotPublic { message: String },

    #[error("Cannot get data for more accounts today: {message}")]
    TooManyRequests { message: String },

    #[error("Visits too frequently: {message}")]
    VisitsTooFrequently { message: String },

    #[error("Invalid language: {message}")]
    InvalidLanguage { message: String },

    #[error("API error (retcode {retcode}): {message}")]
    Api { retcode: i64, message: String },

    // ============================================================================
    // Data Errors
    // ============================================================================
    #[error("No uid configured for {game}")]
    MissingUid { game: Game },

    #[error("Cannot recognize server for uid {uid}")]
    UnknownServer { uid: u64 },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("Paged item has no cursor field: {item}")]
    MissingCursor { item: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a missing cursor error from a debug rendering of the item
    pub fn missing_cursor(item: impl Into<String>) -> Self {
        Self::MissingCursor { item: item.into() }
    }

    /// Map a non-zero API retcode to an error
    pub fn from_retcode(retcode: i64, message: impl Into<String>) -> Self {
        let message = message.into();
        match retcode {
            -100 | 10001 | 10103 => Self::InvalidCookies { retcode, message },
            10102 => Self::DataNotPublic { message },
            10101 => Self::TooManyRequests { message },
            RETCODE_VISITS_TOO_FREQUENTLY => Self::VisitsTooFrequently { message },
            -108 => Self::InvalidLanguage { message },
            _ => Self::Api { retcode, message },
        }
    }

    /// The API retcode this error was built from, if any
    pub fn retcode(&self) -> Option<i64> {
        match self {
            Error::InvalidCookies { retcode, .. } | Error::Api { retcode, .. } => Some(*retcode),
            Error::DataNotPublic { .. } => Some(10102),
            Error::TooManyRequests { .. } => Some(10101),
            Error::VisitsTooFrequently { .. } => Some(RETCODE_VISITS_TOO_FREQUENTLY),
            Error::InvalidLanguage { .. } => Some(-108),
            _ => None,
        }
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(_) | Error::Timeout { .. } | Error::VisitsTooFrequently { .. } => true,
            Error::HttpStatus { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }
}

/// Check if an HTTP status code is retryable
fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

/// Result type alias for the chronicle client
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
