//! Error types for the Civitai client.
//!
//! Transport failures (`Network`, `Http`, `RateLimited`, `NotFound`) all carry
//! the request URL, and the HTTP status where one exists, so callers can tell
//! them apart without matching on message text.

use thiserror::Error;

/// Main error type for the Civitai client.
#[derive(Debug, Error)]
pub enum CivitaiError {
    // Transport errors
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    #[error("HTTP {status} from {url}: {message}")]
    Http {
        status: u16,
        url: String,
        message: String,
    },

    #[error("Rate limit exceeded for {url}, retry after {retry_after_secs:?} seconds: {message}")]
    RateLimited {
        url: String,
        retry_after_secs: Option<u64>,
        message: String,
    },

    #[error("Not found: {url}: {message}")]
    NotFound { url: String, message: String },

    // Response decoding errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    #[error("Validation error for {field}: {message}")]
    Validation { field: String, message: String },

    // Setup errors
    #[error("Invalid URL {url}: {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Result type alias for Civitai operations.
pub type Result<T> = std::result::Result<T, CivitaiError>;

impl From<reqwest::Error> for CivitaiError {
    fn from(err: reqwest::Error) -> Self {
        CivitaiError::Network {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<serde_json::Error> for CivitaiError {
    fn from(err: serde_json::Error) -> Self {
        CivitaiError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<url::ParseError> for CivitaiError {
    fn from(err: url::ParseError) -> Self {
        CivitaiError::InvalidUrl {
            url: String::new(),
            message: err.to_string(),
        }
    }
}

impl CivitaiError {
    /// Create a validation error for a named field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        CivitaiError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Whether this error came from a failed HTTP exchange.
    ///
    /// Rate limiting and not-found are refinements of a transport failure, so
    /// both report `true` here.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            CivitaiError::Network { .. }
                | CivitaiError::Http { .. }
                | CivitaiError::RateLimited { .. }
                | CivitaiError::NotFound { .. }
        )
    }

    /// Whether the server answered with HTTP 429.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, CivitaiError::RateLimited { .. })
    }

    /// Whether the server answered with HTTP 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CivitaiError::NotFound { .. })
    }

    /// HTTP status carried by the error, if the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            CivitaiError::Http { status, .. } => Some(*status),
            CivitaiError::RateLimited { .. } => Some(429),
            CivitaiError::NotFound { .. } => Some(404),
            CivitaiError::Network { source, .. } => source
                .as_ref()
                .and_then(|e| e.status())
                .map(|s| s.as_u16()),
            _ => None,
        }
    }
}
