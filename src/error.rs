//! Unified error handling for the cfxscan crate
//!
//! Domain errors live next to the code that raises them ([`ApiError`] in
//! [`crate::api`]); this module wraps them into a single [`Error`] so the
//! command layer can propagate anything with `?`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use cfxscan::error::{CfxErrorTrait, Error};
//!
//! fn handle_error(err: Error) {
//!     if err.is_recoverable() {
//!         eprintln!("Try again later: {err}");
//!     } else {
//!         eprintln!("Fatal error: {err}");
//!     }
//! }
//! ```

use thiserror::Error;

pub use crate::api::error::ApiError;

/// Common trait for all cfxscan error types
pub trait CfxErrorTrait: std::error::Error {
    /// Check if this error is recoverable (a later attempt may succeed)
    fn is_recoverable(&self) -> bool;

    /// Get the error category for handling strategies
    fn category(&self) -> ErrorCategory;
}

/// Classification of errors for handling strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Network-related errors (HTTP status, timeout, connection)
    Network,
    /// Response shape and JSON errors
    Parsing,
    /// Configuration and validation errors
    Config,
    /// Other/unknown errors
    Other,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::Parsing => "parsing",
            Self::Config => "config",
            Self::Other => "other",
        }
    }
}

impl CfxErrorTrait for ApiError {
    fn is_recoverable(&self) -> bool {
        ApiError::is_recoverable(self)
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::DirectoryUnavailable { .. } | Self::ServerUnavailable { .. } => {
                ErrorCategory::Network
            }
            Self::MalformedResponse { .. } => ErrorCategory::Parsing,
        }
    }
}

/// Unified error type for the cfxscan crate
#[derive(Error, Debug)]
pub enum Error {
    /// Directory or detail endpoint errors
    #[error(transparent)]
    Api(#[from] ApiError),

    /// HTTP client construction errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),
}

impl CfxErrorTrait for Error {
    fn is_recoverable(&self) -> bool {
        match self {
            Self::Api(e) => e.is_recoverable(),
            Self::Http(_) => true,
            Self::Config(_) => false,
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Api(e) => e.category(),
            Self::Http(_) => ErrorCategory::Network,
            Self::Config(_) => ErrorCategory::Config,
        }
    }
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_category() {
        let err = Error::Api(ApiError::server_status("a", 500));
        assert_eq!(err.category(), ErrorCategory::Network);

        let err = Error::Api(ApiError::malformed("server a", "missing hostname"));
        assert_eq!(err.category(), ErrorCategory::Parsing);
    }

    #[test]
    fn test_is_recoverable() {
        let err = Error::Api(ApiError::directory_status(503));
        assert!(err.is_recoverable());

        let err = Error::config("bad url");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_api_error_is_transparent() {
        let err: Error = ApiError::directory_status(500).into();
        assert_eq!(
            err.to_string(),
            "Directory unavailable: Failed to fetch servers. Status Code: 500"
        );
    }

    #[test]
    fn test_config_error() {
        let err = Error::config("user agent must not be empty");
        assert_eq!(err.category(), ErrorCategory::Config);
        assert_eq!(err.category().as_str(), "config");
    }
}
