//! Error types for the server directory API
//!
//! Every failure of a directory or detail call ends up as one of three kinds.
//! The locator treats `DirectoryUnavailable` as fatal and the other two as
//! per-server warnings.

use thiserror::Error;

/// Errors returned by the directory and detail endpoints
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The directory listing could not be fetched
    #[error("Directory unavailable: {reason}")]
    DirectoryUnavailable {
        /// HTTP status, `None` for transport failures and timeouts
        status: Option<u16>,
        reason: String,
    },

    /// One server's detail call failed
    #[error("Server {server_id} unavailable: {reason}")]
    ServerUnavailable {
        server_id: String,
        /// HTTP status, `None` for transport failures and timeouts
        status: Option<u16>,
        reason: String,
    },

    /// The response body did not match the expected JSON shape
    #[error("Malformed response from {context}: {reason}")]
    MalformedResponse { context: String, reason: String },
}

impl ApiError {
    /// Directory endpoint returned a non-success status
    pub fn directory_status(status: u16) -> Self {
        let reason = if status == 404 {
            "404 Not Found: the directory endpoint is not accessible".to_string()
        } else {
            format!("Failed to fetch servers. Status Code: {status}")
        };
        Self::DirectoryUnavailable {
            status: Some(status),
            reason,
        }
    }

    /// Directory request never produced a response
    pub fn directory_transport(err: &reqwest::Error) -> Self {
        Self::DirectoryUnavailable {
            status: err.status().map(|s| s.as_u16()),
            reason: describe_transport(err),
        }
    }

    /// Detail endpoint returned a non-success status
    pub fn server_status(server_id: impl Into<String>, status: u16) -> Self {
        Self::ServerUnavailable {
            server_id: server_id.into(),
            status: Some(status),
            reason: format!("Failed to fetch server details. Status Code: {status}"),
        }
    }

    /// Detail request never produced a response
    pub fn server_transport(server_id: impl Into<String>, err: &reqwest::Error) -> Self {
        Self::ServerUnavailable {
            server_id: server_id.into(),
            status: err.status().map(|s| s.as_u16()),
            reason: describe_transport(err),
        }
    }

    pub fn malformed(context: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            context: context.into(),
            reason: reason.into(),
        }
    }

    /// HTTP status attached to the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::DirectoryUnavailable { status, .. } | Self::ServerUnavailable { status, .. } => {
                *status
            }
            Self::MalformedResponse { .. } => None,
        }
    }

    /// Check if a later attempt could plausibly succeed
    pub fn is_recoverable(&self) -> bool {
        match self.status() {
            None => !matches!(self, Self::MalformedResponse { .. }),
            Some(status) => matches!(status, 429 | 500 | 502 | 503 | 504),
        }
    }
}

fn describe_transport(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        "Request timeout".to_string()
    } else if err.is_connect() {
        format!("Connection failed: {err}")
    } else {
        format!("HTTP request failed: {err}")
    }
}
