//! Error types for the swap client library.
//!
//! Every failure is normalized into one of three kinds before it reaches the
//! caller. All of them expose the same `{message, code?}` shape through
//! [`SwapError::message`] and [`SwapError::code`].

use reqwest::StatusCode;
use thiserror::Error;

/// Message used when the backend rejects a request without saying why.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error occurred";

/// Message used when a request was sent but no response came back.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error: No response received from server";

/// Prefix for errors raised before a request could be sent.
pub const REQUEST_ERROR_PREFIX: &str = "Request error: ";

/// The main error type for all swap client operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SwapError {
    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Api {
        /// HTTP status of the rejection
        status: StatusCode,
        /// Backend-supplied message, or a fixed fallback
        message: String,
        /// Backend-supplied error code, if any
        code: Option<String>,
    },

    /// The request left the client but no response arrived.
    #[error("Network error: No response received from server")]
    Network,

    /// The request could not be built or dispatched.
    #[error("Request error: {0}")]
    Request(String),
}

impl SwapError {
    /// Build the rejection kind from an HTTP status and the raw response body.
    ///
    /// The message is taken from the body's `message` field, then its `error`
    /// field, then falls back to [`UNKNOWN_ERROR_MESSAGE`]. Empty strings count
    /// as absent. A body that is not JSON yields the fallback message.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
        let field = |name: &str| {
            parsed
                .as_ref()
                .and_then(|v| v.get(name))
                .and_then(non_empty_string)
        };

        let message = field("message")
            .or_else(|| field("error"))
            .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string());

        Self::Api {
            status,
            message,
            code: field("code"),
        }
    }

    /// Build the "could not send" kind from any displayable cause.
    pub fn request(cause: impl std::fmt::Display) -> Self {
        Self::Request(cause.to_string())
    }

    /// The normalized human-readable message.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// The backend error code. Only rejections carry one.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// The HTTP status of a rejection.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if the backend rejected the request.
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// Check if no response was received.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network)
    }

    /// Check if the request never left the client.
    pub fn is_request(&self) -> bool {
        matches!(self, Self::Request(_))
    }

    /// Check if the backend reported the given error code.
    pub fn has_code(&self, code: &str) -> bool {
        self.code() == Some(code)
    }
}

impl From<reqwest_middleware::Error> for SwapError {
    fn from(err: reqwest_middleware::Error) -> Self {
        match err {
            reqwest_middleware::Error::Reqwest(e) => e.into(),
            reqwest_middleware::Error::Middleware(e) => Self::request(e),
        }
    }
}

impl From<reqwest::Error> for SwapError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Self::request(err)
        } else {
            Self::Network
        }
    }
}

impl From<url::ParseError> for SwapError {
    fn from(err: url::ParseError) -> Self {
        Self::request(err)
    }
}

impl From<serde_json::Error> for SwapError {
    fn from(err: serde_json::Error) -> Self {
        Self::request(err)
    }
}

impl From<serde_urlencoded::ser::Error> for SwapError {
    fn from(err: serde_urlencoded::ser::Error) -> Self {
        Self::request(err)
    }
}

fn non_empty_string(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Error codes the swap backend is known to return.
pub mod error_codes {
    /// Request parameters were rejected by the backend
    pub const INVALID_PARAMS: &str = "INVALID_PARAMS";
}
