//! Error types for the YouTu SDK.
//!
//! Every failure is returned as a value. Transport-level outcomes (network,
//! timeout, HTTP status) and decode failures are separate variants so callers
//! can tell them apart; application-level failures reported inside a
//! successfully decoded body stay in the response unless the caller opts in
//! through [`ApiResponse::into_result`](crate::models::ApiResponse::into_result).

use std::time::Duration;

/// The main error type for all SDK operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The credential's user id exceeds the server-side limit.
    #[error("User id too long: {len} bytes exceeds the maximum of {max}")]
    UserIdTooLong {
        /// Length of the rejected user id in bytes.
        len: usize,
        /// Maximum allowed length.
        max: usize,
    },

    /// Error building the client configuration.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message.
        message: String,
    },

    /// Invalid host URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Caller-supplied input could not be turned into a request.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Error message describing what was invalid.
        message: String,
    },

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Request timed out.
    #[error("Request timed out after {timeout:?}")]
    Timeout {
        /// The configured request timeout.
        timeout: Duration,
    },

    /// The server answered with a status other than 200.
    #[error("HTTP error: status {status}")]
    HttpStatus {
        /// HTTP status code returned by the server.
        status: u16,
    },

    /// Error serializing the request body.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The response body did not match the expected shape.
    #[error("Failed to decode response: {source}")]
    Decode {
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
        /// Raw response body, captured only when debug mode is enabled.
        body: Option<String>,
    },

    /// The server reported a non-zero error code inside the response body.
    #[error("API error {code}: {message}")]
    Application {
        /// Error code from the `errorcode` field.
        code: i32,
        /// Message from the `errormsg` field.
        message: String,
    },
}

impl Error {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Creates an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Classifies a `reqwest` failure, separating elapsed timeouts from
    /// other network errors.
    pub(crate) fn from_transport(error: reqwest::Error, timeout: Duration) -> Self {
        if error.is_timeout() {
            Self::Timeout { timeout }
        } else {
            Self::Network(error)
        }
    }

    /// Returns true if the request timed out.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Returns true if the error was detected before any network activity.
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::UserIdTooLong { .. } | Self::Configuration { .. } | Self::InvalidUrl(_)
        )
    }

    /// Returns the HTTP status code for [`Error::HttpStatus`].
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status } => Some(*status),
            _ => None,
        }
    }

    /// Returns the application error code for [`Error::Application`].
    #[must_use]
    pub fn error_code(&self) -> Option<i32> {
        match self {
            Self::Application { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Returns the raw response body attached to a decode failure, if any.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Decode { body, .. } => body.as_deref(),
            _ => None,
        }
    }
}

/// Result type alias for SDK operations.
pub type Result<T> = std::result::Result<T, Error>;
