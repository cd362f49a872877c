//! Failure categories observed while talking to the passport service.
//!
//! These never cross the access-layer boundary as `Err`; the executor turns
//! them into [`ApiResult::Failure`](crate::domain::ApiResult) messages or an
//! absent body.

use thiserror::Error;

/// One failed exchange with the passport service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiCallError {
    /// Connection, DNS or body-read failure before a complete response.
    #[error("transport failure: {message}")]
    Transport {
        /// Underlying transport error text.
        message: String,
    },
    /// The hosting environment cut the exchange short.
    #[error("request timed out: {message}")]
    Timeout {
        /// Underlying transport error text.
        message: String,
    },
    /// The service answered with a non-2xx status.
    #[error("request failed with status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },
    /// A 2xx body did not match the requested shape.
    #[error("response decode failed: {message}")]
    Decode {
        /// Decoder diagnostic.
        message: String,
    },
    /// The outgoing body could not be serialised.
    #[error("request body encode failed: {message}")]
    Encode {
        /// Encoder diagnostic.
        message: String,
    },
    /// The resource path does not form a valid URL against the base endpoint.
    #[error("invalid request path '{path}': {message}")]
    InvalidPath {
        /// Offending relative path.
        path: String,
        /// URL parser diagnostic.
        message: String,
    },
}

impl ApiCallError {
    /// Build a [`Self::Transport`] error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Build a [`Self::Timeout`] error.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Build a [`Self::Status`] error.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Build a [`Self::Decode`] error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Build a [`Self::Encode`] error.
    pub fn encode(message: impl Into<String>) -> Self {
        Self::Encode {
            message: message.into(),
        }
    }

    /// Build a [`Self::InvalidPath`] error.
    pub fn invalid_path(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Whether the exchange never produced a complete HTTP response.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::Timeout { .. } | Self::InvalidPath { .. }
        )
    }
}
