//! Request error types

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Message used for HTTP status failures that came back with an empty body
pub const HTTP_ERROR_FALLBACK: &str = "HTTP error";

/// Errors returned by the request helpers
///
/// Every variant maps onto the `{error, code}` shape through [`RequestError::to_body`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The method is not one of GET, POST, PUT or DELETE
    #[error("Invalid HTTP method")]
    InvalidMethod(String),
    /// The transport could not complete the exchange (network, TLS, bad URL)
    #[error("cURL error: {0}")]
    Transport(String),
    /// The server answered outside of the 2xx range
    #[error("{}", status_message(.body))]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },
}

fn status_message(body: &str) -> &str {
    if body.is_empty() {
        HTTP_ERROR_FALLBACK
    } else {
        body
    }
}

impl RequestError {
    /// Numeric code reported alongside the error message
    pub fn code(&self) -> u16 {
        match self {
            RequestError::InvalidMethod(_) => 400,
            RequestError::Transport(_) => 500,
            RequestError::Status { status, .. } => *status,
        }
    }

    /// Convert into the `{error, code}` body handed back to callers
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            error: self.to_string(),
            code: self.code(),
        }
    }

    /// Convert into a JSON mapping
    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "error": self.to_string(),
            "code": self.code(),
        })
    }
}

impl From<TransportError> for RequestError {
    fn from(err: TransportError) -> Self {
        RequestError::Transport(err.0)
    }
}

/// Error mapping returned for every failed request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human readable message
    pub error: String,
    /// Validation (400), transport (500) or HTTP status code
    pub code: u16,
}

impl From<RequestError> for ErrorBody {
    fn from(err: RequestError) -> Self {
        err.to_body()
    }
}

/// Failure reported by a [`Transport`](crate::Transport) implementation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl TransportError {
    /// Create a transport error from any displayable message
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        let message = error_chain(&err);
        if err.is_timeout() {
            TransportError::new(format!("Request timeout: {message}"))
        } else if err.is_builder() {
            TransportError::new(format!("Client build error: {message}"))
        } else if err.is_connect() {
            TransportError::new(format!("Connection error: {message}"))
        } else {
            TransportError::new(message)
        }
    }
}

impl From<std::io::Error> for TransportError {
    fn from(err: std::io::Error) -> Self {
        TransportError::new(error_chain(&err))
    }
}

/// Join `err` and its sources into one `outer: inner: root` message
///
/// A source whose text is already part of the message is skipped.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
