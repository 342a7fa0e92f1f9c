//! Response types

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::RequestError;

/// Result type for every request helper
pub type Response<R = Payload, E = RequestError> = Result<R, E>;

/// Body of a successful (2xx) response
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Body decoded as JSON
    Json(Value),
    /// Body that was not valid JSON, kept verbatim
    Raw(String),
}

impl Payload {
    /// Decode a response body, falling back to the raw text
    pub fn from_body(body: String) -> Self {
        match serde_json::from_str(&body) {
            Ok(value) => Payload::Json(value),
            Err(_) => Payload::Raw(body),
        }
    }

    /// Decoded JSON, if the body parsed
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Raw(_) => None,
        }
    }

    /// Raw text, if the body did not parse
    pub fn as_raw(&self) -> Option<&str> {
        match self {
            Payload::Json(_) => None,
            Payload::Raw(body) => Some(body),
        }
    }

    /// Deserialize the decoded JSON into `T`
    pub fn deserialize<T: DeserializeOwned>(self) -> Result<T, serde_json::Error> {
        match self {
            Payload::Json(value) => serde_json::from_value(value),
            Payload::Raw(body) => serde_json::from_str(&body),
        }
    }

    /// Uniform mapping: the decoded value itself, or `{"raw": body}`
    pub fn to_value(&self) -> Value {
        match self {
            Payload::Json(value) => value.clone(),
            Payload::Raw(body) => serde_json::json!({ "raw": body }),
        }
    }

    /// Same as [`Payload::to_value`], consuming the payload
    pub fn into_value(self) -> Value {
        match self {
            Payload::Json(value) => value,
            Payload::Raw(body) => serde_json::json!({ "raw": body }),
        }
    }
}

/// Flatten a request result into a single mapping
///
/// Success yields the decoded body (or `{"raw": ...}`), failure yields
/// `{"error": ..., "code": ...}`.
pub fn into_value(result: Response) -> Value {
    match result {
        Ok(payload) => payload.into_value(),
        Err(err) => err.to_value(),
    }
}
