//! Transport collaborator interface
//!
//! The dispatcher never performs I/O itself. It hands a fully prepared
//! [`TransportRequest`] to a [`Transport`] and maps whatever comes back.

use std::future::Future;
use std::path::PathBuf;

use crate::error::TransportError;
use crate::method::Method;

/// A request ready to go on the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    /// Validated method
    pub method: Method,
    /// Final URL, query string included
    pub url: String,
    /// Header lines in send order
    pub headers: Vec<String>,
    /// Encoded body, if any
    pub body: Option<String>,
    /// CA bundle used to verify TLS peers
    pub ca_bundle: PathBuf,
}

/// What the transport got back from the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportReply {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub body: String,
}

impl TransportReply {
    /// Check if the status is a success (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Check if the status is a client error (4xx)
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    /// Check if the status is a server error (5xx)
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }
}

/// HTTP engine performing the actual network exchange
///
/// Implementations acquire whatever handle they need inside `execute` and must
/// release it before the returned future completes, whatever the outcome.
pub trait Transport: Send + Sync {
    /// Perform the exchange described by `request`
    fn execute(
        &self,
        request: TransportRequest,
    ) -> impl Future<Output = Result<TransportReply, TransportError>> + Send;
}

impl<T: Transport> Transport for &T {
    fn execute(
        &self,
        request: TransportRequest,
    ) -> impl Future<Output = Result<TransportReply, TransportError>> + Send {
        (**self).execute(request)
    }
}
