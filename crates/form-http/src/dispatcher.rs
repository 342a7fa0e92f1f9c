//! Request dispatcher

use crate::backends::ReqwestTransport;
use crate::encoding::append_query;
use crate::error::RequestError;
use crate::headers::prepare_headers;
use crate::method::Method;
use crate::options::RequestOptions;
use crate::response::{Payload, Response};
use crate::transport::{Transport, TransportReply, TransportRequest};
use crate::trust_store::bundled_ca_path;

/// Stateless request dispatcher
///
/// Holds nothing but the transport it delegates to, so a single instance can
/// serve any number of concurrent calls.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher<T = ReqwestTransport> {
    transport: T,
}

impl Dispatcher {
    /// Dispatcher backed by the default reqwest transport
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Transport> Dispatcher<T> {
    /// Dispatcher backed by a custom transport
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Transport used by this dispatcher
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// GET request, data is sent as a query string
    pub async fn get(&self, options: RequestOptions) -> Response {
        self.request(options.method(Method::Get.as_str())).await
    }

    /// POST request, data is sent as a form body
    pub async fn post(&self, options: RequestOptions) -> Response {
        self.request(options.method(Method::Post.as_str())).await
    }

    /// PUT request, data is sent as a form body
    pub async fn put(&self, options: RequestOptions) -> Response {
        self.request(options.method(Method::Put.as_str())).await
    }

    /// DELETE request, data is sent as a form body
    pub async fn delete(&self, options: RequestOptions) -> Response {
        self.request(options.method(Method::Delete.as_str())).await
    }

    /// Validate, encode and send a request, then map the reply
    ///
    /// An unsupported method is rejected before the transport is touched.
    pub async fn request(&self, options: RequestOptions) -> Response {
        let method = match options.method.parse::<Method>() {
            Ok(method) => method,
            Err(err) => {
                tracing::warn!("Rejected request with method '{}'", options.method);
                return Err(err);
            }
        };

        let request = prepare(method, options);
        tracing::debug!("Dispatching {} {}", request.method, request.url);

        let reply = self.transport.execute(request).await.map_err(|err| {
            tracing::warn!("Transport failure: {}", err);
            RequestError::from(err)
        })?;

        map_reply(reply)
    }
}

/// Turn validated options into what the transport sends
///
/// GET data is appended to the URL, other methods carry it as the body.
/// Empty data produces neither a query string nor a body.
pub fn prepare(method: Method, options: RequestOptions) -> TransportRequest {
    let RequestOptions {
        url, data, headers, ..
    } = options;

    let (url, body) = if data.is_empty() {
        (url, None)
    } else if method.uses_query() {
        (append_query(&url, &data.encode()), None)
    } else {
        (url, Some(data.encode()))
    };

    TransportRequest {
        method,
        url,
        headers: prepare_headers(&headers),
        body,
        ca_bundle: bundled_ca_path(),
    }
}

fn map_reply(reply: TransportReply) -> Response {
    if !reply.is_success() {
        if reply.is_client_error() {
            tracing::warn!("Request rejected with HTTP status {}", reply.status);
        } else if reply.is_server_error() {
            tracing::warn!("Server failed with HTTP status {}", reply.status);
        } else {
            tracing::warn!("Unexpected HTTP status {}", reply.status);
        }
        return Err(RequestError::Status {
            status: reply.status,
            body: reply.body,
        });
    }

    let payload = Payload::from_body(reply.body);
    if payload.as_raw().is_some() {
        tracing::debug!("Response body is not JSON, returning it raw");
    }

    Ok(payload)
}
