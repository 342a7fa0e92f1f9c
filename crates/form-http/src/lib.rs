//! Form-urlencoded HTTP helpers
//!
//! GET/POST/PUT/DELETE helpers that merge request options with their defaults,
//! encode data as a query string or form body, send the request through a
//! [`Transport`] and shape whatever comes back into a uniform result: the decoded
//! JSON body, `{"raw": ...}` for non-JSON bodies, or `{"error": ..., "code": ...}`.
//!
//! # Example
//!
//! ```no_run
//! use form_http::{into_value, RequestOptions};
//!
//! async fn example() -> serde_json::Value {
//!     let options = RequestOptions::new("https://api.example.com/search")
//!         .param("q", "rust")
//!         .header("Accept: application/json");
//!
//!     into_value(form_http::get(options).await)
//! }
//! ```

mod backends;
mod dispatcher;
mod encoding;
mod error;
mod headers;
mod method;
mod options;
mod response;
mod transport;
mod trust_store;

pub use backends::ReqwestTransport;
pub use dispatcher::{prepare, Dispatcher};
pub use encoding::{append_query, encode_form};
pub use error::{ErrorBody, RequestError, TransportError, HTTP_ERROR_FALLBACK};
pub use headers::{parse_header_line, prepare_headers, DEFAULT_CONTENT_TYPE};
pub use method::Method;
pub use options::{RequestData, RequestOptions};
pub use response::{into_value, Payload, Response};
pub use transport::{Transport, TransportReply, TransportRequest};
pub use trust_store::{bundled_ca_path, TRUST_STORE_RELATIVE_PATH};

/// GET request through the default transport
pub async fn get(options: RequestOptions) -> Response {
    Dispatcher::new().get(options).await
}

/// POST request through the default transport
pub async fn post(options: RequestOptions) -> Response {
    Dispatcher::new().post(options).await
}

/// PUT request through the default transport
pub async fn put(options: RequestOptions) -> Response {
    Dispatcher::new().put(options).await
}

/// DELETE request through the default transport
pub async fn delete(options: RequestOptions) -> Response {
    Dispatcher::new().delete(options).await
}

/// Request with the method taken from `options`
pub async fn request(options: RequestOptions) -> Response {
    Dispatcher::new().request(options).await
}
