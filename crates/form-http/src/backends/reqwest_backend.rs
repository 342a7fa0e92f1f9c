//! reqwest-based transport

use std::path::Path;
use std::time::Duration;

use crate::error::TransportError;
use crate::headers::parse_header_line;
use crate::transport::{Transport, TransportReply, TransportRequest};

/// Transport backed by `reqwest`
///
/// A fresh `reqwest::Client` trusting only the request's CA bundle is built for
/// every call and dropped when the call returns.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    timeout: Option<Duration>,
}

impl ReqwestTransport {
    /// Transport with no timeout of its own
    pub fn new() -> Self {
        Self::default()
    }

    /// Abort requests that take longer than `timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn build_client(&self, ca_bundle: &Path) -> Result<reqwest::Client, TransportError> {
        let pem = std::fs::read(ca_bundle).map_err(|e| {
            TransportError::new(format!(
                "error setting certificate file: {}: {}",
                ca_bundle.display(),
                e
            ))
        })?;
        let certs = reqwest::Certificate::from_pem_bundle(&pem)?;

        let mut builder = reqwest::Client::builder().tls_built_in_root_certs(false);
        for cert in certs {
            builder = builder.add_root_certificate(cert);
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(builder.build()?)
    }
}

impl Transport for ReqwestTransport {
    async fn execute(&self, request: TransportRequest) -> Result<TransportReply, TransportError> {
        let client = self.build_client(&request.ca_bundle)?;

        let mut builder = client.request(request.method.into(), &request.url);
        for line in &request.headers {
            let (name, value) = parse_header_line(line).map_err(TransportError::new)?;
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(TransportReply { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trust_store::bundled_ca_path;

    #[test]
    fn test_build_client_with_bundled_store() {
        let transport = ReqwestTransport::new();
        assert!(transport.build_client(&bundled_ca_path()).is_ok());
    }

    #[test]
    fn test_build_client_with_timeout() {
        let transport = ReqwestTransport::new().with_timeout(Duration::from_secs(5));
        assert!(transport.build_client(&bundled_ca_path()).is_ok());
    }

    #[test]
    fn test_build_client_missing_bundle() {
        let transport = ReqwestTransport::new();
        let result = transport.build_client(Path::new("/nonexistent/cacert.pem"));

        match result {
            Err(err) => assert!(err.to_string().contains("error setting certificate file")),
            Ok(_) => panic!("Expected TransportError"),
        }
    }
}
