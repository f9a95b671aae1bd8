//! HTTP client for service-b.

use std::time::Instant;

use tracing::{debug, instrument};

use crate::config::Config;
use crate::error::DownstreamError;
use crate::metrics;

/// Client for the service-b hello endpoint.
///
/// Holds one long-lived `reqwest::Client`, built once at startup and shared
/// for the lifetime of the process. The client keeps library defaults: no
/// request timeout, no retries.
#[derive(Debug, Clone)]
pub struct ServiceBClient {
    /// HTTP client for outbound requests.
    http: reqwest::Client,
    /// Full URL of the service-b hello endpoint.
    url: String,
}

impl ServiceBClient {
    /// Create a new client from config.
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: config.service_b_url.clone(),
        }
    }

    /// The configured downstream URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Call service-b's hello endpoint and return the raw text body.
    ///
    /// Issues exactly one GET with no headers, query, or body beyond what the
    /// client sends by default. A non-2xx status is an error; the downstream
    /// body is only returned on success.
    #[instrument(skip(self), fields(url = %self.url))]
    pub async fn hello(&self) -> Result<String, DownstreamError> {
        let start = Instant::now();

        let result = self.call_hello().await;

        metrics::record_downstream_latency(start);
        if result.is_err() {
            metrics::increment_downstream_failures();
        }

        result
    }

    async fn call_hello(&self) -> Result<String, DownstreamError> {
        let response = self.http.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownstreamError::BadStatus { status });
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "received service-b response");

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use pretty_assertions::assert_eq;

    fn client_for(url: String) -> ServiceBClient {
        ServiceBClient::new(&Config {
            service_b_url: url,
            ..Config::default()
        })
    }

    #[tokio::test]
    async fn hello_returns_downstream_body_verbatim() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/service-b/hello");
                then.status(200).body("Hello from Service B");
            })
            .await;

        let client = client_for(server.url("/service-b/hello"));
        let body = client.hello().await.unwrap();

        assert_eq!(body, "Hello from Service B");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn hello_rejects_non_success_status() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/service-b/hello");
                then.status(503).body("upstream down");
            })
            .await;

        let client = client_for(server.url("/service-b/hello"));
        let err = client.hello().await.unwrap_err();

        assert!(matches!(
            err,
            DownstreamError::BadStatus { status } if status.as_u16() == 503
        ));
        // Exactly one attempt, no retry.
        mock.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn hello_surfaces_connection_errors() {
        // Nothing listens on this port.
        let client = client_for("http://127.0.0.1:9/service-b/hello".to_string());
        let err = client.hello().await.unwrap_err();

        assert!(matches!(err, DownstreamError::RequestFailed(_)));
    }
}
