//! HTTP client for the upstream directory service.
//!
//! Issues search requests and classifies every transport or protocol
//! failure into the `DirectoryError` taxonomy. Retries, if ever wanted,
//! belong to callers; this client makes exactly one attempt per call.

use std::time::Duration;

use reqwest::header;
use tracing::{debug, instrument, warn};
use url::Url;

use unidir_core::constants::{
    DEFAULT_UPSTREAM_TIMEOUT_SECS, DEFAULT_UPSTREAM_URL, UPSTREAM_USER_AGENT,
};
use unidir_core::error::{DirectoryError, Result};
use unidir_core::types::RawUniversity;

/// Upstream client configuration.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Search endpoint of the upstream directory service.
    pub endpoint: String,
    /// Timeout applied to each request, connection included.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_UPSTREAM_URL.into(),
            timeout: Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Creates a configuration for the given endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }
}

/// Client for the upstream university-directory search endpoint.
pub struct DirectoryClient {
    config: ClientConfig,
    http_client: reqwest::Client,
}

impl DirectoryClient {
    /// Creates a client with the default endpoint and timeout.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client with custom configuration.
    ///
    /// Fails with `RequestSetup` if the endpoint is not a valid URL or the
    /// HTTP client cannot be constructed.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Url::parse(&config.endpoint).map_err(|e| {
            DirectoryError::RequestSetup(format!("invalid upstream URL '{}': {}", config.endpoint, e))
        })?;

        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DirectoryError::RequestSetup(e.to_string()))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Queries the upstream with optional `country` and `name` filters.
    ///
    /// Passing no filters returns the upstream's full data set, which is how
    /// the distinct country list is sourced.
    #[instrument(skip(self))]
    pub async fn search(
        &self,
        country: Option<&str>,
        name: Option<&str>,
    ) -> Result<Vec<RawUniversity>> {
        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(country) = country {
            query.push(("country", country));
        }
        if let Some(name) = name {
            query.push(("name", name));
        }

        let response = self
            .http_client
            .get(&self.config.endpoint)
            .header(header::ACCEPT, "application/json")
            .header(header::USER_AGENT, UPSTREAM_USER_AGENT)
            .query(&query)
            .send()
            .await
            .map_err(|e| self.classify_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "upstream returned an error status");
            return Err(DirectoryError::UpstreamHttp {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("upstream error")
                    .to_string(),
            });
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| self.classify_body_error(e))?;

        if !body.is_array() {
            return Err(DirectoryError::UpstreamHttp {
                status: 502,
                message: "Invalid data received from API: expected an array".into(),
            });
        }

        let records: Vec<RawUniversity> =
            serde_json::from_value(body).map_err(|e| DirectoryError::UpstreamHttp {
                status: 502,
                message: format!("Invalid data received from API: {}", e),
            })?;

        debug!(count = records.len(), "upstream search complete");
        Ok(records)
    }

    /// Classifies a failure of `send()`: the request never produced a
    /// response.
    fn classify_send_error(&self, err: reqwest::Error) -> DirectoryError {
        if err.is_timeout() {
            DirectoryError::Timeout {
                seconds: self.config.timeout.as_secs(),
            }
        } else if err.is_builder() {
            DirectoryError::RequestSetup(err.to_string())
        } else {
            // Connect failures, DNS errors, dropped connections.
            DirectoryError::UpstreamUnreachable(err.to_string())
        }
    }

    /// Classifies a failure while reading or decoding the response body.
    fn classify_body_error(&self, err: reqwest::Error) -> DirectoryError {
        if err.is_timeout() {
            DirectoryError::Timeout {
                seconds: self.config.timeout.as_secs(),
            }
        } else if err.is_decode() {
            DirectoryError::UpstreamHttp {
                status: 502,
                message: format!("Invalid data received from API: {}", err),
            }
        } else {
            DirectoryError::UpstreamUnreachable(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer, timeout: Duration) -> DirectoryClient {
        DirectoryClient::with_config(ClientConfig {
            endpoint: server.uri(),
            timeout,
        })
        .unwrap()
    }

    #[test]
    fn test_rejects_invalid_endpoint() {
        let result = DirectoryClient::with_config(ClientConfig::new("not a url"));
        assert!(matches!(result, Err(DirectoryError::RequestSetup(_))));
    }

    #[tokio::test]
    async fn test_search_sends_filters_and_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .and(query_param("country", "Japan"))
            .and(query_param("name", "tokyo"))
            .and(header("accept", "application/json"))
            .and(header("user-agent", UPSTREAM_USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"name": "University of Tokyo", "country": "Japan", "alpha_two_code": "JP"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server, Duration::from_secs(5));
        let records = client.search(Some("Japan"), Some("tokyo")).await.unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "University of Tokyo");
    }

    #[tokio::test]
    async fn test_search_without_filters_sends_no_params() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server, Duration::from_secs(5));
        let records = client.search(None, None).await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_non_success_status_is_surfaced() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = test_client(&server, Duration::from_secs(5));
        let err = client.search(Some("Japan"), None).await.unwrap_err();

        assert!(matches!(err, DirectoryError::UpstreamHttp { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_non_array_body_maps_to_502() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"error": "maintenance"})),
            )
            .mount(&server)
            .await;

        let client = test_client(&server, Duration::from_secs(5));
        let err = client.search(Some("Japan"), None).await.unwrap_err();

        assert!(matches!(err, DirectoryError::UpstreamHttp { status: 502, .. }));
    }

    #[tokio::test]
    async fn test_non_json_body_maps_to_502() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .mount(&server)
            .await;

        let client = test_client(&server, Duration::from_secs(5));
        let err = client.search(Some("Japan"), None).await.unwrap_err();

        assert!(matches!(err, DirectoryError::UpstreamHttp { status: 502, .. }));
    }

    #[tokio::test]
    async fn test_slow_upstream_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([]))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let client = test_client(&server, Duration::from_millis(100));
        let err = client.search(Some("Japan"), None).await.unwrap_err();

        assert!(matches!(err, DirectoryError::Timeout { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_upstream() {
        // Nothing listens on port 1; the connection is refused immediately.
        let client = DirectoryClient::with_config(ClientConfig {
            endpoint: "http://127.0.0.1:1".into(),
            timeout: Duration::from_secs(5),
        })
        .unwrap();

        let err = client.search(Some("Japan"), None).await.unwrap_err();
        assert!(matches!(err, DirectoryError::UpstreamUnreachable(_)));
    }
}
