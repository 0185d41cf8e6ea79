use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use std::sync::LazyLock;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Status and raw body of an upstream response.
///
/// The body is kept as text so the caller decides whether to relay it as an
/// error detail or parse it as JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: String,
}

impl UpstreamResponse {
    #[must_use]
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Trait for HTTP client operations to enable testing with mocks.
///
/// This trait abstracts the single upstream call so tests can count and
/// script upstream traffic without opening sockets.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Send a POST request with a JSON body and return the raw response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request does not complete (connection, DNS,
    /// TLS or timeout failure) or the response body cannot be read.
    async fn post_json(&self, url: &str, body: &Value) -> Result<UpstreamResponse, BoxError>;
}

/// Production HTTP client implementation using reqwest.
pub struct ReqwestClient {
    client: Client,
}

impl ReqwestClient {
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn post_json(&self, url: &str, body: &Value) -> Result<UpstreamResponse, BoxError> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        Ok(UpstreamResponse { status, body })
    }
}

/// Global HTTP client for production use
pub static HTTP_CLIENT: LazyLock<ReqwestClient> = LazyLock::new(|| {
    ReqwestClient::new(Client::new())
});
