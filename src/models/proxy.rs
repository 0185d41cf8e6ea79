//! Inbound and outbound HTTP models.
//!
//! The gateway envelope itself is decoded by `lambda_http`; these types carry
//! only what the proxy reads from a request and what it sends back.

use lambda_http::{Body, Request, Response};
use std::collections::HashMap;

/// The parts of an inbound request the proxy acts on. Headers are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProxyRequest {
    pub http_method: String,
    pub path: String,
    /// `None` when the gateway delivered no body (absent or `null`).
    pub body: Option<String>,
}

impl ProxyRequest {
    #[must_use]
    pub fn new(http_method: &str, path: &str, body: Option<&str>) -> Self {
        Self {
            http_method: http_method.to_string(),
            path: path.to_string(),
            body: body.map(str::to_string),
        }
    }
}

impl From<&Request> for ProxyRequest {
    fn from(request: &Request) -> Self {
        let body = match request.body() {
            Body::Empty => None,
            Body::Text(text) => Some(text.clone()),
            // Base64 payloads arrive already decoded.
            Body::Binary(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
        };

        Self {
            http_method: request.method().as_str().to_string(),
            path: request.uri().path().to_string(),
            body,
        }
    }
}

/// Outbound HTTP response returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl ProxyResponse {
    /// Response with no extra headers.
    #[must_use]
    pub fn new(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            status_code,
            headers: HashMap::new(),
            body: body.into(),
        }
    }

    /// 200 response carrying a JSON body.
    #[must_use]
    pub fn json(body: impl Into<String>) -> Self {
        Self {
            status_code: 200,
            headers: HashMap::from([(
                "Content-Type".to_string(),
                "application/json".to_string(),
            )]),
            body: body.into(),
        }
    }

    /// Builds the `http` response handed back to the Lambda runtime.
    ///
    /// # Errors
    ///
    /// Returns an error if the status code or a header is not valid HTTP.
    pub fn into_http(self) -> Result<Response<Body>, lambda_http::http::Error> {
        let mut builder = Response::builder().status(self.status_code);
        for (name, value) in &self.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        builder.body(Body::Text(self.body))
    }
}
