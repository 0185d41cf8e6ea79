//! Error kinds for the Gemini proxy.
//!
//! Every error is terminal for the current invocation and is reported to the
//! caller as a [`ProxyResponse`]. Parse and transport failures collapse to a
//! generic internal error so no upstream detail leaks for them.

use serde::Serialize;
use std::fmt;

use super::proxy::ProxyResponse;

pub const METHOD_NOT_ALLOWED_BODY: &str = "Method Not Allowed";
pub const MISSING_API_KEY_MESSAGE: &str = "API key not found.";
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to fetch from Gemini API";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Custom error type for the proxy.
#[derive(Debug)]
pub enum ProxyError {
    /// Inbound method was not POST
    MethodNotAllowed(String),
    /// `GEMINI_API_KEY` is unset or empty
    MissingApiKey,
    /// Upstream answered with a non-success status
    Upstream { status: u16, details: String },
    /// Inbound body or upstream success body was not valid JSON
    InvalidJson(String),
    /// The upstream call did not complete
    Transport(String),
}

/// JSON body of every error response except 405.
#[derive(Serialize, Debug)]
struct ErrorBody<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a str>,
}

impl ProxyError {
    /// HTTP status reported to the caller.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::MethodNotAllowed(_) => 405,
            Self::Upstream { status, .. } => *status,
            Self::MissingApiKey | Self::InvalidJson(_) | Self::Transport(_) => 500,
        }
    }

    /// Converts the error into the response the caller sees.
    #[must_use]
    pub fn into_response(self) -> ProxyResponse {
        let status = self.status_code();
        let body = match &self {
            Self::MethodNotAllowed(_) => METHOD_NOT_ALLOWED_BODY.to_string(),
            Self::MissingApiKey => error_json(MISSING_API_KEY_MESSAGE, None),
            Self::Upstream { details, .. } => {
                error_json(UPSTREAM_FAILURE_MESSAGE, Some(details))
            }
            Self::InvalidJson(_) | Self::Transport(_) => {
                error_json(INTERNAL_ERROR_MESSAGE, None)
            }
        };
        ProxyResponse::new(status, body)
    }
}

fn error_json(error: &str, details: Option<&str>) -> String {
    serde_json::to_string(&ErrorBody { error, details })
        // Two string fields always serialize.
        .unwrap_or_else(|_| format!("{{\"error\":\"{INTERNAL_ERROR_MESSAGE}\"}}"))
}

impl fmt::Display for ProxyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MethodNotAllowed(method) => write!(f, "Method not allowed: {method}"),
            Self::MissingApiKey => write!(f, "{MISSING_API_KEY_MESSAGE}"),
            Self::Upstream { status, details } => {
                write!(f, "Gemini API returned {status}: {details}")
            }
            Self::InvalidJson(msg) => write!(f, "Invalid JSON: {msg}"),
            Self::Transport(msg) => write!(f, "Upstream request failed: {msg}"),
        }
    }
}

impl std::error::Error for ProxyError {}

impl From<serde_json::Error> for ProxyError {
    fn from(error: serde_json::Error) -> Self {
        Self::InvalidJson(error.to_string())
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for ProxyError {
    fn from(error: Box<dyn std::error::Error + Send + Sync>) -> Self {
        Self::Transport(error.to_string())
    }
}
