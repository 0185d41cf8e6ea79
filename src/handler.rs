use lambda_http::{Body, Request, Response};
use lambda_runtime::Error;
use lambda_runtime::tracing::{debug, error, info};
use serde_json::Value;

use crate::config::ProxyConfig;
use crate::http::{HTTP_CLIENT, HttpClient};
use crate::models::{ProxyError, ProxyRequest, ProxyResponse};
use crate::utils::{endpoint_name, redact_api_key};

/// Builds the upstream URL with the API key in the query string.
fn upstream_url(config: &ProxyConfig, api_key: &str) -> String {
    format!(
        "{}?key={}",
        config.generate_content_url(),
        urlencoding::encode(api_key)
    )
}

/// Forwards one inbound request to the Gemini API and relays the result.
///
/// Never fails: every error kind is converted into the response the caller
/// sees. Upstream and internal failures are logged before conversion.
pub async fn proxy_request(
    request: &ProxyRequest,
    config: &ProxyConfig,
    client: &dyn HttpClient,
) -> ProxyResponse {
    match forward(request, config, client).await {
        Ok(response) => response,
        Err(err) => {
            match &err {
                ProxyError::Upstream { status, details } => {
                    error!(status = %status, details = %details, "Gemini API error");
                }
                ProxyError::InvalidJson(_) | ProxyError::Transport(_) => {
                    error!(error = %err, "Server error");
                }
                ProxyError::MethodNotAllowed(_) | ProxyError::MissingApiKey => {
                    debug!(error = %err, "Rejected request");
                }
            }
            err.into_response()
        }
    }
}

async fn forward(
    request: &ProxyRequest,
    config: &ProxyConfig,
    client: &dyn HttpClient,
) -> Result<ProxyResponse, ProxyError> {
    if request.http_method != "POST" {
        return Err(ProxyError::MethodNotAllowed(request.http_method.clone()));
    }

    let api_key = config.api_key.as_deref().ok_or(ProxyError::MissingApiKey)?;

    // Only one upstream model is served; the name is logged, not routed on.
    let endpoint = endpoint_name(&request.path);
    let body_text = request.body.as_deref().unwrap_or_default();
    info!(endpoint = %endpoint, body_size = body_text.len(), "Proxying request to Gemini API");

    let body: Value = serde_json::from_str(body_text)?;

    let url = upstream_url(config, api_key);
    debug!(url = %redact_api_key(&url), "Sending upstream request");

    let upstream = client.post_json(&url, &body).await?;

    if !upstream.is_success() {
        return Err(ProxyError::Upstream {
            status: upstream.status.as_u16(),
            details: upstream.body,
        });
    }

    let data: Value = serde_json::from_str(&upstream.body)?;
    debug!(status = %upstream.status, "Received upstream response");

    Ok(ProxyResponse::json(serde_json::to_string(&data)?))
}

/// Lambda event handler. Reads configuration per invocation and proxies the
/// request through the global HTTP client.
///
/// `lambda_http` decodes API Gateway, function URL and ALB envelopes into
/// `request`, so gateway quirks such as `"headers": null` never reach the
/// proxy logic.
///
/// # Errors
///
/// Returns an error only if the response cannot be assembled as HTTP; every
/// proxy failure is already an HTTP response.
pub async fn function_handler(request: Request) -> Result<Response<Body>, Error> {
    let inbound = ProxyRequest::from(&request);
    let config = ProxyConfig::from_env();

    let response = proxy_request(&inbound, &config, &*HTTP_CLIENT).await;
    Ok(response.into_http()?)
}
