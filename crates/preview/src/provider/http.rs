//! Response handling shared by the JSON metadata providers.

use reqwest::{header::CONTENT_TYPE, Client, Response};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::errors::ResolutionError;

const USER_AGENT: &str = concat!("linkboard/", env!("CARGO_PKG_VERSION"));

/// Longest body excerpt kept in malformed-response diagnostics.
const BODY_EXCERPT_LEN: usize = 200;

pub(crate) fn build_client() -> Client {
    Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Map a transport failure into [`ResolutionError::UpstreamUnreachable`].
///
/// The request URL is stripped from the message: it carries the API key in
/// its query string.
pub(crate) fn unreachable(provider: &str, error: reqwest::Error) -> ResolutionError {
    let timed_out = error.is_timeout();
    ResolutionError::UpstreamUnreachable {
        provider: provider.to_string(),
        message: error.without_url().to_string(),
        timed_out,
    }
}

/// Check status and content type, then parse the body as a JSON object.
pub(crate) async fn read_json_object(
    provider: &str,
    response: Response,
) -> Result<Map<String, Value>, ResolutionError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        warn!("{} response error: {} {}", provider, status, body);
        return Err(ResolutionError::UpstreamRejected {
            provider: provider.to_string(),
            status: status.as_u16(),
            body,
        });
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_ascii_lowercase);

    let body = response
        .text()
        .await
        .map_err(|e| unreachable(provider, e))?;

    if let Some(content_type) = content_type {
        if !content_type.contains("json") {
            debug!(
                "{} returned unexpected content type {}: {}",
                provider,
                content_type,
                excerpt(&body)
            );
            return Err(ResolutionError::UpstreamMalformed {
                provider: provider.to_string(),
                message: format!("unexpected content type {}", content_type),
            });
        }
    }

    let value: Value =
        serde_json::from_str(&body).map_err(|e| ResolutionError::UpstreamMalformed {
            provider: provider.to_string(),
            message: format!("invalid JSON: {}", e),
        })?;

    debug!("{} data received: {}", provider, value);

    match value {
        Value::Object(object) => Ok(object),
        other => Err(ResolutionError::UpstreamMalformed {
            provider: provider.to_string(),
            message: format!("expected a JSON object, got {}", json_kind(&other)),
        }),
    }
}

fn excerpt(body: &str) -> &str {
    match body.char_indices().nth(BODY_EXCERPT_LEN) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
