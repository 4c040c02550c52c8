use crate::error::DeployError;
use crate::services::transport::{HttpRequest, HttpResponse};
use serde_json::Value;

/// Fails fast on any non-2xx status the executor handed back.
pub fn ensure_accepted(request: &HttpRequest, response: &HttpResponse) -> Result<(), DeployError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    Err(DeployError::Rejected {
        method: request.method,
        url: request.url.clone(),
        status: response.status,
        body: response.body_text(),
    })
}

/// Empty bodies read as `{}`; anything else must be JSON.
pub fn parse_body(url: &str, body: &[u8]) -> Result<Value, DeployError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Default::default()));
    }
    serde_json::from_slice(body).map_err(|e| DeployError::MalformedResponse {
        url: url.to_string(),
        reason: format!("body is not valid JSON: {}", e),
    })
}

/// First field, in priority order, holding a non-empty string.
pub fn first_string(value: &Value, fields: &[&str]) -> Option<String> {
    fields
        .iter()
        .filter_map(|f| value.get(*f).and_then(Value::as_str))
        .find(|s| !s.is_empty())
        .map(str::to_string)
}
