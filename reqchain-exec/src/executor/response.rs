use serde_json::Value as JsonValue;

use crate::executor::error::ExecutorError;
use crate::executor::http::HttpResponseParts;

/// `application/json` or any `+json` structured syntax suffix.
pub fn is_json_content_type(resp: &HttpResponseParts) -> bool {
    let Some(ct) = resp.header("content-type") else {
        return false;
    };
    let media = ct.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
    media == "application/json" || media.ends_with("+json")
}

/// Message for a non-success response: the JSON `message` field, else the status text.
///
/// A falsy `message` (`null`, `false`, `0`, `""`) counts as missing.
pub fn error_message(resp: &HttpResponseParts) -> String {
    let fallback = || format!("Error: {}", resp.status);
    match serde_json::from_slice::<JsonValue>(&resp.body) {
        Ok(v) => match v.get("message") {
            None | Some(JsonValue::Null) | Some(JsonValue::Bool(false)) => fallback(),
            Some(JsonValue::String(s)) if s.is_empty() => fallback(),
            Some(JsonValue::Number(n)) if n.as_f64() == Some(0.0) => fallback(),
            Some(JsonValue::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        },
        Err(_) => resp
            .reason
            .clone()
            .filter(|r| !r.is_empty())
            .unwrap_or_else(fallback),
    }
}

/// Value for a successful response. Non-JSON and empty bodies become `{}`.
pub fn decode_success(resp: &HttpResponseParts) -> Result<JsonValue, ExecutorError> {
    if !is_json_content_type(resp) || resp.body.iter().all(u8::is_ascii_whitespace) {
        return Ok(JsonValue::Object(serde_json::Map::new()));
    }
    serde_json::from_slice(&resp.body)
        .map_err(|e| ExecutorError::NetworkError(format!("invalid JSON in response body: {e}")))
}
