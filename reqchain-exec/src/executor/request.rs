use std::collections::BTreeMap;

use reqchain_core::{HttpMethod, RequestDescriptor};
use serde_json::Value as JsonValue;

use crate::executor::error::ExecutorError;
use crate::executor::http::HttpRequestParts;

pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Parse a step's body into the payload handed to the executor.
///
/// GET steps and blank POST bodies yield `None`.
pub fn parse_body(step: &RequestDescriptor) -> Result<Option<JsonValue>, ExecutorError> {
    let Some(text) = step.payload_text() else {
        return Ok(None);
    };
    serde_json::from_str(text)
        .map(Some)
        .map_err(|e| ExecutorError::BadRequestBody(e.to_string()))
}

pub fn build_request(
    url: &str,
    method: HttpMethod,
    payload: Option<&JsonValue>,
) -> Result<HttpRequestParts, ExecutorError> {
    let mut headers = BTreeMap::new();
    headers.insert("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string());

    // `null` and `false` payloads count as absent.
    let body = match (method, payload) {
        (HttpMethod::Post, Some(v)) if !matches!(v, JsonValue::Null | JsonValue::Bool(false)) => Some(
            serde_json::to_vec(v)
                .map_err(|e| ExecutorError::NetworkError(format!("failed to serialize request body: {e}")))?,
        ),
        _ => None,
    };

    Ok(HttpRequestParts {
        method,
        url: url.to_string(),
        headers,
        body,
    })
}
