use std::sync::Arc;

use reqchain_core::HttpMethod;
use serde_json::Value as JsonValue;
use tracing::{debug, error};

use crate::executor::error::ExecutorError;
use crate::executor::http::HttpClient;
use crate::executor::request::build_request;
use crate::executor::response::{decode_success, error_message};
use crate::executor::types::ExecutorConfig;

/// Performs one HTTP call and normalizes the outcome.
pub struct RequestExecutor {
    http: Arc<dyn HttpClient>,
    config: ExecutorConfig,
}

impl RequestExecutor {
    pub fn new(http: Arc<dyn HttpClient>, config: ExecutorConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    pub async fn execute(
        &self,
        url: &str,
        method: HttpMethod,
        payload: Option<&JsonValue>,
    ) -> Result<JsonValue, ExecutorError> {
        let req = build_request(url, method, payload)?;
        debug!(%method, url, has_body = req.body.is_some(), "sending request");

        let resp = match self.http.send(req, self.config.timeout).await {
            Ok(r) => r,
            Err(e) => {
                error!(%method, url, error = %e, "request failed");
                return Err(e.into());
            }
        };

        if !resp.is_success() {
            let message = error_message(&resp);
            error!(%method, url, status = resp.status, message = %message, "request returned error status");
            return Err(ExecutorError::HttpError(message));
        }

        debug!(%method, url, status = resp.status, bytes = resp.body.len(), "response received");
        decode_success(&resp).inspect_err(|e| {
            error!(%method, url, error = %e, "failed to decode response body");
        })
    }
}
