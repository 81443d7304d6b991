use crate::executor::http::TransportError;

/// Why a step failed. `Display` is the message surfaced as the run's terminal error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecutorError {
    #[error("invalid request body: {0}")]
    BadRequestBody(String),
    /// Non-success status; carries the server's `message` or the status text.
    #[error("{0}")]
    HttpError(String),
    #[error("{0}")]
    NetworkError(String),
}

impl From<TransportError> for ExecutorError {
    fn from(e: TransportError) -> Self {
        ExecutorError::NetworkError(e.to_string())
    }
}
