use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: concat!("reqchain/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
