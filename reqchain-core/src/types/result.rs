use serde_json::Value as JsonValue;

/// Accumulated output of one run.
///
/// `outcomes` holds one slot per descriptor: `Some` for a step that returned a value,
/// `None` for the failing step and every step after it.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WorkflowResult {
    pub outcomes: Vec<Option<JsonValue>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl WorkflowResult {
    pub fn with_capacity(steps: usize) -> Self {
        Self {
            outcomes: Vec::with_capacity(steps),
            error: None,
        }
    }

    pub fn record_success(&mut self, value: JsonValue) {
        self.outcomes.push(Some(value));
    }

    pub fn record_failure(&mut self, message: impl Into<String>) {
        self.outcomes.push(None);
        self.error = Some(message.into());
    }

    /// Fill the remaining slots for steps that never ran.
    pub fn pad_to(&mut self, steps: usize) {
        while self.outcomes.len() < steps {
            self.outcomes.push(None);
        }
    }

    /// Successful values in step order.
    pub fn results(&self) -> Vec<&JsonValue> {
        self.outcomes.iter().flatten().collect()
    }

    pub fn completed_steps(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_some()).count()
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}
