use async_trait::async_trait;
use reqchain_core::HttpMethod;
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Succeeded,
    Failed,
}

impl RunStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunStatus::Succeeded => "succeeded",
            RunStatus::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Event {
    RunStarted {
        run_id: Uuid,
        total_steps: usize,
    },
    RunFinished {
        run_id: Uuid,
        status: RunStatus,
    },
    StepStarted {
        run_id: Uuid,
        index: usize,
        step_id: u32,
        method: HttpMethod,
        url: String,
    },
    StepSucceeded {
        run_id: Uuid,
        index: usize,
        step_id: u32,
    },
    StepFailed {
        run_id: Uuid,
        index: usize,
        step_id: u32,
        error: String,
    },
}

impl Event {
    pub fn run_id(&self) -> Uuid {
        match self {
            Event::RunStarted { run_id, .. }
            | Event::RunFinished { run_id, .. }
            | Event::StepStarted { run_id, .. }
            | Event::StepSucceeded { run_id, .. }
            | Event::StepFailed { run_id, .. } => *run_id,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Event::RunStarted { run_id, total_steps } => {
                json!({ "type": "run.started", "run_id": run_id.to_string(), "total_steps": total_steps })
            }
            Event::RunFinished { run_id, status } => {
                json!({ "type": "run.finished", "run_id": run_id.to_string(), "status": status.as_str() })
            }
            Event::StepStarted { run_id, index, step_id, method, url } => {
                json!({ "type": "step.started", "run_id": run_id.to_string(), "index": index, "step_id": step_id, "method": method.as_str(), "url": url })
            }
            Event::StepSucceeded { run_id, index, step_id } => {
                json!({ "type": "step.succeeded", "run_id": run_id.to_string(), "index": index, "step_id": step_id })
            }
            Event::StepFailed { run_id, index, step_id, error } => {
                json!({ "type": "step.failed", "run_id": run_id.to_string(), "index": index, "step_id": step_id, "error": error })
            }
        }
    }
}

#[async_trait]
pub trait EventSink: Send + Sync {
    async fn emit(&self, event: Event);
}

pub struct CompositeEventSink {
    sinks: Vec<Box<dyn EventSink>>,
}

impl Default for CompositeEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl CompositeEventSink {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn add(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    pub fn with(mut self, sink: Box<dyn EventSink>) -> Self {
        self.add(sink);
        self
    }
}

#[async_trait]
impl EventSink for CompositeEventSink {
    async fn emit(&self, event: Event) {
        for sink in &self.sinks {
            sink.emit(event.clone()).await;
        }
    }
}

fn timestamped_line(event: &Event) -> String {
    let mut json = event.to_json();
    if let Some(obj) = json.as_object_mut() {
        obj.insert("ts".to_string(), json!(chrono::Utc::now().to_rfc3339()));
    }
    serde_json::to_string(&json).unwrap_or_default()
}

/// One JSON object per line on stdout, timestamped.
pub struct StdoutEventSink;

#[async_trait]
impl EventSink for StdoutEventSink {
    async fn emit(&self, event: Event) {
        println!("{}", timestamped_line(&event));
    }
}

/// Same lines as [`StdoutEventSink`], written to stderr.
pub struct StderrEventSink;

#[async_trait]
impl EventSink for StderrEventSink {
    async fn emit(&self, event: Event) {
        eprintln!("{}", timestamped_line(&event));
    }
}

/// Forwards events to the `tracing` subscriber.
pub struct TracingEventSink;

#[async_trait]
impl EventSink for TracingEventSink {
    async fn emit(&self, event: Event) {
        match event {
            Event::RunStarted { run_id, total_steps } => {
                info!(%run_id, total_steps, "run started");
            }
            Event::RunFinished { run_id, status } => {
                info!(%run_id, status = status.as_str(), "run finished");
            }
            Event::StepStarted { run_id, index, step_id, method, url } => {
                info!(%run_id, index, step_id, %method, url = %url, "step started");
            }
            Event::StepSucceeded { run_id, index, step_id } => {
                info!(%run_id, index, step_id, "step succeeded");
            }
            Event::StepFailed { run_id, index, step_id, error } => {
                warn!(%run_id, index, step_id, error = %error, "step failed");
            }
        }
    }
}

pub struct NoOpEventSink;

#[async_trait]
impl EventSink for NoOpEventSink {
    async fn emit(&self, _event: Event) {}
}
