use crate::executor::events::{Event, EventSink, RunStatus};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

#[derive(Debug, Clone, Default)]
pub struct RunMetrics {
    pub run_id: Option<uuid::Uuid>,
    pub status: String,
    pub started_at: Option<Instant>,
    pub finished_at: Option<Instant>,
    pub total_duration: Option<Duration>,
    pub steps_planned: usize,
    pub steps_succeeded: usize,
    pub steps_failed: usize,
}

impl RunMetrics {
    pub fn start(&mut self, run_id: uuid::Uuid, steps_planned: usize) {
        *self = Self {
            run_id: Some(run_id),
            status: "running".to_string(),
            started_at: Some(Instant::now()),
            steps_planned,
            ..Default::default()
        };
    }

    pub fn record_step_success(&mut self) {
        self.steps_succeeded += 1;
    }

    pub fn record_step_failure(&mut self) {
        self.steps_failed += 1;
    }

    /// Steps that never ran because an earlier one failed.
    pub fn steps_skipped(&self) -> usize {
        self.steps_planned
            .saturating_sub(self.steps_succeeded + self.steps_failed)
    }

    pub fn finish(&mut self, status: RunStatus) {
        self.status = status.as_str().to_string();
        self.finished_at = Some(Instant::now());
        if let (Some(started), Some(finished)) = (self.started_at, self.finished_at) {
            self.total_duration = Some(finished.duration_since(started));
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "run_id": self.run_id.map(|id| id.to_string()),
            "status": self.status,
            "duration_ms": self.total_duration.map(|d| d.as_millis() as u64),
            "steps": {
                "planned": self.steps_planned,
                "succeeded": self.steps_succeeded,
                "failed": self.steps_failed,
                "skipped": self.steps_skipped(),
            },
        })
    }
}

#[derive(Default)]
pub struct MetricsCollector {
    metrics: Arc<Mutex<RunMetrics>>,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get_metrics(&self) -> RunMetrics {
        self.metrics.lock().await.clone()
    }

    async fn record(&self, event: &Event) {
        let mut m = self.metrics.lock().await;
        match event {
            Event::RunStarted { run_id, total_steps } => m.start(*run_id, *total_steps),
            Event::StepStarted { .. } => {}
            Event::StepSucceeded { .. } => m.record_step_success(),
            Event::StepFailed { .. } => m.record_step_failure(),
            Event::RunFinished { status, .. } => m.finish(*status),
        }
    }
}

pub struct MetricsEventSink {
    collector: Arc<MetricsCollector>,
    base: Arc<dyn EventSink>,
}

impl MetricsEventSink {
    pub fn new(collector: Arc<MetricsCollector>, base: Arc<dyn EventSink>) -> Self {
        Self { collector, base }
    }
}

#[async_trait]
impl EventSink for MetricsEventSink {
    async fn emit(&self, event: Event) {
        self.collector.record(&event).await;
        self.base.emit(event).await;
    }
}
