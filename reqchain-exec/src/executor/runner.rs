use std::sync::Arc;

use reqchain_core::{RequestDescriptor, WorkflowResult};
use serde_json::Value as JsonValue;
use tracing::warn;
use uuid::Uuid;

use crate::executor::error::ExecutorError;
use crate::executor::events::{Event, EventSink, RunStatus};
use crate::executor::request::parse_body;
use crate::executor::request_executor::RequestExecutor;

/// Runs steps strictly in order and stops at the first failure.
pub struct WorkflowRunner {
    executor: RequestExecutor,
    event_sink: Arc<dyn EventSink>,
}

impl WorkflowRunner {
    pub fn new(executor: RequestExecutor, event_sink: Arc<dyn EventSink>) -> Self {
        Self {
            executor,
            event_sink,
        }
    }

    pub fn executor(&self) -> &RequestExecutor {
        &self.executor
    }

    pub async fn run(&self, steps: &[RequestDescriptor]) -> WorkflowResult {
        self.run_with_id(Uuid::new_v4(), steps).await
    }

    pub async fn run_with_id(&self, run_id: Uuid, steps: &[RequestDescriptor]) -> WorkflowResult {
        self.event_sink
            .emit(Event::RunStarted {
                run_id,
                total_steps: steps.len(),
            })
            .await;

        let mut result = WorkflowResult::with_capacity(steps.len());
        for (index, step) in steps.iter().enumerate() {
            self.event_sink
                .emit(Event::StepStarted {
                    run_id,
                    index,
                    step_id: step.id,
                    method: step.method,
                    url: step.url.clone(),
                })
                .await;

            match self.run_step(step).await {
                Ok(value) => {
                    result.record_success(value);
                    self.event_sink
                        .emit(Event::StepSucceeded {
                            run_id,
                            index,
                            step_id: step.id,
                        })
                        .await;
                }
                Err(e) => {
                    let message = e.to_string();
                    warn!(%run_id, index, step_id = step.id, error = %message, "aborting run");
                    result.record_failure(message.clone());
                    self.event_sink
                        .emit(Event::StepFailed {
                            run_id,
                            index,
                            step_id: step.id,
                            error: message,
                        })
                        .await;
                    break;
                }
            }
        }
        result.pad_to(steps.len());

        let status = if result.is_success() {
            RunStatus::Succeeded
        } else {
            RunStatus::Failed
        };
        self.event_sink
            .emit(Event::RunFinished { run_id, status })
            .await;

        result
    }

    async fn run_step(&self, step: &RequestDescriptor) -> Result<JsonValue, ExecutorError> {
        let payload = parse_body(step)?;
        self.executor
            .execute(&step.url, step.method, payload.as_ref())
            .await
    }
}
