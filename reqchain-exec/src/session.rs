//! Per-dashboard state: the editable step list, the run state machine and the
//! last result. One `Session` per open dashboard; nothing is process-global.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use reqchain_core::{
    EditError, HttpMethod, PresetCatalog, RequestDescriptor, RunState, StepList, WorkflowResult,
};

use crate::executor::{CompositeEventSink, Event, EventSink, RequestExecutor, WorkflowRunner};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("a run is already in progress")]
    RunInProgress,
}

#[derive(Debug, Default)]
struct RunSlot {
    state: RunState,
    last: Option<WorkflowResult>,
}

pub struct Session {
    presets: PresetCatalog,
    steps: Mutex<StepList>,
    slot: Arc<Mutex<RunSlot>>,
    runner: WorkflowRunner,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Moves `Running { step }` forward as the runner reports progress.
struct ProgressTracker {
    slot: Arc<Mutex<RunSlot>>,
}

#[async_trait]
impl EventSink for ProgressTracker {
    async fn emit(&self, event: Event) {
        if let Event::StepStarted { index, .. } = event {
            let mut slot = lock(&self.slot);
            if slot.state.is_loading() {
                slot.state = RunState::Running { step: index };
            }
        }
    }
}

/// Marks the slot failed if an `execute` future is dropped before the run finishes.
struct RunGuard {
    slot: Arc<Mutex<RunSlot>>,
    armed: bool,
}

impl RunGuard {
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for RunGuard {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut slot = lock(&self.slot);
        if slot.state.is_loading() {
            slot.state = RunState::Failed {
                error: "run cancelled".to_string(),
            };
        }
    }
}

impl Session {
    pub fn new(
        presets: PresetCatalog,
        executor: RequestExecutor,
        event_sink: Box<dyn EventSink>,
    ) -> Self {
        let slot = Arc::new(Mutex::new(RunSlot::default()));
        let sink = CompositeEventSink::new()
            .with(Box::new(ProgressTracker { slot: slot.clone() }))
            .with(event_sink);
        Self {
            steps: Mutex::new(StepList::new(&presets)),
            presets,
            slot,
            runner: WorkflowRunner::new(executor, Arc::new(sink)),
        }
    }

    pub fn with_steps(self, steps: Vec<RequestDescriptor>) -> Self {
        *lock(&self.steps) = StepList::from_descriptors(steps);
        self
    }

    pub fn presets(&self) -> &PresetCatalog {
        &self.presets
    }

    pub fn steps(&self) -> Vec<RequestDescriptor> {
        lock(&self.steps).as_slice().to_vec()
    }

    pub fn add_step(&self) -> usize {
        lock(&self.steps).add()
    }

    pub fn set_url(&self, index: usize, url: impl Into<String>) -> Result<(), EditError> {
        lock(&self.steps).set_url(index, url)
    }

    pub fn set_method(&self, index: usize, method: HttpMethod) -> Result<(), EditError> {
        lock(&self.steps).set_method(index, method)
    }

    pub fn set_body(&self, index: usize, body: impl Into<String>) -> Result<(), EditError> {
        lock(&self.steps).set_body(index, body)
    }

    pub fn select_preset(&self, index: usize, value: &str) -> Result<(), EditError> {
        lock(&self.steps).select_preset(&self.presets, index, value)
    }

    pub fn set_custom_url(&self, index: usize, custom: bool) -> Result<(), EditError> {
        lock(&self.steps).set_custom_url(index, custom)
    }

    pub fn state(&self) -> RunState {
        lock(&self.slot).state.clone()
    }

    pub fn is_loading(&self) -> bool {
        lock(&self.slot).state.is_loading()
    }

    pub fn error(&self) -> Option<String> {
        lock(&self.slot).state.error().map(String::from)
    }

    /// Successful values of the last finished run.
    pub fn results(&self) -> Vec<serde_json::Value> {
        lock(&self.slot)
            .last
            .as_ref()
            .map(|r| r.results().into_iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn last_result(&self) -> Option<WorkflowResult> {
        lock(&self.slot).last.clone()
    }

    /// Run the current steps. Rejected while another run is in flight.
    ///
    /// The step list is snapshotted up front; edits made during the run apply to the next one.
    /// Dropping the returned future mid-run leaves the session `Failed` with "run cancelled".
    pub async fn execute(&self) -> Result<WorkflowResult, SessionError> {
        {
            let mut slot = lock(&self.slot);
            if slot.state.is_loading() {
                return Err(SessionError::RunInProgress);
            }
            slot.state = RunState::Running { step: 0 };
            slot.last = None;
        }

        let guard = RunGuard {
            slot: self.slot.clone(),
            armed: true,
        };

        let snapshot = self.steps();
        let result = self.runner.run(&snapshot).await;

        {
            let mut slot = lock(&self.slot);
            slot.state = match &result.error {
                Some(error) => RunState::Failed {
                    error: error.clone(),
                },
                None => RunState::Succeeded,
            };
            slot.last = Some(result.clone());
        }
        guard.disarm();
        Ok(result)
    }
}
