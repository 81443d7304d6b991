use async_trait::async_trait;
use reqchain_exec::executor::{Event, EventSink};

/// Step-by-step progress on stderr.
pub struct ProgressEventSink {
    total_steps: usize,
}

impl ProgressEventSink {
    pub fn new(total_steps: usize) -> Self {
        Self { total_steps }
    }
}

#[async_trait]
impl EventSink for ProgressEventSink {
    async fn emit(&self, event: Event) {
        match event {
            Event::StepStarted {
                index, method, url, ..
            } => {
                eprint!("[{}/{}] {} {} ... ", index + 1, self.total_steps, method, url);
            }
            Event::StepSucceeded { .. } => eprintln!("ok"),
            Event::StepFailed { .. } => eprintln!("failed"),
            _ => {}
        }
    }
}
