use std::fmt;

/// Lifecycle of a single run as seen by whoever triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    Running {
        step: usize,
    },
    Succeeded,
    Failed {
        error: String,
    },
}

impl RunState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RunState::Running { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RunState::Failed { error } => Some(error),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RunState::Idle => "idle",
            RunState::Running { .. } => "running",
            RunState::Succeeded => "succeeded",
            RunState::Failed { .. } => "failed",
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunState::Running { step } => write!(f, "running (step {})", step + 1),
            RunState::Failed { error } => write!(f, "failed: {error}"),
            other => f.write_str(other.as_str()),
        }
    }
}
