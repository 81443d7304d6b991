#![forbid(unsafe_code)]

//! Runtime for sequential HTTP request chains.
//!
//! Step files, presets and validation live in `reqchain-core`.

pub mod executor;
pub mod session;

pub use crate::executor::{ExecutorConfig, ExecutorError, RequestExecutor, WorkflowRunner};
pub use crate::session::{Session, SessionError};
