pub mod error;
pub mod events;
pub mod http;
pub mod metrics;
pub mod request;
mod request_executor;
pub mod response;
mod runner;
mod types;

pub use error::ExecutorError;
pub use events::{
    CompositeEventSink, Event, EventSink, NoOpEventSink, RunStatus, StderrEventSink,
    StdoutEventSink, TracingEventSink,
};
pub use http::{HttpClient, HttpRequestParts, HttpResponseParts, ReqwestHttpClient, TransportError};
pub use metrics::{MetricsCollector, MetricsEventSink, RunMetrics};
pub use request_executor::RequestExecutor;
pub use runner::WorkflowRunner;
pub use types::ExecutorConfig;
