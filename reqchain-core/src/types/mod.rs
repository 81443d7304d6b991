mod descriptor;
mod document;
mod method;
mod result;

pub use descriptor::RequestDescriptor;
pub use document::{StepEntry, WorkflowDocument};
pub use method::{HttpMethod, UnknownMethod};
pub use result::WorkflowResult;
