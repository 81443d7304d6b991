#![forbid(unsafe_code)]

//! Step model, preset catalog, step files and validation for request chains.

pub mod error;
pub mod parser;
pub mod presets;
pub mod state;
pub mod steps;
pub mod types;
pub mod validate;

pub use crate::error::{EditError, ParseError, ValidationError, Violation};
pub use crate::parser::{parse_document_str, render_document, DocumentFormat, ParsedDocument};
pub use crate::presets::{PresetCatalog, PresetSelection, DEFAULT_PRESETS};
pub use crate::state::RunState;
pub use crate::steps::StepList;
pub use crate::types::{HttpMethod, RequestDescriptor, WorkflowDocument, WorkflowResult};
pub use crate::validate::{validate_document, Validate};
