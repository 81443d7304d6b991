use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ValidationError, Violation};
use crate::types::WorkflowDocument;

use super::rules;

pub(crate) static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_\-]+$").expect("valid"));

/// Collects violations while walking a document.
pub struct Validator {
    violations: Vec<Violation>,
    step_ids: HashSet<u32>,
}

impl Validator {
    pub fn new() -> Self {
        Self {
            violations: Vec::new(),
            step_ids: HashSet::new(),
        }
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(self.violations))
        }
    }

    pub fn validate_document(&mut self, doc: &WorkflowDocument) {
        rules::document::validate_document(self, doc);
    }

    /// Record a step id; ids must be positive and unique within the document.
    pub(crate) fn claim_step_id(&mut self, path: &str, id: u32) {
        if id == 0 {
            self.push(format!("{path}.id"), "must be a positive integer");
        } else if !self.step_ids.insert(id) {
            self.push(format!("{path}.id"), format!("duplicate step id {id}"));
        }
    }

    pub(crate) fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.violations.push(Violation::new(path, message));
    }
}
