use crate::types::WorkflowDocument;
use crate::validate::rules::step;
use crate::validate::validator::{Validator, NAME_RE};

pub(crate) fn validate_document(v: &mut Validator, doc: &WorkflowDocument) {
    if let Some(name) = &doc.name {
        if !NAME_RE.is_match(name) {
            v.push("$.name", "must match regex [A-Za-z0-9_\\-]+");
        }
    }

    if doc.steps.is_empty() {
        v.push("$.steps", "must have at least one entry");
    }

    for (idx, entry) in doc.steps.iter().enumerate() {
        let path = format!("$.steps[{idx}]");
        v.claim_step_id(&path, entry.id.unwrap_or(idx as u32 + 1));
        step::validate_step(v, entry, &path);
    }
}
