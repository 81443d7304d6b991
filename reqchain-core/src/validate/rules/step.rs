use crate::types::{HttpMethod, StepEntry};
use crate::validate::validator::Validator;

pub(crate) fn validate_step(v: &mut Validator, step: &StepEntry, path: &str) {
    let url_path = format!("{path}.url");
    let url = step.url.trim();
    if url.is_empty() {
        v.push(url_path, "must not be empty");
    } else {
        match url::Url::parse(url) {
            Ok(u) if matches!(u.scheme(), "http" | "https") => {}
            Ok(u) => v.push(url_path, format!("unsupported scheme: {}", u.scheme())),
            Err(e) => v.push(url_path, format!("invalid URL: {e}")),
        }
    }

    // GET bodies are never sent, so only POST bodies need to parse.
    if step.method == HttpMethod::Post {
        let body = step.body.trim();
        if !body.is_empty() {
            if let Err(e) = serde_json::from_str::<serde_json::Value>(body) {
                v.push(format!("{path}.body"), format!("must be valid JSON: {e}"));
            }
        }
    }
}
