use std::path::Path;
use std::time::Duration;

use reqchain_core::{
    parse_document_str, DocumentFormat, HttpMethod, PresetCatalog, RequestDescriptor, StepList,
};
use reqchain_exec::executor::{
    EventSink, NoOpEventSink, StderrEventSink, StdoutEventSink, TracingEventSink,
};
use reqchain_exec::ExecutorConfig;

use crate::output::OutputFormat;
use crate::{EventsMode, ExecArgs};

#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Io(String),
    /// The file or a `--step` flag is malformed.
    Invalid(String),
}

/// Steps from the file followed by `--step` flags; the default list when both are absent.
pub fn load_steps(
    path: Option<&Path>,
    step_args: &[String],
    presets: &PresetCatalog,
) -> Result<Vec<RequestDescriptor>, LoadError> {
    let mut steps = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .map_err(|e| LoadError::Io(format!("failed to read {}: {e}", path.display())))?;
            parse_document_str(&content, DocumentFormat::Auto)
                .map_err(|e| LoadError::Invalid(e.to_string()))?
                .document
                .descriptors()
        }
        None => Vec::new(),
    };

    for raw in step_args {
        let id = steps
            .iter()
            .map(|s| s.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| LoadError::Invalid(format!("step id overflow for --step {raw:?}")))?;
        let step = parse_step_arg(id, raw, presets).map_err(LoadError::Invalid)?;
        steps.push(step);
    }

    if path.is_none() && steps.is_empty() {
        return Ok(StepList::new(presets).into());
    }
    Ok(steps)
}

/// Parse `"<METHOD> <URL> [BODY]"` or a bare `"<URL>"` (GET).
pub fn parse_step_arg(
    id: u32,
    raw: &str,
    presets: &PresetCatalog,
) -> Result<RequestDescriptor, String> {
    let (first, rest) = split_word(raw.trim());
    if first.is_empty() {
        return Err("empty --step value".to_string());
    }

    let (method, url, body) = match first.parse::<HttpMethod>() {
        Ok(method) => {
            let (url, body) = split_word(rest);
            if url.is_empty() {
                return Err(format!("missing URL in --step {raw:?}"));
            }
            (method, url, body)
        }
        Err(e) if !rest.is_empty() => return Err(format!("{e} in --step {raw:?}")),
        Err(_) => (HttpMethod::Get, first, ""),
    };

    let mut step = RequestDescriptor::new(id, url, method).with_custom_url(!presets.contains(url));
    step.body = body.to_string();
    Ok(step)
}

fn split_word(s: &str) -> (&str, &str) {
    match s.find(char::is_whitespace) {
        Some(i) => (&s[..i], s[i..].trim_start()),
        None => (s, ""),
    }
}

pub fn build_executor_config(exec: &ExecArgs) -> ExecutorConfig {
    ExecutorConfig {
        timeout: exec.timeout.map(Duration::from_millis),
        ..Default::default()
    }
}

/// Event lines move to stderr when stdout carries the JSON result document.
pub fn build_event_sink(mode: EventsMode, format: OutputFormat) -> Box<dyn EventSink> {
    match (mode, format) {
        (EventsMode::None, _) => Box::new(NoOpEventSink),
        (EventsMode::Stdout, OutputFormat::Json) => Box::new(StderrEventSink),
        (EventsMode::Stdout, OutputFormat::Text) => Box::new(StdoutEventSink),
        (EventsMode::Log, _) => Box::new(TracingEventSink),
    }
}
