use std::path::Path;
use std::sync::Arc;

use reqchain_core::PresetCatalog;
use reqchain_exec::executor::{
    CompositeEventSink, MetricsCollector, MetricsEventSink, ReqwestHttpClient,
};
use reqchain_exec::{RequestExecutor, Session};
use serde::Serialize;
use tracing::debug;

use crate::exit_codes;
use crate::output::{is_text, print_error, print_result, print_step_value};
use crate::{ExecArgs, OutputArgs};

use super::config::{build_event_sink, build_executor_config, load_steps, LoadError};
use super::progress::ProgressEventSink;

#[derive(Serialize)]
struct RunOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    run_id: Option<String>,
    status: String,
    /// Values of the steps that succeeded, in order.
    results: Vec<serde_json::Value>,
    /// One slot per step; `null` for the failing step and everything after it.
    outcomes: Vec<Option<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    metrics: serde_json::Value,
}

pub async fn run_cmd(path: Option<&Path>, step_args: &[String], output: OutputArgs, exec: ExecArgs) -> i32 {
    let presets = PresetCatalog::default();
    let steps = match load_steps(path, step_args, &presets) {
        Ok(s) => s,
        Err(LoadError::Io(msg)) => {
            print_error(output.format, output.quiet, &msg);
            return exit_codes::RUNTIME_ERROR;
        }
        Err(LoadError::Invalid(msg)) => {
            print_error(output.format, output.quiet, &msg);
            return exit_codes::VALIDATION_FAILED;
        }
    };

    debug!(steps = steps.len(), "loaded steps");

    let config = build_executor_config(&exec);
    let http = match ReqwestHttpClient::new(&config) {
        Ok(c) => Arc::new(c),
        Err(e) => {
            print_error(output.format, output.quiet, &e.to_string());
            return exit_codes::RUNTIME_ERROR;
        }
    };

    let mut sink = CompositeEventSink::new();
    if is_text(output.format, output.quiet) {
        sink.add(Box::new(ProgressEventSink::new(steps.len())));
    }
    sink.add(build_event_sink(exec.events, output.format));
    let collector = Arc::new(MetricsCollector::new());

    let session = Session::new(
        presets,
        RequestExecutor::new(http, config),
        Box::new(MetricsEventSink::new(collector.clone(), Arc::new(sink))),
    )
    .with_steps(steps.clone());

    let result = match session.execute().await {
        Ok(r) => r,
        Err(e) => {
            print_error(output.format, output.quiet, &e.to_string());
            return exit_codes::RUNTIME_ERROR;
        }
    };
    let metrics = collector.get_metrics().await;

    if is_text(output.format, output.quiet) {
        for (step, outcome) in steps.iter().zip(&result.outcomes) {
            if let Some(value) = outcome {
                print_step_value(step, value);
            }
        }
    } else {
        let out = RunOutput {
            run_id: metrics.run_id.map(|id| id.to_string()),
            status: session.state().as_str().to_string(),
            results: result.results().into_iter().cloned().collect(),
            outcomes: result.outcomes.clone(),
            error: result.error.clone(),
            metrics: metrics.to_json(),
        };
        print_result(output.format, output.quiet, &out);
    }

    if let Some(error) = &result.error {
        print_error(output.format, output.quiet, error);
    }
    exit_codes::for_run(&result)
}
