use std::sync::Arc;

use reqchain_exec::executor::{
    Event, EventSink, MetricsCollector, MetricsEventSink, NoOpEventSink, RunMetrics, RunStatus,
};
use uuid::Uuid;

#[test]
fn run_metrics_start_resets_counters() {
    let mut metrics = RunMetrics::default();
    metrics.record_step_success();
    metrics.start(Uuid::new_v4(), 3);
    assert_eq!(metrics.steps_planned, 3);
    assert_eq!(metrics.steps_succeeded, 0);
    assert!(metrics.started_at.is_some());
    assert_eq!(metrics.status, "running");
}

#[test]
fn run_metrics_counts_skipped_steps() {
    let mut metrics = RunMetrics::default();
    metrics.start(Uuid::new_v4(), 4);
    metrics.record_step_success();
    metrics.record_step_failure();
    assert_eq!(metrics.steps_skipped(), 2);
}

#[test]
fn run_metrics_finish() {
    let mut metrics = RunMetrics::default();
    metrics.start(Uuid::new_v4(), 1);
    std::thread::sleep(std::time::Duration::from_millis(10));
    metrics.finish(RunStatus::Succeeded);
    assert_eq!(metrics.status, "succeeded");
    assert!(metrics.finished_at.is_some());
    assert!(metrics.total_duration.is_some());
}

#[tokio::test]
async fn metrics_sink_records_run() {
    let collector = Arc::new(MetricsCollector::new());
    let sink = MetricsEventSink::new(collector.clone(), Arc::new(NoOpEventSink));
    let run_id = Uuid::new_v4();

    sink.emit(Event::RunStarted { run_id, total_steps: 3 }).await;
    sink.emit(Event::StepSucceeded { run_id, index: 0, step_id: 1 }).await;
    sink.emit(Event::StepFailed {
        run_id,
        index: 1,
        step_id: 2,
        error: "boom".to_string(),
    })
    .await;
    sink.emit(Event::RunFinished {
        run_id,
        status: RunStatus::Failed,
    })
    .await;

    let metrics = collector.get_metrics().await;
    assert_eq!(metrics.run_id, Some(run_id));
    assert_eq!(metrics.steps_succeeded, 1);
    assert_eq!(metrics.steps_failed, 1);
    assert_eq!(metrics.steps_skipped(), 1);

    let json = metrics.to_json();
    assert_eq!(json["status"], "failed");
    assert_eq!(json["steps"]["planned"], 3);
    assert_eq!(json["steps"]["skipped"], 1);
}
