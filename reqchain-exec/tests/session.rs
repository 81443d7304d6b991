use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqchain_core::{HttpMethod, PresetCatalog, RequestDescriptor, RunState, DEFAULT_PRESETS};
use reqchain_exec::executor::{
    ExecutorConfig, HttpClient, HttpRequestParts, HttpResponseParts, NoOpEventSink, TransportError,
};
use reqchain_exec::{RequestExecutor, Session, SessionError};
use serde_json::json;

// Answers every request with `{"url": <url>}` after a short delay.
struct EchoClient {
    delay: Duration,
    calls: AtomicUsize,
}

impl EchoClient {
    fn new(delay: Duration) -> Self {
        Self {
            delay,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl HttpClient for EchoClient {
    async fn send(
        &self,
        req: HttpRequestParts,
        _timeout: Option<Duration>,
    ) -> Result<HttpResponseParts, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        if req.url.ends_with("/fail") {
            return Ok(HttpResponseParts {
                status: 400,
                reason: Some("Bad Request".to_string()),
                headers: BTreeMap::new(),
                body: b"nope".to_vec(),
            });
        }
        let mut headers = BTreeMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        Ok(HttpResponseParts {
            status: 200,
            reason: Some("OK".to_string()),
            headers,
            body: serde_json::to_vec(&json!({ "url": req.url })).unwrap(),
        })
    }
}

fn session(client: Arc<EchoClient>) -> Session {
    Session::new(
        PresetCatalog::default(),
        RequestExecutor::new(client, ExecutorConfig::default()),
        Box::new(NoOpEventSink),
    )
}

#[tokio::test]
async fn new_session_starts_idle_with_default_step() {
    let s = session(Arc::new(EchoClient::new(Duration::ZERO)));
    assert_eq!(s.state(), RunState::Idle);
    assert!(!s.is_loading());
    assert_eq!(s.error(), None);
    assert!(s.results().is_empty());

    let steps = s.steps();
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].url, DEFAULT_PRESETS[0]);
}

#[tokio::test]
async fn edits_flow_into_the_next_run() {
    let client = Arc::new(EchoClient::new(Duration::ZERO));
    let s = session(client.clone());
    let idx = s.add_step();
    s.select_preset(idx, "").unwrap();
    s.set_url(idx, "https://example.test/custom").unwrap();
    s.set_method(idx, HttpMethod::Post).unwrap();
    s.set_body(idx, r#"{"x": 1}"#).unwrap();
    assert!(s.steps()[idx].is_custom_url);

    let result = s.execute().await.unwrap();
    assert!(result.is_success());
    assert_eq!(client.calls.load(Ordering::SeqCst), 2);
    assert_eq!(s.state(), RunState::Succeeded);
    assert_eq!(
        s.results(),
        vec![
            json!({"url": DEFAULT_PRESETS[0]}),
            json!({"url": "https://example.test/custom"}),
        ]
    );
}

#[tokio::test]
async fn failed_run_exposes_terminal_error() {
    let s = session(Arc::new(EchoClient::new(Duration::ZERO)))
        .with_steps(vec![RequestDescriptor::get(1, "https://example.test/fail")]);

    let result = s.execute().await.unwrap();
    assert_eq!(result.error.as_deref(), Some("Bad Request"));
    assert_eq!(s.error().as_deref(), Some("Bad Request"));
    assert_eq!(
        s.state(),
        RunState::Failed {
            error: "Bad Request".to_string()
        }
    );
    assert!(s.results().is_empty());
}

#[tokio::test]
async fn overlapping_execute_is_rejected() {
    let client = Arc::new(EchoClient::new(Duration::from_millis(100)));
    let s = session(client.clone());

    let (first, second) = tokio::join!(s.execute(), s.execute());

    assert!(first.unwrap().is_success());
    assert_eq!(second.unwrap_err(), SessionError::RunInProgress);
    assert_eq!(client.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn cancelled_execute_frees_the_session() {
    let client = Arc::new(EchoClient::new(Duration::from_millis(200)));
    let s = session(client.clone());

    let cancelled = tokio::time::timeout(Duration::from_millis(20), s.execute()).await;
    assert!(cancelled.is_err());
    assert!(!s.is_loading());
    assert_eq!(s.error().as_deref(), Some("run cancelled"));

    let rerun = s.execute().await.unwrap();
    assert!(rerun.is_success());
    assert_eq!(s.state(), RunState::Succeeded);
    assert_eq!(client.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn loading_flag_is_set_while_running() {
    let client = Arc::new(EchoClient::new(Duration::from_millis(100)));
    let s = Arc::new(session(client).with_steps(vec![
        RequestDescriptor::get(1, "https://example.test/a"),
        RequestDescriptor::get(2, "https://example.test/b"),
    ]));

    let running = {
        let s = s.clone();
        tokio::spawn(async move { s.execute().await })
    };

    tokio::time::sleep(Duration::from_millis(30)).await;
    assert!(s.is_loading());
    assert!(matches!(s.state(), RunState::Running { step: 0 }));

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(matches!(s.state(), RunState::Running { step: 1 }));

    running.await.unwrap().unwrap();
    assert!(!s.is_loading());
    assert_eq!(s.state(), RunState::Succeeded);
}

#[tokio::test]
async fn rerun_replaces_previous_result() {
    let s = session(Arc::new(EchoClient::new(Duration::ZERO)))
        .with_steps(vec![RequestDescriptor::get(1, "https://example.test/fail")]);
    s.execute().await.unwrap();
    assert!(s.error().is_some());

    s.set_url(0, "https://example.test/ok").unwrap();
    s.execute().await.unwrap();
    assert_eq!(s.error(), None);
    assert_eq!(s.results(), vec![json!({"url": "https://example.test/ok"})]);
}

#[tokio::test]
async fn out_of_range_edit_is_reported() {
    let s = session(Arc::new(EchoClient::new(Duration::ZERO)));
    assert!(s.set_body(3, "{}").is_err());
}
