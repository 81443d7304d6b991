use std::collections::BTreeMap;
use std::time::Duration;

use reqchain_core::HttpMethod;
use reqchain_exec::executor::http::{HttpClient, HttpRequestParts, ReqwestHttpClient, TransportError};
use reqchain_exec::ExecutorConfig;
use wiremock::matchers::{body_string, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn request(method: HttpMethod, url: String, body: Option<&[u8]>) -> HttpRequestParts {
    HttpRequestParts {
        method,
        url,
        headers: BTreeMap::new(),
        body: body.map(<[u8]>::to_vec),
    }
}

#[tokio::test]
async fn http_client_sends_get_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let client = ReqwestHttpClient::default();
    let resp = client
        .send(request(HttpMethod::Get, format!("{}/get", server.uri()), None), None)
        .await
        .unwrap();
    assert_eq!(resp.status, 200);
    assert_eq!(resp.reason.as_deref(), Some("OK"));
    assert_eq!(resp.body, b"ok");
}

#[tokio::test]
async fn http_client_sends_post_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/post"))
        .and(body_string(r#"{"test":"value"}"#))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let client = ReqwestHttpClient::new(&ExecutorConfig::default()).unwrap();
    let resp = client
        .send(
            request(
                HttpMethod::Post,
                format!("{}/post", server.uri()),
                Some(&br#"{"test":"value"}"#[..]),
            ),
            None,
        )
        .await
        .unwrap();
    assert_eq!(resp.status, 201);
}

#[tokio::test]
async fn http_client_lowercases_response_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).insert_header("X-Custom", "yes"))
        .mount(&server)
        .await;

    let resp = ReqwestHttpClient::default()
        .send(request(HttpMethod::Get, server.uri(), None), None)
        .await
        .unwrap();
    assert_eq!(resp.headers.get("x-custom").map(String::as_str), Some("yes"));
    assert_eq!(resp.header("X-Custom"), Some("yes"));
}

#[tokio::test]
async fn http_client_handles_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let result = ReqwestHttpClient::default()
        .send(
            request(HttpMethod::Get, server.uri(), None),
            Some(Duration::from_millis(100)),
        )
        .await;
    match result {
        Err(TransportError::Timeout) => {}
        other => panic!("expected timeout error, got {other:?}"),
    }
}

#[tokio::test]
async fn http_client_rejects_malformed_url() {
    let result = ReqwestHttpClient::default()
        .send(request(HttpMethod::Get, "not a url".to_string(), None), None)
        .await;
    match result {
        Err(TransportError::Network(_)) => {}
        other => panic!("expected network error, got {other:?}"),
    }
}
