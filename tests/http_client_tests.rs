//! Integration tests for the request executor.
//!
//! These tests run the HTTP client against a local mock server and verify
//! that every response is classified into exactly one outcome.

use rybbit_api::clients::{HttpClient, HttpMethod, HttpRequest, RequestError};
use rybbit_api::{AnalyticsConfig, ApiKey, BaseUrl, ErrorResponse};
use serde::Deserialize;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_client(base_url: &str) -> HttpClient {
    let config = AnalyticsConfig::builder()
        .base_url(BaseUrl::new(base_url).unwrap())
        .api_key(ApiKey::new("rb_test_key").unwrap())
        .build()
        .unwrap();
    HttpClient::new(&config).unwrap()
}

fn url(server: &MockServer, path: &str) -> Url {
    Url::parse(&format!("{}{path}", server.uri())).unwrap()
}

#[tokio::test]
async fn test_success_returns_parsed_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/sites/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 42})))
        .mount(&server)
        .await;

    let client = create_client(&server.uri());
    let request = HttpRequest::builder(HttpMethod::Get, url(&server, "/api/sites/5")).build();

    let payload: serde_json::Value = client.request(request).await.unwrap();
    assert_eq!(payload, json!({"id": 42}));
}

#[tokio::test]
async fn test_success_decodes_into_declared_type() {
    #[derive(Debug, Deserialize)]
    struct Site {
        id: u64,
    }

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 42, "extra": true})))
        .mount(&server)
        .await;

    let client = create_client(&server.uri());
    let request = HttpRequest::builder(HttpMethod::Get, url(&server, "/api/sites/5")).build();

    let site: Site = client.request(request).await.unwrap();
    assert_eq!(site.id, 42);
}

#[tokio::test]
async fn test_payload_of_wrong_shape_is_parse_failure() {
    #[derive(Debug, Deserialize)]
    #[allow(dead_code)]
    struct Site {
        id: u64,
    }

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "not-a-number"})))
        .mount(&server)
        .await;

    let client = create_client(&server.uri());
    let request = HttpRequest::builder(HttpMethod::Get, url(&server, "/api/sites/5")).build();

    let error = client.request::<Site>(request).await.unwrap_err();
    assert!(matches!(error, RequestError::Parse { .. }));
    assert_eq!(error.status(), -2);
}

#[tokio::test]
async fn test_server_failure_carries_status_and_serialized_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "not found"})))
        .mount(&server)
        .await;

    let client = create_client(&server.uri());
    let request = HttpRequest::builder(HttpMethod::Get, url(&server, "/api/sites/404")).build();

    let error = client.send(request).await.unwrap_err();
    match &error {
        RequestError::Server {
            status,
            detail,
            body,
        } => {
            assert_eq!(*status, 404);
            assert!(detail.contains(r#"{"message":"not found"}"#));
            assert_eq!(body, &json!({"message": "not found"}));
        }
        other => panic!("Expected server failure, got: {other:?}"),
    }

    let response = ErrorResponse::from(error);
    assert_eq!(response.status, 404);
    assert_eq!(response.error, r#"{"message":"not found"}"#);
}

#[tokio::test]
async fn test_unparsable_error_body_is_parse_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let client = create_client(&server.uri());
    let request = HttpRequest::builder(HttpMethod::Get, url(&server, "/api/organizations")).build();

    let error = client.send(request).await.unwrap_err();
    assert!(
        matches!(error, RequestError::Parse { .. }),
        "Expected parse failure, got: {error:?}"
    );
    assert_eq!(error.to_response().status, -2);
}

#[tokio::test]
async fn test_unparsable_success_body_is_parse_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .mount(&server)
        .await;

    let client = create_client(&server.uri());
    let request = HttpRequest::builder(HttpMethod::Get, url(&server, "/api/organizations")).build();

    let error = client.send(request).await.unwrap_err();
    assert!(matches!(error, RequestError::Parse { .. }));
}

#[tokio::test]
async fn test_empty_no_content_response_is_parse_failure() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = create_client(&server.uri());
    let request = HttpRequest::builder(HttpMethod::Delete, url(&server, "/api/sites/5")).build();

    let error = client.send(request).await.unwrap_err();
    assert!(matches!(error, RequestError::Parse { .. }));
}

#[tokio::test]
async fn test_unreachable_host_is_transport_failure() {
    // Nothing listens on port 1
    let client = create_client("http://127.0.0.1:1");
    let request = HttpRequest::builder(
        HttpMethod::Get,
        Url::parse("http://127.0.0.1:1/api/sites/5").unwrap(),
    )
    .build();

    let error = client.send(request).await.unwrap_err();
    assert!(
        matches!(error, RequestError::Transport { .. }),
        "Expected transport failure, got: {error:?}"
    );
    assert_eq!(error.status(), -1);
    assert!(!error.detail().is_empty());
}

#[tokio::test]
async fn test_bearer_credential_and_json_headers_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/organizations"))
        .and(header("Authorization", "Bearer rb_test_key"))
        .and(header("Content-Type", "application/json"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server.uri());
    let request = HttpRequest::builder(HttpMethod::Get, url(&server, "/api/organizations")).build();

    let payload = client.send(request).await.unwrap();
    assert_eq!(payload, json!([]));
}

#[tokio::test]
async fn test_body_is_sent_as_json_text() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/sites/5/config"))
        .and(body_json(json!({"public": true, "blockBots": false})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server.uri());
    let request = HttpRequest::builder(HttpMethod::Put, url(&server, "/api/sites/5/config"))
        .body(json!({"public": true, "blockBots": false}))
        .build();

    let payload = client.send(request).await.unwrap();
    assert_eq!(payload["success"], true);
}

#[tokio::test]
async fn test_request_without_body_sends_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = create_client(&server.uri());
    let request = HttpRequest::builder(HttpMethod::Post, url(&server, "/api/sites/5/private-link-config")).build();
    client.send(request).await.unwrap();

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert!(received[0].body.is_empty());
}

#[tokio::test]
async fn test_exactly_one_request_per_call() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({"error": "unavailable"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server.uri());
    let request = HttpRequest::builder(HttpMethod::Get, url(&server, "/api/sites/5")).build();

    let error = client.send(request).await.unwrap_err();
    assert_eq!(error.status(), 503);
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/sites/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/sites/2"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"error": "Forbidden"})))
        .mount(&server)
        .await;

    let client = create_client(&server.uri());
    let first = HttpRequest::builder(HttpMethod::Get, url(&server, "/api/sites/1")).build();
    let second = HttpRequest::builder(HttpMethod::Get, url(&server, "/api/sites/2")).build();

    let (first, second) = tokio::join!(client.send(first), client.send(second));

    assert_eq!(first.unwrap(), json!({"id": 1}));
    assert_eq!(second.unwrap_err().status(), 403);
}

#[tokio::test]
async fn test_every_status_class_yields_one_outcome() {
    let server = MockServer::start().await;
    Mock::given(path("/status/ok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 200})))
        .mount(&server)
        .await;
    Mock::given(path("/status/moved"))
        .respond_with(ResponseTemplate::new(301).set_body_json(json!({"code": 301})))
        .mount(&server)
        .await;
    Mock::given(path("/status/bad"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"code": 400})))
        .mount(&server)
        .await;
    Mock::given(path("/status/error"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"code": 500})))
        .mount(&server)
        .await;

    let client = create_client(&server.uri());

    for (code, path_suffix) in [(200_u16, "ok"), (301, "moved"), (400, "bad"), (500, "error")] {
        let request = HttpRequest::builder(
            HttpMethod::Get,
            url(&server, &format!("/status/{path_suffix}")),
        )
        .build();

        match client.send(request).await {
            Ok(payload) => {
                assert_eq!(code, 200);
                assert_eq!(payload["code"], 200);
            }
            Err(RequestError::Server { status, body, .. }) => {
                assert_ne!(code, 200);
                assert_eq!(status, code);
                assert_eq!(body["code"], code);
            }
            Err(other) => panic!("Unexpected outcome for {code}: {other:?}"),
        }
    }
}
