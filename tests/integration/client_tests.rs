use crate::common::{test_client, test_config};
use financeanalyst_client::error::AppError;
use financeanalyst_client::transport::rest_client::{ApiClient, RestClient};
use mockito::{Matcher, Server};
use serde_json::json;
use std::time::Instant;
use tokio_test::block_on;

#[test]
fn test_envelope_passthrough() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", "/health")
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_header("X-Request-Id", "req-1")
        .with_body(r#"{"success":true,"data":{"status":"healthy"},"metadata":{"elapsed_ms":4}}"#)
        .create();

    let client = test_client(&server.url());
    let response = block_on(client.get("health")).expect("Request failed");

    assert!(response.success);
    assert_eq!(response.data.as_ref().unwrap()["status"], json!("healthy"));
    assert!(response.metadata.is_some());
    assert_eq!(response.request_id.as_deref(), Some("req-1"));
    mock.assert();
}

#[test]
fn test_flat_payload_becomes_data() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", "/market/quote/AAPL")
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"price": 150.25}"#)
        .create();

    let client = test_client(&server.url());
    let response = block_on(client.get("market/quote/AAPL")).expect("Request failed");

    // No envelope keys, so the whole body is the data
    assert!(response.success);
    assert_eq!(response.data, Some(json!({"price": 150.25})));
    assert!(response.error.is_none());
    mock.assert();
}

#[test]
fn test_bad_request_fails_without_retry() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/analytics/portfolio")
        .with_status(400)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"error": "weights must sum to 1"}"#)
        .expect(1)
        .create();

    let client = test_client(&server.url());
    let err = block_on(client.post("analytics/portfolio", json!({"assets": []}))).unwrap_err();

    assert!(matches!(err, AppError::ValidationFailed(_)));
    assert!(err.to_string().contains("weights must sum to 1"));
    assert_eq!(err.status(), Some(400));
    mock.assert();
}

#[test]
fn test_server_errors_retry_to_budget() {
    let mut server = Server::new();

    // max_retries is 3 total attempts
    let mock = server
        .mock("GET", "/market/indices")
        .with_status(500)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"error": "engine down"}"#)
        .expect(3)
        .create();

    let client = test_client(&server.url());
    let err = block_on(client.get("market/indices")).unwrap_err();

    assert!(matches!(err, AppError::Generic(_)));
    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().contains("engine down"));
    mock.assert();
}

#[test]
fn test_rate_limit_replays_identical_request() {
    let mut server = Server::new();

    let body = json!({
        "portfolio": {"assets": [{"symbol": "AAPL", "weight": 1.0}]},
        "method": "parametric",
        "confidence_level": 0.95,
    });
    // Two replays allowed, so three identical hits before giving up
    let mock = server
        .mock("POST", "/analytics/risk")
        .match_body(Matcher::Json(body.clone()))
        .with_status(429)
        .with_header("Retry-After", "0")
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"error": "rate limit exceeded"}"#)
        .expect(3)
        .create();

    let client = test_client(&server.url());
    let err = block_on(client.post("analytics/risk", body)).unwrap_err();

    assert!(matches!(err, AppError::RateLimited(_)));
    assert!(err.to_string().contains("rate limit exceeded"));
    mock.assert();
}

#[test]
fn test_rate_limit_honors_retry_after() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", "/usage/stats")
        .with_status(429)
        .with_header("Retry-After", "1")
        .expect(2)
        .create();

    let mut config = test_config(&server.url());
    config.retry.rate_limit_max_retries = 1;
    let client = RestClient::new(config).expect("Failed to create client");

    let started = Instant::now();
    let err = block_on(client.get("usage/stats")).unwrap_err();

    assert!(matches!(err, AppError::RateLimited(_)));
    assert!(
        started.elapsed().as_millis() >= 1000,
        "Replay should wait the advertised Retry-After"
    );
    mock.assert();
}

#[test]
fn test_401_refreshes_once_and_replays() {
    let mut server = Server::new();

    server
        .mock("POST", "/auth/token")
        .match_body(Matcher::PartialJson(json!({"grant_type": "password"})))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"access_token":"stale-token","refresh_token":"refresh-1","expires_in":3600,"token_type":"Bearer"}"#)
        .create();
    let stale_mock = server
        .mock("GET", "/usage/stats")
        .match_header("Authorization", "Bearer stale-token")
        .with_status(401)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"error": "token expired"}"#)
        .expect(1)
        .create();
    let refresh_mock = server
        .mock("POST", "/auth/token")
        .match_body(Matcher::PartialJson(json!({
            "grant_type": "refresh_token",
            "refresh_token": "refresh-1",
        })))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"access_token":"fresh-token","refresh_token":"refresh-2","expires_in":3600,"token_type":"Bearer"}"#)
        .expect(1)
        .create();
    let fresh_mock = server
        .mock("GET", "/usage/stats")
        .match_header("Authorization", "Bearer fresh-token")
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"success":true,"data":{"requests":10,"limit":1000}}"#)
        .expect(1)
        .create();

    let client = test_client(&server.url());
    block_on(client.authenticate("alice", "s3cret")).expect("Authentication failed");
    let response = block_on(client.get("usage/stats")).expect("Replay after refresh failed");

    assert!(response.success);
    assert_eq!(
        block_on(client.auth().access_token()).as_deref(),
        Some("fresh-token")
    );
    stale_mock.assert();
    refresh_mock.assert();
    fresh_mock.assert();
}

#[test]
fn test_second_401_is_terminal() {
    let mut server = Server::new();

    server
        .mock("POST", "/auth/token")
        .match_body(Matcher::PartialJson(json!({"grant_type": "password"})))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"access_token":"stale-token","refresh_token":"refresh-1","expires_in":3600,"token_type":"Bearer"}"#)
        .create();
    server
        .mock("POST", "/auth/token")
        .match_body(Matcher::PartialJson(json!({"grant_type": "refresh_token"})))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"access_token":"fresh-token","refresh_token":"refresh-2","expires_in":3600,"token_type":"Bearer"}"#)
        .create();
    let stale_mock = server
        .mock("GET", "/usage/stats")
        .match_header("Authorization", "Bearer stale-token")
        .with_status(401)
        .expect(1)
        .create();
    // Still rejected with the refreshed token, no second refresh
    let fresh_mock = server
        .mock("GET", "/usage/stats")
        .match_header("Authorization", "Bearer fresh-token")
        .with_status(401)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"error": "account disabled"}"#)
        .expect(1)
        .create();

    let client = test_client(&server.url());
    block_on(client.authenticate("alice", "s3cret")).expect("Authentication failed");
    let err = block_on(client.get("usage/stats")).unwrap_err();

    assert!(matches!(err, AppError::AuthenticationFailed(_)));
    assert!(err.to_string().contains("account disabled"));
    stale_mock.assert();
    fresh_mock.assert();
}

#[test]
fn test_401_without_held_token_fails_immediately() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", "/usage/stats")
        .with_status(401)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"error": "authentication required"}"#)
        .expect(1)
        .create();
    let refresh_mock = server
        .mock("POST", "/auth/token")
        .expect(0)
        .create();

    let client = test_client(&server.url());
    let err = block_on(client.get("usage/stats")).unwrap_err();

    assert!(matches!(err, AppError::AuthenticationFailed(_)));
    assert!(err.to_string().contains("authentication required"));
    mock.assert();
    refresh_mock.assert();
}

#[test]
fn test_network_failure_is_generic() {
    // Nothing listens here
    let mut config = test_config("http://127.0.0.1:1");
    config.retry.max_retries = 2;
    let client = RestClient::new(config).expect("Failed to create client");

    let err = block_on(client.get("health")).unwrap_err();

    assert!(matches!(err, AppError::Generic(_)));
    assert!(err.to_string().contains("failed"));
}
