use crate::common::test_client;
use financeanalyst_client::error::AppError;
use financeanalyst_client::session::token::AuthState;
use mockito::{Matcher, Server};
use serde_json::json;
use tokio_test::block_on;

const PAIR_A: &str =
    r#"{"access_token":"stale-token","refresh_token":"refresh-1","expires_in":3600,"token_type":"Bearer"}"#;
const PAIR_B: &str =
    r#"{"access_token":"fresh-token","refresh_token":"refresh-2","expires_in":3600,"token_type":"Bearer"}"#;

#[test]
fn test_authenticate_stores_pair() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/auth/token")
        .match_header("X-API-Key", "test_api_key")
        .match_body(Matcher::PartialJson(json!({
            "grant_type": "password",
            "username": "alice",
            "password": "s3cret",
        })))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(PAIR_A)
        .create();

    let client = test_client(&server.url());
    let pair = block_on(client.authenticate("alice", "s3cret")).expect("Authentication failed");

    assert_eq!(pair.access_token, "stale-token");
    assert_eq!(block_on(client.auth_state()), AuthState::Authenticated);
    mock.assert();
}

#[test]
fn test_rejected_grant_keeps_session_unauthenticated() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/auth/token")
        .with_status(401)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"error": "invalid credentials"}"#)
        .create();

    let client = test_client(&server.url());
    let result = block_on(client.authenticate("alice", "wrong"));

    let err = result.unwrap_err();
    assert!(matches!(err, AppError::AuthenticationFailed(_)));
    assert!(err.to_string().contains("invalid credentials"));
    assert_eq!(block_on(client.auth_state()), AuthState::Unauthenticated);
    mock.assert();
}

#[test]
fn test_refresh_without_pair_fails() {
    let server = Server::new();

    let client = test_client(&server.url());
    let err = block_on(client.refresh_token()).unwrap_err();

    assert!(matches!(err, AppError::AuthenticationFailed(_)));
    assert!(err.to_string().contains("no refresh token held"));
}

#[test]
fn test_refresh_rotates_pair() {
    let mut server = Server::new();

    let login_mock = server
        .mock("POST", "/auth/token")
        .match_body(Matcher::PartialJson(json!({"grant_type": "password"})))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(PAIR_A)
        .create();
    let refresh_mock = server
        .mock("POST", "/auth/token")
        .match_body(Matcher::PartialJson(json!({
            "grant_type": "refresh_token",
            "refresh_token": "refresh-1",
        })))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(PAIR_B)
        .create();

    let client = test_client(&server.url());
    block_on(client.authenticate("alice", "s3cret")).expect("Authentication failed");
    let pair = block_on(client.refresh_token()).expect("Refresh failed");

    assert_eq!(pair.access_token, "fresh-token");
    assert_eq!(
        block_on(client.auth().access_token()).as_deref(),
        Some("fresh-token")
    );
    login_mock.assert();
    refresh_mock.assert();
}

#[test]
fn test_failed_refresh_clears_session() {
    let mut server = Server::new();

    server
        .mock("POST", "/auth/token")
        .match_body(Matcher::PartialJson(json!({"grant_type": "password"})))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(PAIR_A)
        .create();
    let refresh_mock = server
        .mock("POST", "/auth/token")
        .match_body(Matcher::PartialJson(json!({"grant_type": "refresh_token"})))
        .with_status(401)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"error": "invalid_grant"}"#)
        .create();

    let client = test_client(&server.url());
    block_on(client.authenticate("alice", "s3cret")).expect("Authentication failed");
    let err = block_on(client.refresh_token()).unwrap_err();

    assert!(matches!(err, AppError::AuthenticationFailed(_)));
    // A dead refresh token is dropped instead of being retried forever
    assert_eq!(block_on(client.auth_state()), AuthState::Unauthenticated);
    assert!(block_on(client.auth().access_token()).is_none());
    refresh_mock.assert();
}

#[test]
fn test_refresh_skipped_when_pair_already_rotated() {
    let mut server = Server::new();

    server
        .mock("POST", "/auth/token")
        .match_body(Matcher::PartialJson(json!({"grant_type": "password"})))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(PAIR_A)
        .create();
    let refresh_mock = server
        .mock("POST", "/auth/token")
        .match_body(Matcher::PartialJson(json!({"grant_type": "refresh_token"})))
        .expect(0)
        .create();

    let client = test_client(&server.url());
    block_on(client.authenticate("alice", "s3cret")).expect("Authentication failed");

    // The caller observed an access token that is no longer the stored one,
    // so the stored pair is returned without a network exchange
    let pair = block_on(client.auth().refresh_if_current(Some("some-older-token")))
        .expect("Expected the stored pair");

    assert_eq!(pair.access_token, "stale-token");
    refresh_mock.assert();
}

#[test]
fn test_mark_expired_flips_state() {
    let mut server = Server::new();

    server
        .mock("POST", "/auth/token")
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(PAIR_A)
        .create();

    let client = test_client(&server.url());
    block_on(client.authenticate("alice", "s3cret")).expect("Authentication failed");
    assert_eq!(block_on(client.auth_state()), AuthState::Authenticated);

    client.auth().mark_expired();
    assert_eq!(block_on(client.auth_state()), AuthState::Expired);
}

#[test]
fn test_logout_drops_pair() {
    let mut server = Server::new();

    server
        .mock("POST", "/auth/token")
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(PAIR_A)
        .create();

    let client = test_client(&server.url());
    block_on(client.authenticate("alice", "s3cret")).expect("Authentication failed");
    block_on(client.logout());

    assert_eq!(block_on(client.auth_state()), AuthState::Unauthenticated);
    assert!(block_on(client.auth().access_token()).is_none());
}
