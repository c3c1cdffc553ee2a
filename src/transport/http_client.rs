use crate::config::Config;
use crate::constants::{API_KEY_HEADER, CLIENT_REQUEST_ID_HEADER, USER_AGENT};
use crate::error::AppError;
use crate::session::Auth;
use crate::utils::id::request_id;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Query string pairs appended to the request URL
pub type QueryParams = Vec<(String, String)>;

/// Wire-level response before any interpretation.
///
/// `json` holds the parsed body. A non-empty body that is not valid JSON is
/// kept as `Value::String` so error payloads are never dropped; an empty
/// body is `None`.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status of the response
    pub status: StatusCode,
    /// All response headers
    pub headers: HeaderMap,
    /// Parsed response body, if any
    pub json: Option<Value>,
}

impl RawResponse {
    /// Header value as a string, when present and valid UTF-8
    #[must_use]
    pub fn header(&self, name: &str) -> Option<String> {
        self.headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(String::from)
    }

    /// Seconds from the Retry-After header, when present and parseable
    #[must_use]
    pub fn retry_after_secs(&self) -> Option<u64> {
        self.header("Retry-After")
            .and_then(|value| value.trim().parse().ok())
    }
}

/// Sends single HTTP requests and captures whatever comes back.
///
/// Status-agnostic: a 500 with a readable body is as much a successful send
/// as a 200. Retries, token refresh and status dispatch live in
/// [`crate::transport::rest_client::RestClient`].
pub struct HttpTransport {
    config: Arc<Config>,
    auth: Arc<Auth>,
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: Arc<Config>, auth: Arc<Auth>) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;
        Ok(Self { config, auth, http })
    }

    fn build_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.rest_api.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Performs one request and returns the raw result.
    ///
    /// Attaches the standard headers, the API key when configured, the
    /// Bearer token when one is held, and a client correlation id. Only
    /// network-level failures produce an error.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        query: Option<&QueryParams>,
        body: Option<&Value>,
    ) -> Result<RawResponse, AppError> {
        let url = self.build_url(path);
        debug!("{} {}", method, url);

        let mut request = self
            .http
            .request(method, &url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .header(CLIENT_REQUEST_ID_HEADER, request_id());

        if !self.config.credentials.api_key.is_empty() {
            request = request.header(API_KEY_HEADER, &self.config.credentials.api_key);
        }
        if let Some(token) = self.auth.token_pair().await {
            request = request.header("Authorization", token.authorization_value());
        }
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let text = response.text().await.unwrap_or_default();
        let json = if text.trim().is_empty() {
            None
        } else {
            match serde_json::from_str(&text) {
                Ok(value) => Some(value),
                Err(_) => Some(Value::String(text)),
            }
        };

        Ok(RawResponse {
            status,
            headers,
            json,
        })
    }
}
