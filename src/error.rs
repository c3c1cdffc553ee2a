use reqwest::StatusCode;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Context attached to every error kind: what happened, which HTTP status
/// produced it, the raw payload the server sent, and the client operation
/// that was running.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorDetail {
    /// Human readable message, extracted from the response body when possible
    pub message: String,
    /// HTTP status that produced the error, if any
    pub status: Option<u16>,
    /// Raw response payload, kept verbatim for callers that need it
    pub body: Option<Value>,
    /// Client operation that was running, e.g. "get_quote"
    pub operation: Option<String>,
}

impl ErrorDetail {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    /// Builds a detail from a status and an optional JSON payload, digging
    /// the message out of the common body shapes: a string under "error",
    /// an object under "error" with a "message", or a top level "message".
    pub fn from_status(status: StatusCode, body: Option<Value>) -> Self {
        let message = body
            .as_ref()
            .and_then(extract_message)
            .unwrap_or_else(|| format!("HTTP {status}"));
        Self {
            message,
            status: Some(status.as_u16()),
            body,
            operation: None,
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = Some(status.as_u16());
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

fn extract_message(body: &Value) -> Option<String> {
    match body.get("error") {
        Some(Value::String(s)) => return Some(s.clone()),
        Some(Value::Object(obj)) => {
            if let Some(Value::String(s)) = obj.get("message") {
                return Some(s.clone());
            }
        }
        _ => {}
    }
    if let Some(Value::String(s)) = body.get("message") {
        return Some(s.clone());
    }
    if let Value::String(s) = body {
        return Some(s.clone());
    }
    None
}

impl fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(status) = self.status {
            write!(f, " (status {status})")?;
        }
        if let Some(operation) = &self.operation {
            write!(f, " [{operation}]")?;
        }
        Ok(())
    }
}

/// The single error hierarchy for the whole crate.
///
/// Every fallible operation funnels into one of these four kinds so callers
/// can match on what went wrong without caring which layer raised it.
#[derive(Debug, Error)]
pub enum AppError {
    /// The server kept answering 429 past the rate limit retry budget
    #[error("rate limited: {0}")]
    RateLimited(ErrorDetail),
    /// A 401 that a token refresh could not resolve, or a rejected grant
    #[error("authentication failed: {0}")]
    AuthenticationFailed(ErrorDetail),
    /// A 400 carrying the server's validation payload
    #[error("validation failed: {0}")]
    ValidationFailed(ErrorDetail),
    /// Network failures, decode failures and any other non success status
    #[error("{0}")]
    Generic(ErrorDetail),
}

impl AppError {
    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic(ErrorDetail::new(message))
    }

    pub fn detail(&self) -> &ErrorDetail {
        match self {
            Self::RateLimited(d)
            | Self::AuthenticationFailed(d)
            | Self::ValidationFailed(d)
            | Self::Generic(d) => d,
        }
    }

    /// HTTP status behind the error, when one exists
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.detail().status
    }

    /// Attaches the client operation name without changing the error kind
    #[must_use]
    pub fn in_operation(mut self, operation: &str) -> Self {
        let detail = match &mut self {
            Self::RateLimited(d)
            | Self::AuthenticationFailed(d)
            | Self::ValidationFailed(d)
            | Self::Generic(d) => d,
        };
        detail.operation = Some(operation.to_string());
        self
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            "request timed out"
        } else if err.is_connect() {
            "connection failed"
        } else if err.is_builder() {
            "failed to build request"
        } else {
            "request failed"
        };
        let mut detail = ErrorDetail::new(format!("{kind}: {err}"));
        if let Some(status) = err.status() {
            detail.status = Some(status.as_u16());
        }
        Self::Generic(detail)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Generic(ErrorDetail::new(format!("failed to decode response: {err}")))
    }
}
