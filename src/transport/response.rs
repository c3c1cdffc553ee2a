use crate::constants::REQUEST_ID_HEADER;
use crate::error::{AppError, ErrorDetail};
use crate::transport::http_client::RawResponse;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Uniform shape every API response is reduced to.
///
/// The platform wraps most payloads in a `{success, data, metadata, error}`
/// envelope, but older endpoints answer with the payload alone. Both forms
/// normalize into this struct.
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedResponse {
    /// Envelope success flag; missing flags count as success
    pub success: bool,
    /// Main payload
    pub data: Option<Value>,
    /// Envelope metadata, passed through untouched
    pub metadata: Option<Value>,
    /// Envelope error payload, passed through untouched
    pub error: Option<Value>,
    /// Server side request id from the X-Request-Id header
    pub request_id: Option<String>,
}

const ENVELOPE_KEYS: [&str; 4] = ["success", "data", "metadata", "error"];

impl NormalizedResponse {
    /// Reduces a raw response to the uniform shape.
    ///
    /// Pure: the same raw response always produces an identical result. An
    /// object body counts as an envelope when it carries at least one
    /// envelope key; any other body becomes `data` wholesale.
    #[must_use]
    pub fn normalize(raw: &RawResponse) -> Self {
        let request_id = raw.header(REQUEST_ID_HEADER);

        match &raw.json {
            Some(Value::Object(map))
                if ENVELOPE_KEYS.iter().any(|key| map.contains_key(*key)) =>
            {
                Self {
                    success: map
                        .get("success")
                        .and_then(Value::as_bool)
                        .unwrap_or(true),
                    data: map.get("data").cloned(),
                    metadata: map.get("metadata").cloned(),
                    error: map.get("error").cloned(),
                    request_id,
                }
            }
            Some(body) => Self {
                success: true,
                data: Some(body.clone()),
                metadata: None,
                error: None,
                request_id,
            },
            None => Self {
                success: true,
                data: None,
                metadata: None,
                error: None,
                request_id,
            },
        }
    }

    /// Human readable message from the error payload, when one exists
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        match &self.error {
            Some(Value::String(message)) => Some(message.clone()),
            Some(Value::Object(map)) => match map.get("message") {
                Some(Value::String(message)) => Some(message.clone()),
                _ => None,
            },
            _ => None,
        }
    }

    /// Unwraps the payload, turning an unsuccessful envelope into an error
    /// tagged with the operation that produced it.
    pub fn into_result(self, operation: &str) -> Result<Value, AppError> {
        if self.success {
            Ok(self.data.unwrap_or(Value::Null))
        } else {
            let message = self
                .error_message()
                .unwrap_or_else(|| format!("{operation} reported failure"));
            let mut detail = ErrorDetail::new(message);
            detail.body = self.error;
            Err(AppError::Generic(detail).in_operation(operation))
        }
    }
}
