use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Registration request for an event webhook
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct WebhookRegistration {
    /// URL the platform will POST events to
    pub endpoint: String,
    /// Event names to subscribe to, e.g. "analysis.completed"
    pub events: Vec<String>,
    /// Shared secret used to sign deliveries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

impl WebhookRegistration {
    #[must_use]
    pub fn new(endpoint: impl Into<String>, events: Vec<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            events,
            secret: None,
        }
    }

    #[must_use]
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }
}

/// A registered webhook as reported by the platform
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct Webhook {
    #[serde(default, alias = "webhook_id")]
    pub id: String,
    #[serde(default)]
    pub endpoint: String,
    #[serde(default)]
    pub events: Vec<String>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}
