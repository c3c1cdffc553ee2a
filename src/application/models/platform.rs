use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Platform health as reported by `/health`, or synthesized client side
/// when the endpoint cannot be reached
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// "healthy", "degraded" or "error"
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    /// Per-service states when the platform reports them
    #[serde(default)]
    pub services: Option<Value>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl HealthStatus {
    /// Health payload synthesized from a failed check
    #[must_use]
    pub fn unreachable(message: impl Into<String>) -> Self {
        Self {
            status: String::from("error"),
            message: Some(message.into()),
            services: None,
            timestamp: Some(Utc::now()),
        }
    }

    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// API usage counters for the current billing period
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct UsageStats {
    #[serde(default, alias = "requests")]
    pub requests_used: Option<u64>,
    #[serde(default, alias = "limit")]
    pub requests_limit: Option<u64>,
    /// Billing period label, e.g. "2026-08"
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default, alias = "resetAt")]
    pub reset_at: Option<DateTime<Utc>>,
    /// Per-endpoint counters when the platform reports them
    #[serde(default)]
    pub endpoints: Option<Value>,
}
