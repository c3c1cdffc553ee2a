use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Connection state of a third-party data provider
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct IntegrationStatus {
    #[serde(default)]
    pub provider: String,
    /// Provider-reported state, e.g. "connected"
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub connected: Option<bool>,
    #[serde(default, alias = "connectedAt")]
    pub connected_at: Option<DateTime<Utc>>,
}
