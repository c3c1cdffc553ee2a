use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A comment to attach to an analysis or model
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct NewComment {
    /// Id of the analysis, model or cell the comment belongs to
    pub target_id: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Parent comment id when replying in a thread
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

impl NewComment {
    #[must_use]
    pub fn new(target_id: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            target_id: target_id.into(),
            body: body.into(),
            author: None,
            parent_id: None,
        }
    }

    #[must_use]
    pub fn in_reply_to(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }
}

/// A stored comment
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default, alias = "comment_id")]
    pub id: String,
    #[serde(default)]
    pub target_id: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub replies: Option<Value>,
}

/// A saved snapshot of a resource
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct VersionRecord {
    #[serde(default, alias = "version_id")]
    pub id: String,
    #[serde(default)]
    pub resource_id: String,
    /// Human label, e.g. "pre-earnings baseline"
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    /// The snapshot body, returned only by some endpoints
    #[serde(default)]
    pub snapshot: Option<Value>,
}
