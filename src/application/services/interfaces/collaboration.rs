use crate::application::models::collaboration::{Comment, NewComment, VersionRecord};
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for comments and version snapshots
#[async_trait]
pub trait CollaborationService: Send + Sync {
    /// Attaches a comment to an analysis or model
    async fn add_comment(&self, comment: &NewComment) -> Result<Comment, AppError>;

    /// Lists the comments attached to a target
    async fn list_comments(&self, target_id: &str) -> Result<Vec<Comment>, AppError>;

    /// Saves a snapshot of a resource
    ///
    /// # Arguments
    /// * `resource_id` - The analysis or model being versioned
    /// * `snapshot` - The state to save, passed through untouched
    /// * `label` - Optional human label for the version
    async fn save_version(
        &self,
        resource_id: &str,
        snapshot: &Value,
        label: Option<&str>,
    ) -> Result<VersionRecord, AppError>;

    /// Lists the saved versions of a resource, newest first
    async fn list_versions(&self, resource_id: &str) -> Result<Vec<VersionRecord>, AppError>;
}
