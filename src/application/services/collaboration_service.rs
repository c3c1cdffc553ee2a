use crate::application::models::collaboration::{Comment, NewComment, VersionRecord};
use crate::application::services::interfaces::CollaborationService;
use crate::application::services::{decode, expect_records};
use crate::error::AppError;
use crate::transport::rest_client::ApiClient;
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the collaboration service
pub struct CollaborationServiceImpl<C: ApiClient> {
    client: Arc<C>,
}

impl<C: ApiClient> CollaborationServiceImpl<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<C: ApiClient + 'static> CollaborationService for CollaborationServiceImpl<C> {
    async fn add_comment(&self, comment: &NewComment) -> Result<Comment, AppError> {
        debug!("Adding comment on {}", comment.target_id);
        let data = self
            .client
            .post("comments", json!(comment))
            .await
            .map_err(|e| e.in_operation("add_comment"))?
            .into_result("add_comment")?;
        decode(data, "add_comment")
    }

    async fn list_comments(&self, target_id: &str) -> Result<Vec<Comment>, AppError> {
        debug!("Listing comments on {}", target_id);
        let query = vec![("target".to_string(), target_id.to_string())];
        let data = self
            .client
            .get_with_query("comments", query)
            .await
            .map_err(|e| e.in_operation("list_comments"))?
            .into_result("list_comments")?;
        let records = expect_records(data, &["comments", "data"], "list_comments")?;
        decode(Value::Array(records), "list_comments")
    }

    async fn save_version(
        &self,
        resource_id: &str,
        snapshot: &Value,
        label: Option<&str>,
    ) -> Result<VersionRecord, AppError> {
        info!("Saving version of {}", resource_id);
        let mut body = json!({ "snapshot": snapshot });
        if let Some(label) = label {
            body["label"] = Value::String(label.to_string());
        }
        let data = self
            .client
            .post(&format!("versions/{resource_id}"), body)
            .await
            .map_err(|e| e.in_operation("save_version"))?
            .into_result("save_version")?;
        let version = decode(data, "save_version")?;
        info!("✓ Version saved for {}", resource_id);
        Ok(version)
    }

    async fn list_versions(&self, resource_id: &str) -> Result<Vec<VersionRecord>, AppError> {
        debug!("Listing versions of {}", resource_id);
        let data = self
            .client
            .get(&format!("versions/{resource_id}"))
            .await
            .map_err(|e| e.in_operation("list_versions"))?
            .into_result("list_versions")?;
        let records = expect_records(data, &["versions", "data"], "list_versions")?;
        decode(Value::Array(records), "list_versions")
    }
}
