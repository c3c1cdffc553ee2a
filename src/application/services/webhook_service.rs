use crate::application::models::webhooks::{Webhook, WebhookRegistration};
use crate::application::services::interfaces::WebhookService;
use crate::application::services::{decode, expect_records};
use crate::error::AppError;
use crate::transport::rest_client::ApiClient;
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the webhook management service
pub struct WebhookServiceImpl<C: ApiClient> {
    client: Arc<C>,
}

impl<C: ApiClient> WebhookServiceImpl<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<C: ApiClient + 'static> WebhookService for WebhookServiceImpl<C> {
    async fn register(&self, registration: &WebhookRegistration) -> Result<String, AppError> {
        info!("Registering webhook for {}", registration.endpoint);
        let data = self
            .client
            .post("webhooks/register", json!(registration))
            .await
            .map_err(|e| e.in_operation("register"))?
            .into_result("register")?;
        let webhook_id = match data.get("webhook_id").or_else(|| data.get("id")) {
            Some(Value::String(id)) => id.clone(),
            _ => {
                return Err(AppError::generic("response carried no webhook id")
                    .in_operation("register"));
            }
        };
        info!("✓ Webhook registered: {}", webhook_id);
        Ok(webhook_id)
    }

    async fn unregister(&self, webhook_id: &str) -> Result<bool, AppError> {
        info!("Removing webhook {}", webhook_id);
        let response = self
            .client
            .delete(&format!("webhooks/{webhook_id}"))
            .await
            .map_err(|e| e.in_operation("unregister"))?;
        Ok(response.success)
    }

    async fn list(&self) -> Result<Vec<Webhook>, AppError> {
        debug!("Listing webhooks");
        let data = self
            .client
            .get("webhooks")
            .await
            .map_err(|e| e.in_operation("list"))?
            .into_result("list")?;
        let records = expect_records(data, &["webhooks", "data"], "list")?;
        decode(Value::Array(records), "list")
    }
}
