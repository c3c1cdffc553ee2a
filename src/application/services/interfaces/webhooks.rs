use crate::application::models::webhooks::{Webhook, WebhookRegistration};
use crate::error::AppError;
use async_trait::async_trait;

/// Interface for event webhook management
#[async_trait]
pub trait WebhookService: Send + Sync {
    /// Registers a webhook and returns its id
    async fn register(&self, registration: &WebhookRegistration) -> Result<String, AppError>;

    /// Removes a webhook, returning whether the platform confirmed it
    async fn unregister(&self, webhook_id: &str) -> Result<bool, AppError>;

    /// Lists all registered webhooks
    async fn list(&self) -> Result<Vec<Webhook>, AppError>;
}
