use crate::application::models::integrations::IntegrationStatus;
use crate::error::AppError;
use crate::transport::http_client::QueryParams;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for third-party provider integrations
#[async_trait]
pub trait IntegrationService: Send + Sync {
    /// Connects a provider with its credentials
    ///
    /// # Arguments
    /// * `provider` - Provider slug, e.g. "quickbooks"
    /// * `credentials` - Provider-specific credential payload
    async fn connect(
        &self,
        provider: &str,
        credentials: &Value,
    ) -> Result<IntegrationStatus, AppError>;

    /// Disconnects a provider, returning whether the platform confirmed it
    async fn disconnect(&self, provider: &str) -> Result<bool, AppError>;

    /// Fetches provider-shaped data through the platform proxy
    ///
    /// The payload shape belongs to the provider, so it comes back as raw
    /// JSON.
    async fn fetch(
        &self,
        provider: &str,
        endpoint: &str,
        params: Option<QueryParams>,
    ) -> Result<Value, AppError>;
}
