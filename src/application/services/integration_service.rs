use crate::application::models::integrations::IntegrationStatus;
use crate::application::services::decode;
use crate::application::services::interfaces::IntegrationService;
use crate::error::AppError;
use crate::transport::http_client::QueryParams;
use crate::transport::rest_client::ApiClient;
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the third-party integration service
///
/// The platform proxies the provider APIs, so payloads keep their
/// provider shape and come back as raw JSON.
pub struct IntegrationServiceImpl<C: ApiClient> {
    client: Arc<C>,
}

impl<C: ApiClient> IntegrationServiceImpl<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<C: ApiClient + 'static> IntegrationService for IntegrationServiceImpl<C> {
    async fn connect(
        &self,
        provider: &str,
        credentials: &Value,
    ) -> Result<IntegrationStatus, AppError> {
        info!("Connecting integration: {}", provider);
        let data = self
            .client
            .post(&format!("integrations/{provider}/connect"), credentials.clone())
            .await
            .map_err(|e| e.in_operation("connect"))?
            .into_result("connect")?;
        let mut status: IntegrationStatus = decode(data, "connect")?;
        if status.provider.is_empty() {
            status.provider = provider.to_string();
        }
        info!("✓ Integration connected: {}", provider);
        Ok(status)
    }

    async fn disconnect(&self, provider: &str) -> Result<bool, AppError> {
        info!("Disconnecting integration: {}", provider);
        let response = self
            .client
            .execute(
                Method::POST,
                &format!("integrations/{provider}/disconnect"),
                None,
                None,
            )
            .await
            .map_err(|e| e.in_operation("disconnect"))?;
        Ok(response.success)
    }

    async fn fetch(
        &self,
        provider: &str,
        endpoint: &str,
        params: Option<QueryParams>,
    ) -> Result<Value, AppError> {
        debug!("Fetching {}/{} through the platform proxy", provider, endpoint);
        self.client
            .execute(
                Method::GET,
                &format!("integrations/{provider}/{endpoint}"),
                params,
                None,
            )
            .await
            .map_err(|e| e.in_operation("fetch"))?
            .into_result("fetch")
    }
}
