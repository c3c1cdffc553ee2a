use crate::application::models::platform::{HealthStatus, UsageStats};
use crate::application::services::decode;
use crate::application::services::interfaces::PlatformService;
use crate::error::AppError;
use crate::transport::rest_client::ApiClient;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

/// Implementation of the platform utility service
pub struct PlatformServiceImpl<C: ApiClient> {
    client: Arc<C>,
}

impl<C: ApiClient> PlatformServiceImpl<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<C: ApiClient + 'static> PlatformService for PlatformServiceImpl<C> {
    async fn health(&self) -> HealthStatus {
        debug!("Checking platform health");
        let outcome = self
            .client
            .get("health")
            .await
            .and_then(|response| response.into_result("health"));
        match outcome {
            Ok(data) => match serde_json::from_value(data) {
                Ok(health) => health,
                Err(err) => HealthStatus::unreachable(format!("unreadable health payload: {err}")),
            },
            Err(err) => {
                warn!("Health check failed: {}", err);
                HealthStatus::unreachable(err.to_string())
            }
        }
    }

    async fn usage_stats(&self) -> Result<UsageStats, AppError> {
        debug!("Fetching usage stats");
        let data = self
            .client
            .get("usage/stats")
            .await
            .map_err(|e| e.in_operation("usage_stats"))?
            .into_result("usage_stats")?;
        decode(data, "usage_stats")
    }
}
