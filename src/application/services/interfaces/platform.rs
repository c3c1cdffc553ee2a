use crate::application::models::platform::{HealthStatus, UsageStats};
use crate::error::AppError;
use async_trait::async_trait;

/// Interface for platform utility endpoints
#[async_trait]
pub trait PlatformService: Send + Sync {
    /// Checks platform health, best effort
    ///
    /// Never fails: an unreachable platform comes back as an error-status
    /// payload so monitoring loops keep running.
    async fn health(&self) -> HealthStatus;

    /// Gets API usage counters for the current period
    async fn usage_stats(&self) -> Result<UsageStats, AppError>;
}
