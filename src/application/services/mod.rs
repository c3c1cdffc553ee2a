/// Service traits implemented by the API clients
pub mod interfaces;

/// AI-assisted analysis service
pub mod ai_service;
/// Portfolio and valuation analytics service
pub mod analytics_service;
/// Commenting and versioning service
pub mod collaboration_service;
/// Third-party data source bridge service
pub mod integration_service;
/// Market data service
pub mod market_service;
/// Health and usage reporting service
pub mod platform_service;
/// Chart building and export service
pub mod visualization_service;
/// Webhook registration service
pub mod webhook_service;

pub use ai_service::AiServiceImpl;
pub use analytics_service::AnalyticsServiceImpl;
pub use collaboration_service::CollaborationServiceImpl;
pub use integration_service::IntegrationServiceImpl;
pub use interfaces::{
    AiService, AnalyticsService, CollaborationService, IntegrationService, MarketService,
    PlatformService, VisualizationService, WebhookService,
};
pub use market_service::MarketServiceImpl;
pub use platform_service::PlatformServiceImpl;
pub use visualization_service::VisualizationServiceImpl;
pub use webhook_service::WebhookServiceImpl;

use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decodes a response payload into a typed model, tagging failures with the
/// operation that produced the payload.
pub(crate) fn decode<T: DeserializeOwned>(value: Value, operation: &str) -> Result<T, AppError> {
    serde_json::from_value(value).map_err(|e| AppError::from(e).in_operation(operation))
}

/// Extracts a list of records from a payload that is either a bare array or an
/// object nesting the array under one of the given keys.
pub(crate) fn expect_records(
    value: Value,
    keys: &[&str],
    operation: &str,
) -> Result<Vec<Value>, AppError> {
    match value {
        Value::Array(records) => Ok(records),
        Value::Object(mut map) => {
            for key in keys {
                if let Some(Value::Array(records)) = map.remove(*key) {
                    return Ok(records);
                }
            }
            Err(AppError::generic("expected a list of records in the response")
                .in_operation(operation))
        }
        _ => Err(AppError::generic("expected a list of records in the response")
            .in_operation(operation)),
    }
}
