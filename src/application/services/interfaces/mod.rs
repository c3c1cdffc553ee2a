/// AI service interface
pub mod ai;
/// Analytics service interface
pub mod analytics;
/// Collaboration service interface
pub mod collaboration;
/// Integration service interface
pub mod integrations;
/// Market data service interface
pub mod market;
/// Platform utility service interface
pub mod platform;
/// Visualization service interface
pub mod visualization;
/// Webhook service interface
pub mod webhooks;

pub use ai::AiService;
pub use analytics::AnalyticsService;
pub use collaboration::CollaborationService;
pub use integrations::IntegrationService;
pub use market::MarketService;
pub use platform::PlatformService;
pub use visualization::VisualizationService;
pub use webhooks::WebhookService;
