//! # FinanceAnalyst Client Prelude
//!
//! This module provides a convenient way to import the most commonly used
//! types and traits from the library. By importing this prelude, you get
//! access to everything needed for most interactions with the platform.
//!
//! ## Usage
//!
//! ```rust
//! use financeanalyst_client::prelude::*;
//!
//! let config = Config::with_api_key("demo");
//! // ... etc
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the FinanceAnalyst Pro client
pub use crate::config::{Config, Credentials, RateLimiterConfig, RestApiConfig, RetryConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, ErrorDetail};

// ============================================================================
// CLIENT AND TRANSPORT
// ============================================================================

/// High-level facade over every platform service
pub use crate::application::client::FinanceAnalystClient;

/// Client trait the services are generic over
pub use crate::transport::rest_client::ApiClient;

/// Resilient REST client behind the facade
pub use crate::transport::rest_client::RestClient;

/// Normalized response envelope
pub use crate::transport::response::NormalizedResponse;

/// Query parameter pairs for GET requests
pub use crate::transport::http_client::QueryParams;

// ============================================================================
// AUTHENTICATION AND SESSION MANAGEMENT
// ============================================================================

/// Session and token management
pub use crate::session::auth::Auth;

/// Token pair and session lifecycle state
pub use crate::session::token::{AuthState, TokenPair};

// ============================================================================
// CORE SERVICES (TRAITS)
// ============================================================================

/// Service trait for market data operations
pub use crate::application::services::MarketService;

/// Service trait for server-side analytics
pub use crate::application::services::AnalyticsService;

/// Service trait for the AI endpoints
pub use crate::application::services::AiService;

/// Service trait for webhook management
pub use crate::application::services::WebhookService;

/// Service trait for provider integrations
pub use crate::application::services::IntegrationService;

/// Service trait for comments and versions
pub use crate::application::services::CollaborationService;

/// Service trait for visualizations and exports
pub use crate::application::services::VisualizationService;

/// Service trait for platform utilities
pub use crate::application::services::PlatformService;

// ============================================================================
// SERVICE IMPLEMENTATIONS
// ============================================================================

/// Market data service implementation
pub use crate::application::services::market_service::MarketServiceImpl;

/// Analytics service implementation
pub use crate::application::services::analytics_service::AnalyticsServiceImpl;

/// AI service implementation
pub use crate::application::services::ai_service::AiServiceImpl;

/// Webhook service implementation
pub use crate::application::services::webhook_service::WebhookServiceImpl;

/// Integration service implementation
pub use crate::application::services::integration_service::IntegrationServiceImpl;

/// Collaboration service implementation
pub use crate::application::services::collaboration_service::CollaborationServiceImpl;

/// Visualization service implementation
pub use crate::application::services::visualization_service::VisualizationServiceImpl;

/// Platform service implementation
pub use crate::application::services::platform_service::PlatformServiceImpl;

// ============================================================================
// MARKET MODELS
// ============================================================================

/// Market data models
pub use crate::application::models::market::{
    CompanyProfile, IndexQuote, Quote, ReportingPeriod, StatementKind,
};

// ============================================================================
// ANALYTICS MODELS
// ============================================================================

/// Analytics request and report models
pub use crate::application::models::analytics::{
    DcfRequest, DcfValuation, DerivativePosition, DerivativesReport, IndustryBenchmarks,
    OptionContract, OptionPricing, OptionType, Portfolio, PortfolioAnalysis, PortfolioAsset,
    RiskMethod, RiskReport, StressScenario, StressTestReport,
};

// ============================================================================
// AI MODELS
// ============================================================================

/// AI request and report models
pub use crate::application::models::ai::{
    Forecast, ForecastModel, InsightReport, SentimentScore, SentimentSource,
};

// ============================================================================
// WEBHOOK, INTEGRATION AND COLLABORATION MODELS
// ============================================================================

/// Webhook models
pub use crate::application::models::webhooks::{Webhook, WebhookRegistration};

/// Integration models
pub use crate::application::models::integrations::IntegrationStatus;

/// Collaboration models
pub use crate::application::models::collaboration::{Comment, NewComment, VersionRecord};

// ============================================================================
// VISUALIZATION AND PLATFORM MODELS
// ============================================================================

/// Visualization and export models
pub use crate::application::models::visualization::{
    ChartKind, ExportFormat, ExportJob, ExportRequest, Visualization, VisualizationSpec,
};

/// Platform utility models
pub use crate::application::models::platform::{HealthStatus, UsageStats};

// ============================================================================
// PRESENTATION LAYER
// ============================================================================

/// Column-keyed table built from record payloads
pub use crate::presentation::table::DataTable;

// ============================================================================
// UTILITIES
// ============================================================================

/// Rate limiting utilities
pub use crate::application::rate_limiter::RateLimiter;

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json::{Value, json};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::{DateTime, Utc};

/// Re-export reqwest types used in the public API
pub use reqwest::{Method, StatusCode};
