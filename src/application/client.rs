//! High-level entry point for the FinanceAnalyst Pro API
//!
//! One facade owning a single [`RestClient`]; every service accessor hands
//! out a lightweight view over that shared connection, so the rate limiter
//! and session state apply across all of them.
//!
//! # Example
//! ```ignore
//! use financeanalyst_client::application::client::FinanceAnalystClient;
//! use financeanalyst_client::config::Config;
//!
//! let client = FinanceAnalystClient::new(Config::new())?;
//! let quote = client.market().get_quote("AAPL").await?;
//! println!("{} last traded at {:?}", quote.symbol, quote.price);
//! ```

use crate::application::rate_limiter::RateLimiter;
use crate::application::services::{
    AiServiceImpl, AnalyticsServiceImpl, CollaborationServiceImpl, IntegrationServiceImpl,
    MarketServiceImpl, PlatformServiceImpl, VisualizationServiceImpl, WebhookServiceImpl,
};
use crate::config::Config;
use crate::error::AppError;
use crate::session::TokenPair;
use crate::session::token::AuthState;
use crate::transport::rest_client::RestClient;
use std::sync::Arc;

/// Facade over every service of the platform
///
/// Construction wires the transport, session and rate limiter once; the
/// accessors are cheap and can be called per request.
#[derive(Debug)]
pub struct FinanceAnalystClient {
    client: Arc<RestClient>,
}

impl FinanceAnalystClient {
    /// Creates a client from an explicit configuration
    pub fn new(config: Config) -> Result<Self, AppError> {
        Ok(Self {
            client: Arc::new(RestClient::new(config)?),
        })
    }

    /// Creates a client from the `FA_*` environment variables
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(Config::new())
    }

    /// Creates a client with just an API key and default settings
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self, AppError> {
        Self::new(Config::with_api_key(api_key))
    }

    /// Market data: quotes, history, profiles, statements, indices
    #[must_use]
    pub fn market(&self) -> MarketServiceImpl<RestClient> {
        MarketServiceImpl::new(Arc::clone(&self.client))
    }

    /// Server-side analytics: portfolio, risk, options, stress, DCF
    #[must_use]
    pub fn analytics(&self) -> AnalyticsServiceImpl<RestClient> {
        AnalyticsServiceImpl::new(Arc::clone(&self.client))
    }

    /// AI endpoints: insights, predictions, sentiment
    #[must_use]
    pub fn ai(&self) -> AiServiceImpl<RestClient> {
        AiServiceImpl::new(Arc::clone(&self.client))
    }

    /// Event webhook management
    #[must_use]
    pub fn webhooks(&self) -> WebhookServiceImpl<RestClient> {
        WebhookServiceImpl::new(Arc::clone(&self.client))
    }

    /// Third-party provider bridges
    #[must_use]
    pub fn integrations(&self) -> IntegrationServiceImpl<RestClient> {
        IntegrationServiceImpl::new(Arc::clone(&self.client))
    }

    /// Comments and version snapshots
    #[must_use]
    pub fn collaboration(&self) -> CollaborationServiceImpl<RestClient> {
        CollaborationServiceImpl::new(Arc::clone(&self.client))
    }

    /// Server-side visualizations and exports
    #[must_use]
    pub fn visualization(&self) -> VisualizationServiceImpl<RestClient> {
        VisualizationServiceImpl::new(Arc::clone(&self.client))
    }

    /// Health checks and usage counters
    #[must_use]
    pub fn platform(&self) -> PlatformServiceImpl<RestClient> {
        PlatformServiceImpl::new(Arc::clone(&self.client))
    }

    /// The underlying client, for callers that need raw requests
    #[must_use]
    pub fn api(&self) -> &Arc<RestClient> {
        &self.client
    }

    /// Configuration the client was built with
    #[must_use]
    pub fn config(&self) -> &Arc<Config> {
        self.client.config()
    }

    /// Rate limiter shared by every service
    #[must_use]
    pub fn rate_limiter(&self) -> &Arc<RateLimiter> {
        self.client.rate_limiter()
    }

    /// Logs in with an explicit username and password
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<TokenPair, AppError> {
        self.client.authenticate(username, password).await
    }

    /// Forces a refresh grant with the held refresh token
    pub async fn refresh_token(&self) -> Result<TokenPair, AppError> {
        self.client.refresh_token().await
    }

    /// Current session lifecycle state
    pub async fn auth_state(&self) -> AuthState {
        self.client.auth_state().await
    }

    /// Drops the held token pair
    pub async fn logout(&self) {
        self.client.logout().await;
    }
}
