use crate::application::rate_limiter::RateLimiter;
use crate::config::Config;
use crate::constants::DEFAULT_RETRY_AFTER_SECS;
use crate::error::{AppError, ErrorDetail};
use crate::session::{Auth, TokenPair};
use crate::session::token::AuthState;
use crate::transport::http_client::{HttpTransport, QueryParams};
use crate::transport::response::NormalizedResponse;
use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Computes the backoff before attempt `exponent + 2`: base, 2x base, 4x
/// base and so on. The exponent is clamped so the shift cannot overflow.
fn backoff_delay(base_ms: u64, exponent: u32) -> Duration {
    Duration::from_millis(base_ms.saturating_mul(1u64 << exponent.min(16)))
}

/// Client-facing seam the domain services are generic over.
///
/// `execute` runs one logical request through the resilience pipeline; the
/// verb helpers are sugar over it.
#[async_trait]
pub trait ApiClient: Send + Sync {
    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: Option<QueryParams>,
        body: Option<Value>,
    ) -> Result<NormalizedResponse, AppError>;

    async fn get(&self, path: &str) -> Result<NormalizedResponse, AppError> {
        self.execute(Method::GET, path, None, None).await
    }

    async fn get_with_query(
        &self,
        path: &str,
        query: QueryParams,
    ) -> Result<NormalizedResponse, AppError> {
        self.execute(Method::GET, path, Some(query), None).await
    }

    async fn post(&self, path: &str, body: Value) -> Result<NormalizedResponse, AppError> {
        self.execute(Method::POST, path, None, Some(body)).await
    }

    async fn put(&self, path: &str, body: Value) -> Result<NormalizedResponse, AppError> {
        self.execute(Method::PUT, path, None, Some(body)).await
    }

    async fn delete(&self, path: &str) -> Result<NormalizedResponse, AppError> {
        self.execute(Method::DELETE, path, None, None).await
    }
}

/// The one client every request goes through.
///
/// Wraps [`HttpTransport`] with the resilience rules of the platform API:
/// client-side request spacing, Retry-After replays on 429, a single token
/// refresh on 401, fail-fast on 400 and exponential backoff for everything
/// else. Cheap to share behind an `Arc`.
pub struct RestClient {
    config: Arc<Config>,
    transport: HttpTransport,
    auth: Arc<Auth>,
    rate_limiter: Arc<RateLimiter>,
}

impl RestClient {
    pub fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let rate_limiter = Arc::new(RateLimiter::new(&config.rate_limiter));
        let auth = Arc::new(Auth::new(Arc::clone(&config), Arc::clone(&rate_limiter))?);
        let transport = HttpTransport::new(Arc::clone(&config), Arc::clone(&auth))?;
        Ok(Self {
            config,
            transport,
            auth,
            rate_limiter,
        })
    }

    #[must_use]
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    #[must_use]
    pub fn auth(&self) -> &Arc<Auth> {
        &self.auth
    }

    #[must_use]
    pub fn rate_limiter(&self) -> &Arc<RateLimiter> {
        &self.rate_limiter
    }

    /// Password grant against `/auth/token`
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<TokenPair, AppError> {
        self.auth.authenticate(username, password).await
    }

    /// Forces a refresh grant with the held refresh token
    pub async fn refresh_token(&self) -> Result<TokenPair, AppError> {
        self.auth.refresh().await
    }

    /// Current session lifecycle state
    pub async fn auth_state(&self) -> AuthState {
        self.auth.state().await
    }

    /// Drops the held token pair
    pub async fn logout(&self) {
        self.auth.logout().await;
    }
}

#[async_trait]
impl ApiClient for RestClient {
    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: Option<QueryParams>,
        body: Option<Value>,
    ) -> Result<NormalizedResponse, AppError> {
        // max_retries counts total attempts, so the budget is at least one
        let max_attempts = self.config.retry.max_retries.max(1);
        let rate_limit_budget = self.config.retry.rate_limit_max_retries;
        let mut attempts = 0u32;
        let mut rate_limit_hits = 0u32;
        let mut refreshed = false;

        loop {
            self.rate_limiter.wait().await;

            let raw = match self
                .transport
                .send(method.clone(), path, query.as_ref(), body.as_ref())
                .await
            {
                Ok(raw) => raw,
                Err(err) => {
                    attempts += 1;
                    if attempts >= max_attempts {
                        error!("{} {} failed after {} attempts: {}", method, path, attempts, err);
                        return Err(err);
                    }
                    let delay = backoff_delay(self.config.retry.backoff_base_ms, attempts - 1);
                    warn!(
                        "{} {} errored ({}), retrying in {:?} (attempt {}/{})",
                        method, path, err, delay, attempts, max_attempts
                    );
                    tokio::time::sleep(delay).await;
                    continue;
                }
            };

            let status = raw.status;
            debug!("Response status: {}", status);

            match status {
                StatusCode::TOO_MANY_REQUESTS => {
                    rate_limit_hits += 1;
                    if rate_limit_hits > rate_limit_budget {
                        error!(
                            "Rate limited on {} {} after {} replays, giving up",
                            method,
                            path,
                            rate_limit_hits - 1
                        );
                        return Err(AppError::RateLimited(ErrorDetail::from_status(
                            status, raw.json,
                        )));
                    }
                    // 429 replays do not consume the general retry budget
                    let wait = raw.retry_after_secs().unwrap_or(DEFAULT_RETRY_AFTER_SECS);
                    warn!(
                        "Rate limited on {} {}, replaying in {}s ({}/{})",
                        method, path, wait, rate_limit_hits, rate_limit_budget
                    );
                    tokio::time::sleep(Duration::from_secs(wait)).await;
                }
                StatusCode::UNAUTHORIZED => {
                    self.auth.mark_expired();
                    if !refreshed
                        && let Some(stale) = self.auth.access_token().await
                    {
                        refreshed = true;
                        warn!("401 on {} {}, refreshing access token", method, path);
                        match self.auth.refresh_if_current(Some(&stale)).await {
                            Ok(_) => continue,
                            Err(refresh_err) => {
                                debug!("Refresh after 401 failed: {refresh_err}");
                                return Err(AppError::AuthenticationFailed(
                                    ErrorDetail::from_status(status, raw.json),
                                ));
                            }
                        }
                    }
                    error!("Unauthorized on {} {}", method, path);
                    return Err(AppError::AuthenticationFailed(ErrorDetail::from_status(
                        status, raw.json,
                    )));
                }
                StatusCode::BAD_REQUEST => {
                    // Validation failures are terminal, retrying cannot fix the payload
                    return Err(AppError::ValidationFailed(ErrorDetail::from_status(
                        status, raw.json,
                    )));
                }
                _ if status.is_success() || status.is_redirection() => {
                    return Ok(NormalizedResponse::normalize(&raw));
                }
                _ => {
                    attempts += 1;
                    if attempts >= max_attempts {
                        error!(
                            "{} {} failed with {} after {} attempts",
                            method, path, status, attempts
                        );
                        return Err(AppError::Generic(ErrorDetail::from_status(
                            status, raw.json,
                        )));
                    }
                    let delay = backoff_delay(self.config.retry.backoff_base_ms, attempts - 1);
                    warn!(
                        "{} {} failed with {}, retrying in {:?} (attempt {}/{})",
                        method, path, status, delay, attempts, max_attempts
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("base_url", &self.config.rest_api.base_url)
            .finish()
    }
}
