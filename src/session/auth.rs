use crate::application::rate_limiter::RateLimiter;
use crate::config::Config;
use crate::constants::{API_KEY_HEADER, TOKEN_EXPIRY_MARGIN_SECS, USER_AGENT};
use crate::error::{AppError, ErrorDetail};
use crate::session::token::{AuthState, TokenPair};
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Manages the OAuth2 session against `/auth/token`.
///
/// Holds the token pair behind a `tokio::sync::RwLock`. Refreshes run under
/// the write lock, so any number of concurrent callers produce exactly one
/// network exchange; the losers observe the replaced pair and reuse it.
pub struct Auth {
    config: Arc<Config>,
    http: reqwest::Client,
    rate_limiter: Arc<RateLimiter>,
    tokens: RwLock<Option<TokenPair>>,
    expired: AtomicBool,
}

impl Auth {
    pub fn new(config: Arc<Config>, rate_limiter: Arc<RateLimiter>) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;
        Ok(Self {
            config,
            http,
            rate_limiter,
            tokens: RwLock::new(None),
            expired: AtomicBool::new(false),
        })
    }

    /// Performs the password grant and stores the resulting pair
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<TokenPair, AppError> {
        let mut payload = json!({
            "grant_type": "password",
            "username": username,
            "password": password,
        });
        self.attach_client_credentials(&mut payload);

        let pair = self.token_grant(&payload).await?;
        let mut guard = self.tokens.write().await;
        *guard = Some(pair.clone());
        self.expired.store(false, Ordering::SeqCst);
        info!("✓ Authenticated as {}", username);
        Ok(pair)
    }

    /// Password grant using the credentials from configuration
    pub async fn login(&self) -> Result<TokenPair, AppError> {
        let username = self.config.credentials.username.clone().ok_or_else(|| {
            AppError::AuthenticationFailed(ErrorDetail::new("FA_USERNAME is not configured"))
        })?;
        let password = self.config.credentials.password.clone().ok_or_else(|| {
            AppError::AuthenticationFailed(ErrorDetail::new("FA_PASSWORD is not configured"))
        })?;
        self.authenticate(&username, &password).await
    }

    /// Exchanges the held refresh token for a new pair
    pub async fn refresh(&self) -> Result<TokenPair, AppError> {
        self.refresh_if_current(None).await
    }

    /// Refreshes the pair unless someone else already did.
    ///
    /// `observed` is the access token the caller saw fail. When it no longer
    /// matches the stored one, a concurrent caller has already swapped the
    /// pair in and the stored pair is returned without another exchange. A
    /// failed exchange clears the stored pair, so the session drops back to
    /// unauthenticated rather than retrying a dead refresh token forever.
    pub async fn refresh_if_current(
        &self,
        observed: Option<&str>,
    ) -> Result<TokenPair, AppError> {
        let mut guard = self.tokens.write().await;
        let current = match guard.as_ref() {
            Some(pair) => pair,
            None => {
                return Err(AppError::AuthenticationFailed(ErrorDetail::new(
                    "no refresh token held",
                )));
            }
        };
        if let Some(observed) = observed
            && current.access_token != observed
        {
            debug!("Token already refreshed by a concurrent caller");
            return Ok(current.clone());
        }

        let mut payload = json!({
            "grant_type": "refresh_token",
            "refresh_token": current.refresh_token,
        });
        self.attach_client_credentials(&mut payload);

        match self.token_grant(&payload).await {
            Ok(pair) => {
                *guard = Some(pair.clone());
                self.expired.store(false, Ordering::SeqCst);
                info!("✓ Access token refreshed");
                Ok(pair)
            }
            Err(err) => {
                *guard = None;
                self.expired.store(false, Ordering::SeqCst);
                warn!("Token refresh failed: {err}");
                Err(err)
            }
        }
    }

    /// Access token currently held, if any
    pub async fn access_token(&self) -> Option<String> {
        let guard = self.tokens.read().await;
        guard.as_ref().map(|pair| pair.access_token.clone())
    }

    /// Copy of the full token pair currently held, if any
    pub async fn token_pair(&self) -> Option<TokenPair> {
        let guard = self.tokens.read().await;
        guard.clone()
    }

    /// Current lifecycle state of the session
    pub async fn state(&self) -> AuthState {
        let guard = self.tokens.read().await;
        match guard.as_ref() {
            None => AuthState::Unauthenticated,
            Some(pair) => {
                if self.expired.load(Ordering::SeqCst)
                    || pair.is_expired(Some(TOKEN_EXPIRY_MARGIN_SECS))
                {
                    AuthState::Expired
                } else {
                    AuthState::Authenticated
                }
            }
        }
    }

    /// Records that a request observed a 401 with the held token
    pub fn mark_expired(&self) {
        self.expired.store(true, Ordering::SeqCst);
    }

    /// Drops the held pair
    pub async fn logout(&self) {
        let mut guard = self.tokens.write().await;
        *guard = None;
        self.expired.store(false, Ordering::SeqCst);
        info!("✓ Logged out");
    }

    fn attach_client_credentials(&self, payload: &mut Value) {
        if let Some(client_id) = &self.config.credentials.client_id {
            payload["client_id"] = json!(client_id);
        }
        if let Some(client_secret) = &self.config.credentials.client_secret {
            payload["client_secret"] = json!(client_secret);
        }
    }

    async fn token_grant(&self, payload: &Value) -> Result<TokenPair, AppError> {
        self.rate_limiter.wait().await;
        let url = format!(
            "{}/auth/token",
            self.config.rest_api.base_url.trim_end_matches('/')
        );
        debug!("POST {url}");

        let mut request = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json");
        if !self.config.credentials.api_key.is_empty() {
            request = request.header(API_KEY_HEADER, &self.config.credentials.api_key);
        }

        let response = request.json(payload).send().await?;
        let status = response.status();
        if status.is_success() {
            let pair: TokenPair = response.json().await?;
            Ok(pair)
        } else {
            let body: Option<Value> = response.json().await.ok();
            Err(AppError::AuthenticationFailed(ErrorDetail::from_status(
                status, body,
            )))
        }
    }
}

impl std::fmt::Debug for Auth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Auth")
            .field("base_url", &self.config.rest_api.base_url)
            .field("expired", &self.expired.load(Ordering::SeqCst))
            .finish()
    }
}
