use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

fn default_token_type() -> String {
    String::from("Bearer")
}

/// Where the session currently stands in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthState {
    /// No token pair is held
    Unauthenticated,
    /// A token pair is held and believed valid
    Authenticated,
    /// A token pair is held but a 401 was observed or its lifetime passed
    Expired,
}

/// OAuth2 token pair as returned by the `/auth/token` endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// Access token sent as the Bearer credential on every request
    pub access_token: String,
    /// Refresh token exchanged for a new pair when the access token expires
    pub refresh_token: String,
    /// Lifetime of the access token in seconds
    #[serde(default)]
    pub expires_in: u64,
    /// Token type, normally "Bearer"
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// When the pair was received, set client side
    #[serde(skip, default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl TokenPair {
    /// Moment the access token stops being valid
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.created_at + chrono::Duration::seconds(self.expires_in as i64)
    }

    /// Whether the access token has expired, optionally treating it as
    /// expired `margin_secs` before its real lifetime ends.
    ///
    /// A pair with `expires_in == 0` never expires by clock; some token
    /// endpoints omit the field and expiry is then driven by 401 responses.
    #[must_use]
    pub fn is_expired(&self, margin_secs: Option<u64>) -> bool {
        if self.expires_in == 0 {
            return false;
        }
        let margin = chrono::Duration::seconds(margin_secs.unwrap_or(0) as i64);
        Utc::now() + margin >= self.expires_at()
    }

    /// Value for the Authorization header
    #[must_use]
    pub fn authorization_value(&self) -> String {
        if self.token_type.is_empty() {
            format!("Bearer {}", self.access_token)
        } else {
            format!("{} {}", self.token_type, self.access_token)
        }
    }
}
