//! OAuth token types for the Clockk API.
//!
//! Clockk issues Doorkeeper-style bearer tokens from `POST /oauth/token`.
//! The client stores the token for the lifetime of the instance; it is never
//! refreshed or cleared by this crate, and expiry is advisory data only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An OAuth 2.0 token set as issued by Clockk's `/oauth/token` endpoint.
///
/// Immutable once produced. `created_at` travels as unix seconds on the
/// wire; `expires_in` is the advertised lifetime in seconds. Nothing in the
/// client enforces expiry — callers that want to pre-empt a rejected request
/// can consult [`TokenSet::is_expired`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenSet {
    /// Bearer access token sent in the `Authorization` header.
    pub access_token: String,

    /// Refresh token. Carried for the caller's benefit; this client never
    /// uses it.
    pub refresh_token: String,

    /// Token type (Clockk issues "Bearer").
    pub token_type: String,

    /// Advertised access token lifetime in seconds.
    pub expires_in: i64,

    /// Issue timestamp, unix seconds on the wire.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,

    /// Granted scopes, space-separated.
    pub scope: String,
}

impl TokenSet {
    /// Whether the token is past, or within `threshold_seconds` of, the
    /// expiry advertised at issue time.
    ///
    /// Advisory only: the Clockk client keeps using a stored token
    /// regardless, and the service is the authority on validity.
    #[must_use]
    pub fn is_expired(&self, threshold_seconds: i64) -> bool {
        let expires_at = self.created_at + chrono::Duration::seconds(self.expires_in);
        Utc::now() + chrono::Duration::seconds(threshold_seconds) >= expires_at
    }
}

/// Input to the authorization-code exchange.
///
/// The authorization code is captured out-of-band (Clockk redirects the user
/// to the integration's `redirect_uri` with `?code=...`); this crate only
/// performs the exchange itself.
#[derive(Debug, Clone)]
pub struct TokenExchangeClaims {
    /// Authorization code from the redirect callback.
    pub code: String,
    /// OAuth client id of the integration.
    pub client_id: String,
    /// OAuth client secret of the integration.
    pub client_secret: String,
    /// Redirect URI registered for the integration.
    pub redirect_uri: String,
}
