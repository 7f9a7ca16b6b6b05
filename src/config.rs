//! Construction-time configuration for the Clockk client.

use crate::auth::TokenSet;

/// Configuration for a [`Clockk`](crate::Clockk) instance.
///
/// `api_url` is the base URL of the Clockk service, without a trailing
/// slash (e.g. `https://app.clockk.com`). `token` seeds the session for
/// callers that already hold one; otherwise the first call must be
/// [`exchange_code_for_token`](crate::Clockk::exchange_code_for_token).
/// `customer_id` identifies the tenant and is required for customer-scoped
/// calls (project listing, action creation).
#[derive(Debug, Clone)]
pub struct ClockkConfig {
    /// Base URL of the Clockk service.
    pub api_url: String,
    /// Initial session token, if already obtained.
    pub token: Option<TokenSet>,
    /// Tenant identifier for customer-scoped calls.
    pub customer_id: Option<String>,
}

impl ClockkConfig {
    /// Configuration for the given base URL, with no token and no customer.
    #[must_use]
    pub fn new(api_url: impl Into<String>) -> Self {
        Self { api_url: api_url.into(), token: None, customer_id: None }
    }

    /// Seed the session with an already-obtained token.
    #[must_use]
    pub fn with_token(mut self, token: TokenSet) -> Self {
        self.token = Some(token);
        self
    }

    /// Set the customer (tenant) identifier.
    #[must_use]
    pub fn with_customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }
}
