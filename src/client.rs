//! The Clockk API client.
//!
//! Every public operation funnels through one of two authenticated
//! chokepoints (`get_json` / `post_json`): required session state is checked
//! before any network I/O, exactly one HTTP round trip is issued, and the
//! response is classified by status code. There is no retry, no token
//! refresh, and no caching — each call fully succeeds or fully fails.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use crate::actions::IntegrationPerformedAction;
use crate::auth::{TokenExchangeClaims, TokenSet};
use crate::config::ClockkConfig;
use crate::errors::{ClockkError, Result};
use crate::jsonapi::Document;
use crate::resources::ClassifiedResource;
use crate::types::{Customer, Project};

const JSONAPI_CONTENT_TYPE: &str = "application/vnd.api+json";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Async client for the Clockk API.
///
/// Owns the session for its lifetime: the base URL and customer id are fixed
/// at construction, and the token is written only by a successful
/// [`exchange_code_for_token`](Self::exchange_code_for_token). The token
/// write site is guarded, so concurrent reads are safe; a read overlapping
/// an in-flight exchange observes either the old or the new token.
pub struct Clockk {
    http: reqwest::Client,
    api_url: String,
    customer_id: Option<String>,
    token: RwLock<Option<TokenSet>>,
}

impl Clockk {
    /// Create a client from the given configuration.
    ///
    /// # Errors
    ///
    /// [`ClockkError::Config`] when the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: ClockkConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| ClockkError::Config(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            api_url: config.api_url,
            customer_id: config.customer_id,
            token: RwLock::new(config.token),
        })
    }

    /// Snapshot of the current session token.
    pub async fn token(&self) -> Option<TokenSet> {
        self.token.read().await.clone()
    }

    /// Exchange an OAuth authorization code for a token set.
    ///
    /// Issues one unauthenticated `POST /oauth/token` with the claims as
    /// query parameters. On success the token is stored into the session
    /// before being returned; every subsequent call authenticates with it.
    /// This is the only operation permitted before a token exists and the
    /// only one that mutates the session.
    ///
    /// # Errors
    ///
    /// [`ClockkError::Transport`] on connection failure,
    /// [`ClockkError::RemoteApi`] with the service's own error document on a
    /// non-2xx status, [`ClockkError::MalformedResponse`] when the body is
    /// not valid JSON or not a token.
    #[instrument(skip(self, claims), fields(client_id = %claims.client_id))]
    pub async fn exchange_code_for_token(
        &self,
        claims: &TokenExchangeClaims,
    ) -> Result<TokenSet> {
        let url = format!("{}/oauth/token", self.api_url);
        debug!(%url, "exchanging authorization code for token");

        let response = self
            .http
            .post(&url)
            .query(&[
                ("client_id", claims.client_id.as_str()),
                ("client_secret", claims.client_secret.as_str()),
                ("grant_type", "authorization_code"),
                ("code", claims.code.as_str()),
                ("redirect_uri", claims.redirect_uri.as_str()),
            ])
            .send()
            .await?;

        let body = Self::parse_body(response).await?;
        let token: TokenSet = serde_json::from_value(body).map_err(|err| {
            ClockkError::MalformedResponse(format!("token response has unexpected shape: {err}"))
        })?;

        *self.token.write().await = Some(token.clone());
        Ok(token)
    }

    /// Fetch the customer behind the current token (`GET /oauth/me`).
    ///
    /// # Errors
    ///
    /// [`ClockkError::Config`] when no token is set; otherwise as classified
    /// by the request executor.
    #[instrument(skip(self))]
    pub async fn get_customer(&self) -> Result<Customer> {
        self.get_json("/oauth/me").await
    }

    /// List the customer's projects
    /// (`GET /api/v1/{customer_id}/projects`).
    ///
    /// # Errors
    ///
    /// [`ClockkError::Config`] when no token or customer id is set;
    /// otherwise as classified by the request executor.
    #[instrument(skip(self))]
    pub async fn get_projects(&self) -> Result<Vec<Project>> {
        let path = self.customer_path("projects")?;
        self.get_json(&path).await
    }

    /// Create an integration performed action against a resource previously
    /// supplied by Clockk.
    ///
    /// The resource's kind is inferred from its attributes (see
    /// [`ResourceKind::classify`](crate::ResourceKind::classify)), the
    /// payload is assembled with the kind-derived foreign key, and the
    /// result is the created action as a flattened attribute map.
    ///
    /// `metadata` is arbitrary JSON stored with the action, at most 2KB —
    /// the service rejects larger payloads.
    ///
    /// # Errors
    ///
    /// [`ClockkError::Classification`] when the resource shape is not
    /// recognized, [`ClockkError::Config`] when no token or customer id is
    /// set; otherwise as classified by the request executor.
    #[instrument(skip(self, resource, metadata))]
    pub async fn create_integration_performed_action(
        &self,
        action_code: &str,
        resource: &Value,
        metadata: Value,
    ) -> Result<Value> {
        let classified = ClassifiedResource::from_value(resource)?;
        let action = IntegrationPerformedAction::new(action_code, classified, metadata);
        let path = self.customer_path("integration-performed-actions")?;
        self.post_json(&path, &action.to_document()).await
    }

    /// Authenticated GET: one round trip, response deserialized through the
    /// JSON:API flattener.
    #[instrument(skip(self), fields(path = %path))]
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let access_token = self.require_token().await?;
        let url = format!("{}{}", self.api_url, path);
        debug!(%url, "GET request");

        let response = self.http.get(&url).header("Authorization", access_token).send().await?;
        Self::deserialize_document(Self::parse_body(response).await?)
    }

    /// Authenticated POST of a JSON:API document: one round trip, response
    /// deserialized through the JSON:API flattener.
    #[instrument(skip(self, document), fields(path = %path))]
    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        document: &Document,
    ) -> Result<T> {
        let access_token = self.require_token().await?;
        let url = format!("{}{}", self.api_url, path);
        debug!(%url, "POST request");

        // Content-Type before `json()`: reqwest appends on repeated
        // `header()` calls and `json()` only fills the header when absent,
        // so this is the one ordering that sends a single JSON:API value.
        let response = self
            .http
            .post(&url)
            .header("Authorization", access_token)
            .header(reqwest::header::CONTENT_TYPE, JSONAPI_CONTENT_TYPE)
            .json(document)
            .send()
            .await?;
        Self::deserialize_document(Self::parse_body(response).await?)
    }

    /// Token precondition: checked before dispatch, never after failure.
    async fn require_token(&self) -> Result<String> {
        self.token
            .read()
            .await
            .as_ref()
            .map(|token| token.access_token.clone())
            .ok_or_else(|| {
                ClockkError::Config(
                    "token must be set in the configuration or obtained via \
                     exchange_code_for_token"
                        .to_string(),
                )
            })
    }

    /// Build a customer-scoped path, failing fast when no customer id was
    /// configured.
    fn customer_path(&self, suffix: &str) -> Result<String> {
        let customer_id = self.customer_id.as_deref().ok_or_else(|| {
            ClockkError::Config("customer_id must be set in the configuration".to_string())
        })?;
        Ok(format!("/api/v1/{customer_id}/{suffix}"))
    }

    /// Classify a response by status code and parse its body.
    ///
    /// 2xx yields the parsed body; any other status rejects with the parsed
    /// body verbatim. A body that is not valid JSON is malformed in either
    /// branch.
    async fn parse_body(response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        let text = response.text().await?;

        let body: Value = serde_json::from_str(&text).map_err(|err| {
            ClockkError::MalformedResponse(format!(
                "status {status} with non-JSON body: {err}"
            ))
        })?;

        if status.is_success() {
            Ok(body)
        } else {
            warn!(%status, "Clockk API rejected the request");
            Err(ClockkError::RemoteApi { status: status.as_u16(), body })
        }
    }

    /// Deserialize a parsed body as a JSON:API document and flatten it into
    /// the caller's type.
    fn deserialize_document<T: DeserializeOwned>(body: Value) -> Result<T> {
        let document: Document = serde_json::from_value(body).map_err(|err| {
            ClockkError::MalformedResponse(format!("response is not a JSON:API document: {err}"))
        })?;

        serde_json::from_value(document.flatten()).map_err(|err| {
            ClockkError::MalformedResponse(format!("unexpected resource shape: {err}"))
        })
    }
}
