//! # clockk-client
//!
//! Async Rust client for the [Clockk](https://www.clockk.com) time-tracking
//! API. It exchanges an OAuth authorization code for bearer tokens, performs
//! authenticated reads (current customer, project list), and submits
//! integration performed actions describing work a third-party integration
//! did against a Clockk resource.
//!
//! ## Example
//!
//! ```no_run
//! use clockk_client::{Clockk, ClockkConfig, TokenExchangeClaims};
//!
//! # async fn example() -> clockk_client::Result<()> {
//! let client = Clockk::new(
//!     ClockkConfig::new("https://app.clockk.com").with_customer_id("customer-uuid"),
//! )?;
//!
//! client
//!     .exchange_code_for_token(&TokenExchangeClaims {
//!         code: "code-from-redirect".into(),
//!         client_id: "integration-client-id".into(),
//!         client_secret: "integration-client-secret".into(),
//!         redirect_uri: "https://integration.example/callback".into(),
//!     })
//!     .await?;
//!
//! let projects = client.get_projects().await?;
//! # let _ = projects;
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod jsonapi;
pub mod resources;
pub mod types;

// Re-export the public surface.
pub use actions::IntegrationPerformedAction;
pub use auth::{TokenExchangeClaims, TokenSet};
pub use client::Clockk;
pub use config::ClockkConfig;
pub use errors::{ClockkError, Result};
pub use resources::{ClassifiedResource, ResourceKind};
pub use types::{Customer, Project};
