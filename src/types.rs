//! Typed responses for Clockk read operations.
//!
//! Built from flattened JSON:API resources, so each struct is `id` plus the
//! attribute map. Attributes beyond the ones modeled here are captured in
//! `extra` rather than dropped — the service adds fields over time and a
//! resource may need to round-trip back into
//! [`create_integration_performed_action`](crate::Clockk::create_integration_performed_action).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The customer (tenant) behind the current token, from `GET /oauth/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Customer identifier, used in customer-scoped URLs.
    pub id: String,

    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Remaining attributes, keys as on the wire.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A Clockk project, from `GET /api/v1/{customer_id}/projects`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project identifier.
    pub id: String,

    /// Project name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Display color. Present (possibly null) on every project; it is also
    /// the attribute that classifies a resource as a project.
    #[serde(default)]
    pub color: Option<String>,

    /// Remaining attributes, keys as on the wire.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
