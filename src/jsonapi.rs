//! Minimal JSON:API document envelope.
//!
//! Clockk speaks JSON:API (`application/vnd.api+json`): every request and
//! response body is `{ "data": { "type", "id", "attributes" } }`, or an
//! array of such resource objects for list endpoints. This module owns the
//! envelope; [`flatten`](Document::flatten) collapses it into the plain
//! attribute maps the rest of the crate works with.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A JSON:API document holding one or many resource objects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// Primary data of the document.
    pub data: PrimaryData,
}

/// Primary data: a single resource object or a collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PrimaryData {
    /// A single resource object.
    One(Resource),
    /// A collection of resource objects.
    Many(Vec<Resource>),
}

/// A JSON:API resource object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Resource {
    /// Resource type tag (e.g. `projects`, `integration-performed-actions`).
    #[serde(rename = "type")]
    pub kind: String,

    /// Resource identifier. Absent on outbound creation payloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Attribute map, keys exactly as on the wire (dasherized).
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

impl Document {
    /// Wrap a single resource object.
    #[must_use]
    pub fn single(resource: Resource) -> Self {
        Self { data: PrimaryData::One(resource) }
    }

    /// Collapse the document into plain JSON: a single resource becomes an
    /// object holding `id` plus its attributes (attribute keys verbatim), a
    /// collection becomes an array of such objects.
    #[must_use]
    pub fn flatten(self) -> Value {
        match self.data {
            PrimaryData::One(resource) => flatten_resource(resource),
            PrimaryData::Many(resources) => {
                Value::Array(resources.into_iter().map(flatten_resource).collect())
            }
        }
    }
}

fn flatten_resource(resource: Resource) -> Value {
    let mut flat = Map::with_capacity(resource.attributes.len() + 1);
    if let Some(id) = resource.id {
        flat.insert("id".to_string(), Value::String(id));
    }
    flat.extend(resource.attributes);
    Value::Object(flat)
}
