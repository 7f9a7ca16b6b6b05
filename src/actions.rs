//! Integration performed action payloads.
//!
//! Creating an integration performed action closes any open modal in the
//! Clockk UI, and the enclosed metadata is included the next time the
//! referenced resource is sent to the integration. The action code is the
//! identifier defined on the integration management page
//! (<https://app.clockk.com/integration-listings>).

use serde_json::{Map, Value};

use crate::jsonapi::{Document, Resource};
use crate::resources::ClassifiedResource;

/// Resource type tag for action payloads.
pub const ACTION_RESOURCE_TYPE: &str = "integration-performed-actions";

/// An integration performed action, ready to be serialized.
///
/// One action can reference any of the five resource kinds: the payload
/// carries a single foreign-key attribute whose name is derived from the
/// classified kind (`project-id`, `time-sheet-id`, ...), so there is one
/// payload shape rather than five.
#[derive(Debug, Clone)]
pub struct IntegrationPerformedAction {
    /// Action code identifier defined on the integration management page.
    pub action_code: String,
    /// The resource the action was performed against.
    pub resource: ClassifiedResource,
    /// Arbitrary JSON stored with the action. Max size 2KB; the service
    /// rejects larger payloads, this client does not pre-check.
    pub metadata: Value,
}

impl IntegrationPerformedAction {
    /// Assemble an action for the given classified resource.
    #[must_use]
    pub fn new(
        action_code: impl Into<String>,
        resource: ClassifiedResource,
        metadata: Value,
    ) -> Self {
        Self { action_code: action_code.into(), resource, metadata }
    }

    /// Build the outbound JSON:API document.
    ///
    /// Attributes are exactly `metadata`, `action-code`, and the kind-derived
    /// foreign key set to the resource id.
    #[must_use]
    pub fn to_document(&self) -> Document {
        let mut attributes = Map::with_capacity(3);
        attributes.insert("metadata".to_string(), self.metadata.clone());
        attributes.insert("action-code".to_string(), Value::String(self.action_code.clone()));
        attributes
            .insert(self.resource.kind.foreign_key(), Value::String(self.resource.id.clone()));

        Document::single(Resource { kind: ACTION_RESOURCE_TYPE.to_string(), id: None, attributes })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::resources::ResourceKind;

    #[test]
    fn builds_exact_attribute_set_for_project() {
        let action = IntegrationPerformedAction::new(
            "LINK_TASK_TYPE_TO_INTEGRATION",
            ClassifiedResource {
                kind: ResourceKind::Project,
                id: "96a770cd-b677-49dc-b733-f4b53197f81c".into(),
            },
            json!({"additionalInfo": "x"}),
        );

        let value = serde_json::to_value(action.to_document()).unwrap();
        assert_eq!(
            value,
            json!({
                "data": {
                    "type": "integration-performed-actions",
                    "attributes": {
                        "metadata": {"additionalInfo": "x"},
                        "action-code": "LINK_TASK_TYPE_TO_INTEGRATION",
                        "project-id": "96a770cd-b677-49dc-b733-f4b53197f81c"
                    }
                }
            })
        );
    }

    #[test]
    fn foreign_key_follows_classified_kind() {
        for (kind, key) in [
            (ResourceKind::TimeSheet, "time-sheet-id"),
            (ResourceKind::Client, "client-id"),
            (ResourceKind::TaskType, "task-type-id"),
        ] {
            let action = IntegrationPerformedAction::new(
                "CODE",
                ClassifiedResource { kind, id: "r-1".into() },
                json!({}),
            );
            let document = action.to_document();
            let value = serde_json::to_value(document).unwrap();
            let attributes = value["data"]["attributes"].as_object().unwrap();

            assert_eq!(attributes.len(), 3, "exactly one foreign key plus two fixed attributes");
            assert_eq!(attributes[key], json!("r-1"));
        }
    }
}
