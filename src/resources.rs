//! Clockk resource classification.
//!
//! Resources handed back to an integration (inside a Clockk action request)
//! arrive as opaque JSON objects. Which kind of resource an object is gets
//! inferred from which distinguishing attribute it carries, checked in a
//! fixed precedence order — resources can carry overlapping optional fields
//! from prior API responses, so the order is part of the contract.

use serde_json::Value;

use crate::errors::{ClockkError, Result};

/// The five Clockk resource kinds an integration performed action can
/// reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// A project (`color` attribute).
    Project,
    /// A time sheet (`time_sheet_date` attribute).
    TimeSheet,
    /// A time sheet entry (`duration` attribute).
    TimeSheetEntry,
    /// A client (`notes` attribute).
    Client,
    /// A task type (`description` attribute).
    TaskType,
}

/// Classification order: first matching attribute wins.
const DISCRIMINANTS: [(&str, ResourceKind); 5] = [
    ("color", ResourceKind::Project),
    ("time_sheet_date", ResourceKind::TimeSheet),
    ("duration", ResourceKind::TimeSheetEntry),
    ("notes", ResourceKind::Client),
    ("description", ResourceKind::TaskType),
];

impl ResourceKind {
    /// Dasherized type tag as used on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::TimeSheet => "time-sheet",
            Self::TimeSheetEntry => "time-sheet-entry",
            Self::Client => "client",
            Self::TaskType => "task-type",
        }
    }

    /// Foreign-key attribute name referencing a resource of this kind in an
    /// integration performed action payload (e.g. `project-id`).
    #[must_use]
    pub fn foreign_key(self) -> String {
        format!("{}-id", self.as_str())
    }

    /// Infer the resource kind from an opaque resource object.
    ///
    /// The check is structural: an attribute counts as present when its key
    /// exists on the object, whatever the value (including `null`).
    ///
    /// # Errors
    ///
    /// [`ClockkError::Classification`] when the object carries none of the
    /// distinguishing attributes — i.e. it was mutated from the shape Clockk
    /// originally supplied.
    pub fn classify(resource: &Value) -> Result<Self> {
        let object = resource.as_object().ok_or_else(|| {
            ClockkError::Classification("resource must be a JSON object".to_string())
        })?;

        DISCRIMINANTS
            .iter()
            .find(|(attribute, _)| object.contains_key(*attribute))
            .map(|&(_, kind)| kind)
            .ok_or_else(|| {
                ClockkError::Classification(
                    "invalid resource; this value should not be modified from the version \
                     supplied in the initial Clockk action request"
                        .to_string(),
                )
            })
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resource whose kind and identity have been resolved.
///
/// Ephemeral: produced by classification and consumed immediately by the
/// action payload builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedResource {
    /// Inferred resource kind.
    pub kind: ResourceKind,
    /// The resource's `id` as supplied by Clockk.
    pub id: String,
}

impl ClassifiedResource {
    /// Classify an opaque resource object and extract its identity.
    ///
    /// # Errors
    ///
    /// [`ClockkError::Classification`] when the kind cannot be inferred or
    /// the object lacks a string `id`.
    pub fn from_value(resource: &Value) -> Result<Self> {
        let kind = ResourceKind::classify(resource)?;
        let id = resource
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                ClockkError::Classification(format!("{kind} resource is missing its id"))
            })?
            .to_string();

        Ok(Self { kind, id })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn classifies_each_kind_by_its_attribute() {
        let cases = [
            (json!({"color": "#ff0000"}), ResourceKind::Project),
            (json!({"time_sheet_date": "2024-03-01"}), ResourceKind::TimeSheet),
            (json!({"duration": 3600}), ResourceKind::TimeSheetEntry),
            (json!({"notes": "net 30"}), ResourceKind::Client),
            (json!({"description": "Elixir rocks"}), ResourceKind::TaskType),
        ];

        for (resource, expected) in cases {
            assert_eq!(ResourceKind::classify(&resource).unwrap(), expected);
        }
    }

    #[test]
    fn precedence_color_beats_notes() {
        // A project fetched with embedded client fields still classifies as
        // a project.
        let resource = json!({"color": "#00ff00", "notes": "overlapping"});
        assert_eq!(ResourceKind::classify(&resource).unwrap(), ResourceKind::Project);
    }

    #[test]
    fn null_attribute_still_counts_as_present() {
        let resource = json!({"duration": null});
        assert_eq!(ResourceKind::classify(&resource).unwrap(), ResourceKind::TimeSheetEntry);
    }

    #[test]
    fn unknown_shape_is_a_classification_error() {
        let resource = json!({"id": "x", "name": "no discriminant here"});
        let err = ResourceKind::classify(&resource).unwrap_err();
        assert!(matches!(err, ClockkError::Classification(_)));
    }

    #[test]
    fn non_object_is_a_classification_error() {
        let err = ResourceKind::classify(&json!("just a string")).unwrap_err();
        assert!(matches!(err, ClockkError::Classification(_)));
    }

    #[test]
    fn foreign_keys_are_dasherized_with_id_suffix() {
        assert_eq!(ResourceKind::Project.foreign_key(), "project-id");
        assert_eq!(ResourceKind::TimeSheet.foreign_key(), "time-sheet-id");
        assert_eq!(ResourceKind::TimeSheetEntry.foreign_key(), "time-sheet-entry-id");
        assert_eq!(ResourceKind::Client.foreign_key(), "client-id");
        assert_eq!(ResourceKind::TaskType.foreign_key(), "task-type-id");
    }

    #[test]
    fn classified_resource_extracts_id() {
        let resource = json!({
            "id": "96a770cd-b677-49dc-b733-f4b53197f81c",
            "name": "Programming",
            "description": "Elixir rocks"
        });

        let classified = ClassifiedResource::from_value(&resource).unwrap();
        assert_eq!(classified.kind, ResourceKind::TaskType);
        assert_eq!(classified.id, "96a770cd-b677-49dc-b733-f4b53197f81c");
    }

    #[test]
    fn missing_id_is_a_classification_error() {
        let err = ClassifiedResource::from_value(&json!({"color": "#fff"})).unwrap_err();
        assert!(matches!(err, ClockkError::Classification(_)));
    }
}
