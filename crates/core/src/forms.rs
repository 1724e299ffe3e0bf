//! Validated form input schemas.
//!
//! Each editable entity gets its own concrete schema type: the exact set of
//! fields the form submits, with the constraints checked *before* a network
//! payload or SQL statement is built from it. Both the admin service and the
//! form controllers in `marquee-client` validate through these types, so the
//! required-field rules cannot drift between the two.
//!
//! The constraint set is deliberately small: every field is a required string
//! with minimum length 1. Uniqueness and referential integrity live in the
//! database, not here.

use serde::{Deserialize, Serialize};

/// A validation failure for a single form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Wire name of the offending field (e.g. `imageUrl`).
    pub field: String,
    /// Human-readable message, shown inline next to the field.
    pub message: String,
}

/// Per-field validation errors for one form submission.
///
/// Empty `FormErrors` never escape [`FormSchema::validate`]; an `Err` always
/// carries at least one field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("validation failed for {}", self.fields().join(", "))]
pub struct FormErrors {
    pub errors: Vec<FieldError>,
}

impl FormErrors {
    /// True if no field failed validation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failed fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The message recorded for `field`, if any.
    #[must_use]
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Names of all failed fields, in declaration order.
    #[must_use]
    pub fn fields(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.field.as_str()).collect()
    }

    /// Record a required-field failure for `field` if `value` is empty.
    pub fn require(&mut self, field: &str, value: &str) {
        if value.is_empty() {
            self.errors.push(FieldError {
                field: field.to_string(),
                message: "Required".to_string(),
            });
        }
    }

    /// Convert into a result: `Ok(())` when no field failed.
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one field failed.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

/// A statically-typed form schema: the editable fields of one entity.
pub trait FormSchema: Serialize + Clone + Send + Sync + 'static {
    /// Display name of the entity, used in notification copy
    /// ("Billboard updated.").
    const ENTITY: &'static str;

    /// Message shown when deleting the entity fails because dependent
    /// records still reference it.
    const DELETE_DEPENDENCY_HINT: &'static str;

    /// Check the field constraints.
    ///
    /// # Errors
    ///
    /// Returns the per-field messages when any constraint fails. Callers must
    /// not build a payload from an invalid schema.
    fn validate(&self) -> Result<(), FormErrors>;
}

/// Editable fields of a store, as submitted by the settings form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSettings {
    pub name: String,
}

impl FormSchema for StoreSettings {
    const ENTITY: &'static str = "Store";
    const DELETE_DEPENDENCY_HINT: &'static str =
        "Make sure you removed all products and categories first.";

    fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();
        errors.require("name", &self.name);
        errors.into_result()
    }
}

/// Editable fields of a billboard.
///
/// Serialized with camelCase names (`imageUrl`) to match the JSON the admin
/// API accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillboardDraft {
    pub label: String,
    pub image_url: String,
}

impl FormSchema for BillboardDraft {
    const ENTITY: &'static str = "Billboard";
    const DELETE_DEPENDENCY_HINT: &'static str =
        "Make sure you removed all categories using this billboard first.";

    fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();
        errors.require("label", &self.label);
        errors.require("imageUrl", &self.image_url);
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_settings_valid() {
        let settings = StoreSettings {
            name: "Neon Outfitters".to_string(),
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_store_settings_empty_name() {
        let settings = StoreSettings::default();
        let errors = settings.validate().expect_err("empty name must fail");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message_for("name"), Some("Required"));
    }

    #[test]
    fn test_billboard_draft_all_fields_required() {
        let draft = BillboardDraft::default();
        let errors = draft.validate().expect_err("empty draft must fail");
        assert_eq!(errors.fields(), vec!["label", "imageUrl"]);
    }

    #[test]
    fn test_billboard_draft_partial() {
        let draft = BillboardDraft {
            label: "Summer sale".to_string(),
            image_url: String::new(),
        };
        let errors = draft.validate().expect_err("missing image must fail");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message_for("imageUrl"), Some("Required"));
        assert_eq!(errors.message_for("label"), None);
    }

    #[test]
    fn test_billboard_draft_wire_names() {
        let draft = BillboardDraft {
            label: "Summer sale".to_string(),
            image_url: "https://cdn.example.com/summer.png".to_string(),
        };
        let json = serde_json::to_value(&draft).expect("serialize");
        assert_eq!(json["label"], "Summer sale");
        assert_eq!(json["imageUrl"], "https://cdn.example.com/summer.png");
    }

    #[test]
    fn test_form_errors_display() {
        let draft = BillboardDraft::default();
        let errors = draft.validate().expect_err("must fail");
        assert_eq!(errors.to_string(), "validation failed for label, imageUrl");
    }
}
