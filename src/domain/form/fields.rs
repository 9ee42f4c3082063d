//! Form field values and the user-event vocabulary.
//!
//! `FormFields` is the small record the whole flow revolves around.
//! `FieldChange` enumerates the edits a user can make on the input screen,
//! and `FieldErrors` carries validation messages keyed by field.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The editable values of a contact form.
///
/// All fields start empty. `plans` is a multi-select and preserves the
/// order in which plans were chosen.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub service: String,
    pub category: String,
    pub plans: Vec<String>,
    pub message: String,
}

impl FormFields {
    /// Returns true if every field is empty (a freshly started form).
    pub fn is_blank(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.service.is_empty()
            && self.category.is_empty()
            && self.plans.is_empty()
            && self.message.is_empty()
    }
}

/// The fields of the contact form, in display order.
///
/// Used as the key type for validation errors and for field labels.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Email,
    Service,
    Category,
    Plans,
    Message,
}

impl FormField {
    /// Returns all fields in display order.
    pub fn all() -> &'static [FormField] {
        &[
            FormField::Name,
            FormField::Email,
            FormField::Service,
            FormField::Category,
            FormField::Plans,
            FormField::Message,
        ]
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email address",
            FormField::Service => "Service",
            FormField::Category => "Category",
            FormField::Plans => "Plans",
            FormField::Message => "Message",
        }
    }

    /// Returns true if the field must be filled in before confirming.
    ///
    /// Plans are the only optional field.
    pub fn is_required(&self) -> bool {
        !matches!(self, FormField::Plans)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single user edit on the input screen.
///
/// Serialized as `{"field": "...", "value": "..."}` so clients can post
/// an ordered list of edits. `TogglePlan` flips one plan checkbox:
/// selecting the plan if it is unselected and vice versa.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum FieldChange {
    Name(String),
    Email(String),
    Service(String),
    Category(String),
    Message(String),
    TogglePlan(String),
}

impl FieldChange {
    /// Returns the field this change applies to.
    pub fn field(&self) -> FormField {
        match self {
            FieldChange::Name(_) => FormField::Name,
            FieldChange::Email(_) => FormField::Email,
            FieldChange::Service(_) => FormField::Service,
            FieldChange::Category(_) => FormField::Category,
            FieldChange::Message(_) => FormField::Message,
            FieldChange::TogglePlan(_) => FormField::Plans,
        }
    }
}

/// Validation messages keyed by field, at most one message per field.
///
/// Empty means the fields are valid. Serializes as an object keyed by
/// the snake_case field name, e.g. `{"email": "Enter a valid email
/// address"}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors {
    entries: BTreeMap<FormField, String>,
}

impl FieldErrors {
    /// Creates an empty error set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message for a field, replacing any previous message.
    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.entries.insert(field, message.into());
    }

    /// Returns the message for a field, if any.
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    /// Returns true if no field has an error.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of fields with errors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the fields with errors, in display order.
    pub fn fields(&self) -> Vec<FormField> {
        self.entries.keys().copied().collect()
    }

    /// Iterates over (field, message) pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.entries.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod form_fields {
        use super::*;

        #[test]
        fn default_fields_are_blank() {
            assert!(FormFields::default().is_blank());
        }

        #[test]
        fn fields_with_any_value_are_not_blank() {
            let fields = FormFields {
                name: "Taro Yamada".to_string(),
                ..Default::default()
            };
            assert!(!fields.is_blank());

            let fields = FormFields {
                plans: vec!["Plan a".to_string()],
                ..Default::default()
            };
            assert!(!fields.is_blank());
        }
    }

    mod form_field {
        use super::*;

        #[test]
        fn all_returns_six_fields_in_display_order() {
            let all = FormField::all();
            assert_eq!(all.len(), 6);
            assert_eq!(all[0], FormField::Name);
            assert_eq!(all[5], FormField::Message);
        }

        #[test]
        fn every_field_has_a_label() {
            for field in FormField::all() {
                assert!(!field.label().is_empty());
            }
        }

        #[test]
        fn plans_is_the_only_optional_field() {
            for field in FormField::all() {
                assert_eq!(field.is_required(), *field != FormField::Plans);
            }
        }

        #[test]
        fn serializes_to_snake_case() {
            let json = serde_json::to_string(&FormField::Email).unwrap();
            assert_eq!(json, "\"email\"");
        }

        #[test]
        fn ordering_follows_display_order() {
            assert!(FormField::Name < FormField::Email);
            assert!(FormField::Category < FormField::Plans);
            assert!(FormField::Plans < FormField::Message);
        }
    }

    mod field_change {
        use super::*;

        #[test]
        fn change_knows_its_field() {
            assert_eq!(FieldChange::Name("x".into()).field(), FormField::Name);
            assert_eq!(
                FieldChange::TogglePlan("Plan a".into()).field(),
                FormField::Plans
            );
        }

        #[test]
        fn serializes_with_field_and_value() {
            let change = FieldChange::Service("Service B".to_string());
            let json = serde_json::to_value(&change).unwrap();
            assert_eq!(json["field"], "service");
            assert_eq!(json["value"], "Service B");
        }

        #[test]
        fn deserializes_toggle_plan() {
            let json = r#"{"field": "toggle_plan", "value": "Plan c"}"#;
            let change: FieldChange = serde_json::from_str(json).unwrap();
            assert_eq!(change, FieldChange::TogglePlan("Plan c".to_string()));
        }
    }

    mod field_errors {
        use super::*;

        #[test]
        fn new_error_set_is_empty() {
            let errors = FieldErrors::new();
            assert!(errors.is_empty());
            assert_eq!(errors.len(), 0);
        }

        #[test]
        fn insert_and_get_roundtrip() {
            let mut errors = FieldErrors::new();
            errors.insert(FormField::Name, "Name is required");
            assert_eq!(errors.get(FormField::Name), Some("Name is required"));
            assert_eq!(errors.get(FormField::Email), None);
        }

        #[test]
        fn insert_replaces_previous_message() {
            let mut errors = FieldErrors::new();
            errors.insert(FormField::Email, "first");
            errors.insert(FormField::Email, "second");
            assert_eq!(errors.len(), 1);
            assert_eq!(errors.get(FormField::Email), Some("second"));
        }

        #[test]
        fn fields_are_listed_in_display_order() {
            let mut errors = FieldErrors::new();
            errors.insert(FormField::Message, "m");
            errors.insert(FormField::Name, "n");
            errors.insert(FormField::Category, "c");
            assert_eq!(
                errors.fields(),
                vec![FormField::Name, FormField::Category, FormField::Message]
            );
        }

        #[test]
        fn serializes_as_object_keyed_by_field() {
            let mut errors = FieldErrors::new();
            errors.insert(FormField::Email, "Enter a valid email address");
            let json = serde_json::to_value(&errors).unwrap();
            assert_eq!(json["email"], "Enter a valid email address");
        }

        #[test]
        fn deserializes_from_object() {
            let json = r#"{"name": "Name is required"}"#;
            let errors: FieldErrors = serde_json::from_str(json).unwrap();
            assert_eq!(errors.get(FormField::Name), Some("Name is required"));
        }
    }
}
