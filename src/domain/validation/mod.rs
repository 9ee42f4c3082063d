//! Pure field validation for the contact form.
//!
//! `validate` maps the current field values to a set of field-level
//! error messages. It has no side effects; the aggregate runs it when
//! the user tries to move from the input screen to the confirm screen.

use crate::domain::catalog::ServiceCatalog;
use crate::domain::form::{FieldErrors, FormField, FormFields};

/// Maximum length for the name field.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length for the email field.
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Maximum length for the message field.
pub const MAX_MESSAGE_LENGTH: usize = 2000;

/// Validates form fields against the service catalog.
///
/// Returns at most one message per field; an empty result means the
/// form may proceed to the confirm screen. Category and plan membership
/// are only checked once a valid service is selected, since without one
/// there are no options to check against.
pub fn validate(fields: &FormFields, catalog: &ServiceCatalog) -> FieldErrors {
    let mut errors = FieldErrors::new();

    let name = fields.name.trim();
    if name.is_empty() {
        errors.insert(FormField::Name, "Name is required");
    } else if name.chars().count() > MAX_NAME_LENGTH {
        errors.insert(
            FormField::Name,
            format!("Name must be {} characters or less", MAX_NAME_LENGTH),
        );
    }

    let email = fields.email.trim();
    if email.is_empty() {
        errors.insert(FormField::Email, "Email address is required");
    } else if email.chars().count() > MAX_EMAIL_LENGTH {
        errors.insert(
            FormField::Email,
            format!("Email address must be {} characters or less", MAX_EMAIL_LENGTH),
        );
    } else if !is_plausible_email(email) {
        errors.insert(FormField::Email, "Enter a valid email address");
    }

    if fields.service.is_empty() {
        errors.insert(FormField::Service, "Select a service");
    } else if !catalog.contains_service(&fields.service) {
        errors.insert(FormField::Service, "Select a service from the list");
    } else {
        if fields.category.is_empty() {
            errors.insert(FormField::Category, "Select a category");
        } else if !catalog.category_belongs_to(&fields.service, &fields.category) {
            errors.insert(
                FormField::Category,
                "Select a category offered for the chosen service",
            );
        }

        if let Some(plan) = fields
            .plans
            .iter()
            .find(|p| !catalog.plan_belongs_to(&fields.service, p))
        {
            errors.insert(
                FormField::Plans,
                format!("Plan '{}' is not offered for the chosen service", plan),
            );
        }
    }

    let message = fields.message.trim();
    if message.is_empty() {
        errors.insert(FormField::Message, "Message is required");
    } else if message.chars().count() > MAX_MESSAGE_LENGTH {
        errors.insert(
            FormField::Message,
            format!("Message must be {} characters or less", MAX_MESSAGE_LENGTH),
        );
    }

    errors
}

/// Structural email check: one '@', non-empty local and domain parts,
/// a dot in the domain, no whitespace anywhere.
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    !local.is_empty() && !domain.is_empty() && !domain.contains('@') && domain.contains('.')
}
