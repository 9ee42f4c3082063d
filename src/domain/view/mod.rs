//! Screen view models.
//!
//! `render` projects a form onto exactly one of three views, matching
//! the screen the user currently sees. Views carry everything a client
//! needs to draw the screen: text, current values, errors, and the
//! option lists for the selected service.

use crate::domain::catalog::ServiceCatalog;
use crate::domain::form::{ContactForm, FieldErrors, FormField, FormFields, Screen};
use serde::Serialize;

/// Heading shown on every screen.
pub const FORM_HEADING: &str = "Contact us";

/// Placeholder shown on the confirm screen when no plan was selected.
pub const NO_PLANS_SELECTED: &str = "(none selected)";

const INPUT_LEAD: &str = "Tell us about your inquiry and our team will get back to you.";
const CONFIRM_LEAD: &str = "Please make sure your entries are correct before sending.";
const COMPLETE_LEAD: &str = "Your inquiry has been sent.";
const COMPLETE_BODY: &str = "Our team will get back to you shortly. Please wait for our reply.";

/// One of the three screens, rendered for a client.
///
/// Serializes with a `screen` tag so clients can switch on it:
/// `{"screen": "input", ...}`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum ScreenView {
    Input(InputView),
    Confirm(ConfirmView),
    Complete(CompleteView),
}

impl ScreenView {
    /// Returns the screen this view renders.
    pub fn screen(&self) -> Screen {
        match self {
            ScreenView::Input(_) => Screen::Input,
            ScreenView::Confirm(_) => Screen::Confirm,
            ScreenView::Complete(_) => Screen::Complete,
        }
    }
}

/// The entry screen: editable fields plus the option lists.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputView {
    pub heading: String,
    pub lead: String,
    /// Current field values.
    pub fields: FormFields,
    /// Errors from the most recent confirm attempt, keyed by field.
    pub errors: FieldErrors,
    /// Every selectable service, in catalog order.
    pub services: Vec<String>,
    /// Categories offered for the selected service. Empty until a
    /// known service is selected.
    pub categories: Vec<String>,
    /// Plans offered for the selected service. Empty until a known
    /// service is selected.
    pub plans: Vec<String>,
}

/// The review screen: read-only label/value rows in display order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmView {
    pub heading: String,
    pub lead: String,
    pub entries: Vec<ConfirmEntry>,
}

/// One row on the review screen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmEntry {
    pub label: String,
    pub value: String,
}

/// The completion notice.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteView {
    pub heading: String,
    pub lead: String,
    pub body: String,
}

/// Render the view for the form's current screen.
pub fn render(form: &ContactForm, catalog: &ServiceCatalog) -> ScreenView {
    match form.screen() {
        Screen::Input => ScreenView::Input(input_view(form, catalog)),
        Screen::Confirm => ScreenView::Confirm(confirm_view(form.fields())),
        Screen::Complete => ScreenView::Complete(complete_view()),
    }
}

fn input_view(form: &ContactForm, catalog: &ServiceCatalog) -> InputView {
    let (categories, plans) = match catalog.options_for(&form.fields().service) {
        Some(service) => (service.categories().to_vec(), service.plans().to_vec()),
        None => (Vec::new(), Vec::new()),
    };

    InputView {
        heading: FORM_HEADING.to_string(),
        lead: INPUT_LEAD.to_string(),
        fields: form.fields().clone(),
        errors: form.errors().clone(),
        services: catalog.service_names(),
        categories,
        plans,
    }
}

fn confirm_view(fields: &FormFields) -> ConfirmView {
    let entries = FormField::all()
        .iter()
        .copied()
        .map(|field| ConfirmEntry {
            label: field.label().to_string(),
            value: display_value(field, fields),
        })
        .collect();

    ConfirmView {
        heading: FORM_HEADING.to_string(),
        lead: CONFIRM_LEAD.to_string(),
        entries,
    }
}

fn complete_view() -> CompleteView {
    CompleteView {
        heading: FORM_HEADING.to_string(),
        lead: COMPLETE_LEAD.to_string(),
        body: COMPLETE_BODY.to_string(),
    }
}

fn display_value(field: FormField, fields: &FormFields) -> String {
    match field {
        FormField::Name => fields.name.clone(),
        FormField::Email => fields.email.clone(),
        FormField::Service => fields.service.clone(),
        FormField::Category => fields.category.clone(),
        FormField::Plans => {
            if fields.plans.is_empty() {
                NO_PLANS_SELECTED.to_string()
            } else {
                fields.plans.join(", ")
            }
        }
        FormField::Message => fields.message.clone(),
    }
}
