//! Contact form aggregate entity.
//!
//! A form instance walks a user through the three screens: enter the
//! inquiry, review it, see the completion notice. The aggregate owns the
//! field values, the current screen, and the result of the most recent
//! validation run.

use crate::domain::catalog::ServiceCatalog;
use crate::domain::foundation::{FormId, StateMachine, Timestamp};
use crate::domain::form::{FieldChange, FieldErrors, FormError, FormFields, Screen};
use crate::domain::validation;
use serde::{Deserialize, Serialize};

/// Contact form aggregate - one in-progress inquiry.
///
/// # Invariants
///
/// - `id` is globally unique
/// - fields change only while on the input screen
/// - changing `service` to a different value clears `category` and `plans`
/// - `plans` contains no duplicates and preserves selection order
/// - `errors` is non-empty only while on the input screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    /// Unique identifier for this form instance.
    id: FormId,

    /// Screen the user currently sees.
    screen: Screen,

    /// Current field values.
    fields: FormFields,

    /// Field errors from the most recent confirm attempt.
    errors: FieldErrors,

    /// When the form was started.
    created_at: Timestamp,

    /// When the form was last changed.
    updated_at: Timestamp,
}

impl ContactForm {
    /// Create a blank form on the input screen.
    pub fn new(id: FormId) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            screen: Screen::default(),
            fields: FormFields::default(),
            errors: FieldErrors::new(),
            created_at: now,
            updated_at: now,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the form ID.
    pub fn id(&self) -> &FormId {
        &self.id
    }

    /// Returns the screen the user currently sees.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns the current field values.
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// Returns the field errors from the most recent confirm attempt.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Returns when the form was started.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the form was last changed.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Apply a single field change.
    ///
    /// Selecting a different service clears the category and plan
    /// selections, since those options depend on the service. Selecting
    /// the service already chosen leaves them untouched. Toggling a plan
    /// adds it when absent and removes it when present.
    ///
    /// # Errors
    ///
    /// - `ScreenMismatch` if the form is not on the input screen
    pub fn apply(&mut self, change: FieldChange) -> Result<(), FormError> {
        self.ensure_screen(Screen::Input, "edit fields")?;

        match change {
            FieldChange::Name(value) => self.fields.name = value,
            FieldChange::Email(value) => self.fields.email = value,
            FieldChange::Service(value) => {
                if value != self.fields.service {
                    self.fields.category.clear();
                    self.fields.plans.clear();
                    self.fields.service = value;
                }
            }
            FieldChange::Category(value) => self.fields.category = value,
            FieldChange::Message(value) => self.fields.message = value,
            FieldChange::TogglePlan(plan) => {
                if let Some(pos) = self.fields.plans.iter().position(|p| *p == plan) {
                    self.fields.plans.remove(pos);
                } else {
                    self.fields.plans.push(plan);
                }
            }
        }

        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Validate the fields and move to the confirm screen.
    ///
    /// Returns `Ok(true)` when validation passed and the form is now on
    /// the confirm screen. Returns `Ok(false)` when validation failed:
    /// the form stays on the input screen with the errors recorded.
    ///
    /// # Errors
    ///
    /// - `ScreenMismatch` if the form is not on the input screen
    pub fn proceed_to_confirm(&mut self, catalog: &ServiceCatalog) -> Result<bool, FormError> {
        self.ensure_screen(Screen::Input, "confirm entries")?;

        let errors = validation::validate(&self.fields, catalog);
        if !errors.is_empty() {
            self.errors = errors;
            self.updated_at = Timestamp::now();
            return Ok(false);
        }

        self.errors = FieldErrors::new();
        self.screen = self.screen.transition_to(Screen::Confirm)?;
        self.updated_at = Timestamp::now();
        Ok(true)
    }

    /// Go back to the input screen for edits. Field values are kept.
    ///
    /// # Errors
    ///
    /// - `ScreenMismatch` if the form is not on the confirm screen
    pub fn return_to_input(&mut self) -> Result<(), FormError> {
        self.ensure_screen(Screen::Confirm, "return to input")?;

        self.screen = self.screen.transition_to(Screen::Input)?;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Mark the inquiry as sent and show the completion screen.
    ///
    /// Called after the mail gateway accepted the submission.
    ///
    /// # Errors
    ///
    /// - `ScreenMismatch` if the form is not on the confirm screen
    pub fn complete(&mut self) -> Result<(), FormError> {
        self.ensure_screen(Screen::Confirm, "complete the inquiry")?;

        self.screen = self.screen.transition_to(Screen::Complete)?;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Start over: clear every field and return to a blank input screen.
    ///
    /// # Errors
    ///
    /// - `ScreenMismatch` if the form is not on the completion screen
    pub fn reset(&mut self) -> Result<(), FormError> {
        self.ensure_screen(Screen::Complete, "start over")?;

        self.fields = FormFields::default();
        self.errors = FieldErrors::new();
        self.screen = self.screen.transition_to(Screen::Input)?;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Validates that the form is on the screen the operation expects.
    fn ensure_screen(&self, expected: Screen, action: &'static str) -> Result<(), FormError> {
        if self.screen == expected {
            Ok(())
        } else {
            Err(FormError::screen_mismatch(self.screen, action))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form::FormField;
    use proptest::prelude::*;

    fn blank_form() -> ContactForm {
        ContactForm::new(FormId::new())
    }

    fn filled_form() -> ContactForm {
        let mut form = blank_form();
        for change in [
            FieldChange::Name("Taro Yamada".to_string()),
            FieldChange::Email("mail@example.com".to_string()),
            FieldChange::Service("Service A".to_string()),
            FieldChange::Category("Category 1".to_string()),
            FieldChange::TogglePlan("Plan a".to_string()),
            FieldChange::TogglePlan("Plan b".to_string()),
            FieldChange::Message("I would like to know more about Plan a.".to_string()),
        ] {
            form.apply(change).unwrap();
        }
        form
    }

    fn confirmed_form() -> ContactForm {
        let mut form = filled_form();
        assert!(form.proceed_to_confirm(ServiceCatalog::standard()).unwrap());
        form
    }

    // Construction tests

    #[test]
    fn new_form_starts_on_input_screen() {
        let form = blank_form();
        assert_eq!(form.screen(), Screen::Input);
    }

    #[test]
    fn new_form_is_blank_with_no_errors() {
        let form = blank_form();
        assert!(form.fields().is_blank());
        assert!(form.errors().is_empty());
    }

    // Field change tests

    #[test]
    fn apply_updates_text_fields() {
        let mut form = blank_form();
        form.apply(FieldChange::Name("Hanako".to_string())).unwrap();
        form.apply(FieldChange::Email("hanako@example.com".to_string()))
            .unwrap();
        form.apply(FieldChange::Message("Hello".to_string())).unwrap();

        assert_eq!(form.fields().name, "Hanako");
        assert_eq!(form.fields().email, "hanako@example.com");
        assert_eq!(form.fields().message, "Hello");
    }

    #[test]
    fn selecting_a_different_service_clears_category_and_plans() {
        let mut form = filled_form();
        form.apply(FieldChange::Service("Service B".to_string()))
            .unwrap();

        assert_eq!(form.fields().service, "Service B");
        assert_eq!(form.fields().category, "");
        assert!(form.fields().plans.is_empty());
    }

    #[test]
    fn reselecting_the_same_service_keeps_category_and_plans() {
        let mut form = filled_form();
        form.apply(FieldChange::Service("Service A".to_string()))
            .unwrap();

        assert_eq!(form.fields().category, "Category 1");
        assert_eq!(
            form.fields().plans,
            vec!["Plan a".to_string(), "Plan b".to_string()]
        );
    }

    #[test]
    fn toggle_plan_adds_then_removes() {
        let mut form = blank_form();
        form.apply(FieldChange::TogglePlan("Plan a".to_string()))
            .unwrap();
        assert_eq!(form.fields().plans, vec!["Plan a".to_string()]);

        form.apply(FieldChange::TogglePlan("Plan a".to_string()))
            .unwrap();
        assert!(form.fields().plans.is_empty());
    }

    #[test]
    fn toggle_plan_preserves_order_of_remaining_selections() {
        let mut form = blank_form();
        for plan in ["Plan a", "Plan b", "Plan c"] {
            form.apply(FieldChange::TogglePlan(plan.to_string())).unwrap();
        }
        form.apply(FieldChange::TogglePlan("Plan b".to_string()))
            .unwrap();

        assert_eq!(
            form.fields().plans,
            vec!["Plan a".to_string(), "Plan c".to_string()]
        );
    }

    #[test]
    fn changes_apply_in_order_within_one_sequence() {
        // A client may send the service and its dependent category together.
        let mut form = blank_form();
        form.apply(FieldChange::Service("Service B".to_string()))
            .unwrap();
        form.apply(FieldChange::Category("Category 4".to_string()))
            .unwrap();

        assert_eq!(form.fields().category, "Category 4");
    }

    #[test]
    fn apply_fails_outside_input_screen() {
        let mut form = confirmed_form();
        let result = form.apply(FieldChange::Name("Other".to_string()));
        assert!(matches!(result, Err(FormError::ScreenMismatch { .. })));
    }

    // Confirm tests

    #[test]
    fn confirm_with_valid_fields_moves_to_confirm_screen() {
        let mut form = filled_form();
        let passed = form.proceed_to_confirm(ServiceCatalog::standard()).unwrap();

        assert!(passed);
        assert_eq!(form.screen(), Screen::Confirm);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn confirm_with_invalid_fields_stays_on_input_with_errors() {
        let mut form = blank_form();
        let passed = form.proceed_to_confirm(ServiceCatalog::standard()).unwrap();

        assert!(!passed);
        assert_eq!(form.screen(), Screen::Input);
        assert!(form.errors().get(FormField::Name).is_some());
    }

    #[test]
    fn successful_confirm_clears_previous_errors() {
        let mut form = blank_form();
        assert!(!form.proceed_to_confirm(ServiceCatalog::standard()).unwrap());
        assert!(!form.errors().is_empty());

        for change in [
            FieldChange::Name("Taro Yamada".to_string()),
            FieldChange::Email("mail@example.com".to_string()),
            FieldChange::Service("Service C".to_string()),
            FieldChange::Category("Category 7".to_string()),
            FieldChange::Message("Hello".to_string()),
        ] {
            form.apply(change).unwrap();
        }

        assert!(form.proceed_to_confirm(ServiceCatalog::standard()).unwrap());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn confirm_fails_outside_input_screen() {
        let mut form = confirmed_form();
        let result = form.proceed_to_confirm(ServiceCatalog::standard());
        assert!(matches!(result, Err(FormError::ScreenMismatch { .. })));
    }

    // Back tests

    #[test]
    fn return_to_input_keeps_every_field() {
        let mut form = confirmed_form();
        form.return_to_input().unwrap();

        assert_eq!(form.screen(), Screen::Input);
        assert_eq!(form.fields().name, "Taro Yamada");
        assert_eq!(form.fields().service, "Service A");
        assert_eq!(
            form.fields().plans,
            vec!["Plan a".to_string(), "Plan b".to_string()]
        );
    }

    #[test]
    fn return_to_input_fails_on_input_screen() {
        let mut form = blank_form();
        let result = form.return_to_input();
        assert!(matches!(result, Err(FormError::ScreenMismatch { .. })));
    }

    // Complete tests

    #[test]
    fn complete_moves_to_completion_screen() {
        let mut form = confirmed_form();
        form.complete().unwrap();
        assert_eq!(form.screen(), Screen::Complete);
    }

    #[test]
    fn complete_fails_on_input_screen() {
        let mut form = filled_form();
        let result = form.complete();
        assert!(matches!(result, Err(FormError::ScreenMismatch { .. })));
    }

    // Reset tests

    #[test]
    fn reset_clears_fields_and_returns_to_input() {
        let mut form = confirmed_form();
        form.complete().unwrap();
        form.reset().unwrap();

        assert_eq!(form.screen(), Screen::Input);
        assert!(form.fields().is_blank());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn reset_fails_outside_completion_screen() {
        let mut form = confirmed_form();
        let result = form.reset();
        assert!(matches!(result, Err(FormError::ScreenMismatch { .. })));
    }

    // Error message tests

    #[test]
    fn screen_mismatch_names_the_action_and_screen() {
        let mut form = confirmed_form();
        let err = form.apply(FieldChange::Name("X".to_string())).unwrap_err();
        assert_eq!(err.message(), "Cannot edit fields while on the confirm screen");
    }

    proptest! {
        /// Category and plan selections drawn from the current service's
        /// options never survive a switch to a different service.
        #[test]
        fn dependent_selections_never_outlive_their_service(
            ops in proptest::collection::vec(0u8..9, 0..40)
        ) {
            let catalog = ServiceCatalog::standard();
            let mut form = ContactForm::new(FormId::new());

            for op in ops {
                match op {
                    0..=2 => {
                        let name = catalog.services()[op as usize].name().to_string();
                        form.apply(FieldChange::Service(name)).unwrap();
                    }
                    3..=5 => {
                        if let Some(service) = catalog.options_for(&form.fields().service) {
                            let category = service.categories()[(op - 3) as usize].clone();
                            form.apply(FieldChange::Category(category)).unwrap();
                        }
                    }
                    _ => {
                        if let Some(service) = catalog.options_for(&form.fields().service) {
                            let plan = service.plans()[(op - 6) as usize].clone();
                            form.apply(FieldChange::TogglePlan(plan)).unwrap();
                        }
                    }
                }

                let fields = form.fields();
                if !fields.category.is_empty() {
                    prop_assert!(
                        catalog.category_belongs_to(&fields.service, &fields.category)
                    );
                }
                for plan in &fields.plans {
                    prop_assert!(catalog.plan_belongs_to(&fields.service, plan));
                }
                let unique: std::collections::BTreeSet<_> = fields.plans.iter().collect();
                prop_assert_eq!(unique.len(), fields.plans.len());
            }
        }
    }
}
