//! ConfirmFormHandler - Command handler for moving to the confirm screen.

use std::sync::Arc;

use crate::domain::catalog::ServiceCatalog;
use crate::domain::foundation::FormId;
use crate::domain::form::FormError;
use crate::domain::view::{self, ScreenView};
use crate::ports::FormStore;

/// Command to validate the form and show the confirm screen.
#[derive(Debug, Clone)]
pub struct ConfirmFormCommand {
    pub form_id: FormId,
}

/// Result of a confirm attempt.
///
/// A failed validation is a normal outcome, not an error: `passed` is
/// false and the view is the input screen carrying the field errors.
#[derive(Debug, Clone)]
pub struct ConfirmFormResult {
    pub passed: bool,
    pub view: ScreenView,
}

/// Handler for confirm attempts.
pub struct ConfirmFormHandler {
    store: Arc<dyn FormStore>,
    catalog: Arc<ServiceCatalog>,
}

impl ConfirmFormHandler {
    pub fn new(store: Arc<dyn FormStore>, catalog: Arc<ServiceCatalog>) -> Self {
        Self { store, catalog }
    }

    pub async fn handle(&self, cmd: ConfirmFormCommand) -> Result<ConfirmFormResult, FormError> {
        let mut form = self.store.fetch(&cmd.form_id).await?;

        let passed = form.proceed_to_confirm(&self.catalog)?;
        self.store.update(&form).await?;

        Ok(ConfirmFormResult {
            passed,
            view: view::render(&form, &self.catalog),
        })
    }
}
