//! ReviseFormHandler - Command handler for going back to the input screen.

use std::sync::Arc;

use crate::domain::catalog::ServiceCatalog;
use crate::domain::foundation::FormId;
use crate::domain::form::FormError;
use crate::domain::view::{self, ScreenView};
use crate::ports::FormStore;

/// Command to return from the confirm screen for further edits.
#[derive(Debug, Clone)]
pub struct ReviseFormCommand {
    pub form_id: FormId,
}

/// Result of successfully returning to the input screen.
#[derive(Debug, Clone)]
pub struct ReviseFormResult {
    pub view: ScreenView,
}

/// Handler for returning to the input screen.
pub struct ReviseFormHandler {
    store: Arc<dyn FormStore>,
    catalog: Arc<ServiceCatalog>,
}

impl ReviseFormHandler {
    pub fn new(store: Arc<dyn FormStore>, catalog: Arc<ServiceCatalog>) -> Self {
        Self { store, catalog }
    }

    pub async fn handle(&self, cmd: ReviseFormCommand) -> Result<ReviseFormResult, FormError> {
        let mut form = self.store.fetch(&cmd.form_id).await?;

        form.return_to_input()?;
        self.store.update(&form).await?;

        Ok(ReviseFormResult {
            view: view::render(&form, &self.catalog),
        })
    }
}
