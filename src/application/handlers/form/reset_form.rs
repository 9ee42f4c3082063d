//! ResetFormHandler - Command handler for starting a new inquiry over.

use std::sync::Arc;

use crate::domain::catalog::ServiceCatalog;
use crate::domain::foundation::FormId;
use crate::domain::form::FormError;
use crate::domain::view::{self, ScreenView};
use crate::ports::FormStore;

/// Command to clear a completed form and return to a blank input screen.
#[derive(Debug, Clone)]
pub struct ResetFormCommand {
    pub form_id: FormId,
}

/// Result of a reset.
#[derive(Debug, Clone)]
pub struct ResetFormResult {
    pub view: ScreenView,
}

/// Handler for starting over after a completed inquiry.
pub struct ResetFormHandler {
    store: Arc<dyn FormStore>,
    catalog: Arc<ServiceCatalog>,
}

impl ResetFormHandler {
    pub fn new(store: Arc<dyn FormStore>, catalog: Arc<ServiceCatalog>) -> Self {
        Self { store, catalog }
    }

    pub async fn handle(&self, cmd: ResetFormCommand) -> Result<ResetFormResult, FormError> {
        let mut form = self.store.fetch(&cmd.form_id).await?;

        form.reset()?;
        self.store.update(&form).await?;

        Ok(ResetFormResult {
            view: view::render(&form, &self.catalog),
        })
    }
}
