//! UpdateFormHandler - Command handler for applying field changes.

use std::sync::Arc;

use crate::domain::catalog::ServiceCatalog;
use crate::domain::foundation::FormId;
use crate::domain::form::{FieldChange, FormError};
use crate::domain::view::{self, ScreenView};
use crate::ports::FormStore;

/// Command to apply an ordered list of field changes.
#[derive(Debug, Clone)]
pub struct UpdateFormCommand {
    pub form_id: FormId,
    pub changes: Vec<FieldChange>,
}

/// Result of successfully updating a form.
#[derive(Debug, Clone)]
pub struct UpdateFormResult {
    pub view: ScreenView,
}

/// Handler for updating form fields.
pub struct UpdateFormHandler {
    store: Arc<dyn FormStore>,
    catalog: Arc<ServiceCatalog>,
}

impl UpdateFormHandler {
    pub fn new(store: Arc<dyn FormStore>, catalog: Arc<ServiceCatalog>) -> Self {
        Self { store, catalog }
    }

    pub async fn handle(&self, cmd: UpdateFormCommand) -> Result<UpdateFormResult, FormError> {
        let mut form = self.store.fetch(&cmd.form_id).await?;

        // Changes land in the order the client sent them, so a service
        // selection and its dependent category can travel together.
        for change in cmd.changes {
            form.apply(change)?;
        }

        self.store.update(&form).await?;

        Ok(UpdateFormResult {
            view: view::render(&form, &self.catalog),
        })
    }
}
