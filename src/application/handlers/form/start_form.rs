//! StartFormHandler - Command handler for opening a new blank form.

use std::sync::Arc;

use crate::domain::catalog::ServiceCatalog;
use crate::domain::foundation::FormId;
use crate::domain::form::{ContactForm, FormError};
use crate::domain::view::{self, ScreenView};
use crate::ports::FormStore;

/// Result of successfully starting a form.
#[derive(Debug, Clone)]
pub struct StartFormResult {
    pub form_id: FormId,
    pub view: ScreenView,
}

/// Handler for starting a new form.
pub struct StartFormHandler {
    store: Arc<dyn FormStore>,
    catalog: Arc<ServiceCatalog>,
}

impl StartFormHandler {
    pub fn new(store: Arc<dyn FormStore>, catalog: Arc<ServiceCatalog>) -> Self {
        Self { store, catalog }
    }

    pub async fn handle(&self) -> Result<StartFormResult, FormError> {
        let form = ContactForm::new(FormId::new());
        self.store.insert(&form).await?;

        Ok(StartFormResult {
            form_id: *form.id(),
            view: view::render(&form, &self.catalog),
        })
    }
}
