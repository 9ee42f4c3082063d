//! AbandonFormHandler - Command handler for discarding a form.

use std::sync::Arc;

use crate::domain::foundation::FormId;
use crate::domain::form::FormError;
use crate::ports::FormStore;

/// Command to discard a form and everything entered into it.
#[derive(Debug, Clone)]
pub struct AbandonFormCommand {
    pub form_id: FormId,
}

/// Handler for discarding forms.
///
/// Abandoning works from any screen, so there is no state to render back.
pub struct AbandonFormHandler {
    store: Arc<dyn FormStore>,
}

impl AbandonFormHandler {
    pub fn new(store: Arc<dyn FormStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: AbandonFormCommand) -> Result<(), FormError> {
        self.store.remove(&cmd.form_id).await
    }
}
