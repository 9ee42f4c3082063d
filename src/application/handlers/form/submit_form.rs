//! SubmitFormHandler - Command handler for sending a confirmed inquiry.

use std::sync::Arc;

use crate::domain::catalog::ServiceCatalog;
use crate::domain::foundation::FormId;
use crate::domain::form::FormError;
use crate::domain::view::{self, ScreenView};
use crate::ports::{FormStore, MailGateway, SubmissionPayload, SubmissionReceipt};

/// Command to send the confirmed entries through the mail gateway.
#[derive(Debug, Clone)]
pub struct SubmitFormCommand {
    pub form_id: FormId,
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct SubmitFormResult {
    pub receipt: SubmissionReceipt,
    pub view: ScreenView,
}

/// Handler for sending confirmed inquiries.
pub struct SubmitFormHandler {
    store: Arc<dyn FormStore>,
    gateway: Arc<dyn MailGateway>,
    catalog: Arc<ServiceCatalog>,
}

impl SubmitFormHandler {
    pub fn new(
        store: Arc<dyn FormStore>,
        gateway: Arc<dyn MailGateway>,
        catalog: Arc<ServiceCatalog>,
    ) -> Self {
        Self {
            store,
            gateway,
            catalog,
        }
    }

    /// Sends the inquiry and moves the form to the completion screen.
    ///
    /// The screen is checked before the gateway is called, so a misplaced
    /// submit never sends mail. When the gateway refuses the submission the
    /// form stays on the confirm screen and the command can be retried.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no form exists under the command's id
    /// - `ScreenMismatch` if the form is not on the confirm screen
    /// - `MailRejected` if the gateway refused the submission
    /// - `MailUnavailable` if the gateway could not be reached
    pub async fn handle(&self, cmd: SubmitFormCommand) -> Result<SubmitFormResult, FormError> {
        let mut form = self.store.fetch(&cmd.form_id).await?;

        if !form.screen().is_review() {
            return Err(FormError::screen_mismatch(form.screen(), "send the inquiry"));
        }

        let payload = SubmissionPayload::from_fields(form.fields());
        let receipt = self.gateway.submit(&payload).await?;

        form.complete()?;
        self.store.update(&form).await?;

        Ok(SubmitFormResult {
            receipt,
            view: view::render(&form, &self.catalog),
        })
    }
}
