//! ForwardSubmissionHandler - Command handler for the direct mail intake.

use std::sync::Arc;

use crate::ports::{MailGateway, MailGatewayError, SubmissionPayload, SubmissionReceipt};

/// Command carrying a submission posted straight to the mail endpoint,
/// bypassing the stored form flow.
#[derive(Debug, Clone)]
pub struct ForwardSubmissionCommand {
    pub payload: SubmissionPayload,
}

/// Handler that forwards submissions to the mail gateway as they arrive.
///
/// No validation happens here beyond what the gateway itself enforces;
/// the endpoint accepts whatever the client assembled.
pub struct ForwardSubmissionHandler {
    gateway: Arc<dyn MailGateway>,
}

impl ForwardSubmissionHandler {
    pub fn new(gateway: Arc<dyn MailGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(
        &self,
        cmd: ForwardSubmissionCommand,
    ) -> Result<SubmissionReceipt, MailGatewayError> {
        self.gateway.submit(&cmd.payload).await
    }
}
