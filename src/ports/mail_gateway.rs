//! Mail gateway port.
//!
//! Contract for forwarding a confirmed inquiry by email. The shipped
//! implementation is a stub that records and logs the submission;
//! real transport sits behind the same trait.

use crate::domain::foundation::Timestamp;
use crate::domain::form::FormFields;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The inquiry data handed to the gateway, shaped like the form record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub name: String,
    pub email: String,
    pub service: String,
    pub category: String,
    pub plans: Vec<String>,
    pub message: String,
    pub submitted_at: Timestamp,
}

impl SubmissionPayload {
    /// Build a payload from the current field values, stamped now.
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            name: fields.name.clone(),
            email: fields.email.clone(),
            service: fields.service.clone(),
            category: fields.category.clone(),
            plans: fields.plans.clone(),
            message: fields.message.clone(),
            submitted_at: Timestamp::now(),
        }
    }

    /// True when every text field is blank and no plan is selected.
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty()
            && self.email.trim().is_empty()
            && self.service.trim().is_empty()
            && self.category.trim().is_empty()
            && self.plans.is_empty()
            && self.message.trim().is_empty()
    }
}

/// Proof that the gateway accepted a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    /// Gateway-assigned identifier for the outgoing mail.
    pub message_id: String,
    pub accepted_at: Timestamp,
}

/// Errors a gateway can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MailGatewayError {
    /// The payload carried no data at all.
    #[error("No data received")]
    EmptyPayload,
    /// The gateway refused the submission.
    #[error("{0}")]
    Rejected(String),
    /// The gateway could not be reached or failed mid-send.
    #[error("mail gateway unavailable: {0}")]
    Unavailable(String),
}

/// Gateway port for sending confirmed inquiries.
#[async_trait]
pub trait MailGateway: Send + Sync {
    /// Forward a submission.
    ///
    /// # Errors
    ///
    /// - `EmptyPayload` if the payload carries no data
    /// - `Rejected` if the gateway refuses the submission
    /// - `Unavailable` on transport failure
    async fn submit(&self, payload: &SubmissionPayload) -> Result<SubmissionReceipt, MailGatewayError>;
}
