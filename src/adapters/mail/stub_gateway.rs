//! Stub Mail Gateway
//!
//! Stands in for a real mail provider. It checks only that the payload
//! carries data, formats the message a real transport would send,
//! records it for inspection, and reports success.
//!
//! # Features
//!
//! - Records every formatted mail for assertions
//! - Error injection for failure-path testing
//!
//! # Example
//!
//! ```ignore
//! let gateway = StubMailGateway::new(MailConfig::default());
//! let receipt = gateway.submit(&payload).await?;
//! assert_eq!(gateway.sent_count().await, 1);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::MailConfig;
use crate::domain::foundation::Timestamp;
use crate::domain::view::NO_PLANS_SELECTED;
use crate::ports::{MailGateway, MailGatewayError, SubmissionPayload, SubmissionReceipt};

/// A mail message the stub would have sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub body: String,
}

/// Mail gateway that formats and records submissions instead of
/// sending them.
#[derive(Debug, Clone)]
pub struct StubMailGateway {
    config: MailConfig,
    /// Every mail the stub accepted, oldest first.
    sent: Arc<Mutex<Vec<OutgoingMail>>>,
    /// Injected failures, consumed before any send succeeds.
    failures: Arc<Mutex<VecDeque<MailGatewayError>>>,
}

impl StubMailGateway {
    /// Creates a gateway that accepts every non-empty submission.
    pub fn new(config: MailConfig) -> Self {
        Self {
            config,
            sent: Arc::new(Mutex::new(Vec::new())),
            failures: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Queues an error to return instead of the next send.
    pub fn with_failure(self, error: MailGatewayError) -> Self {
        if let Ok(mut failures) = self.failures.try_lock() {
            failures.push_back(error);
        }
        self
    }

    /// Returns every mail recorded so far (for test assertions).
    pub async fn sent_mail(&self) -> Vec<OutgoingMail> {
        self.sent.lock().await.clone()
    }

    /// Returns the number of recorded mails.
    pub async fn sent_count(&self) -> usize {
        self.sent.lock().await.len()
    }

    /// Formats the mail a real transport would send.
    fn format_mail(&self, payload: &SubmissionPayload) -> OutgoingMail {
        let plans = if payload.plans.is_empty() {
            NO_PLANS_SELECTED.to_string()
        } else {
            payload.plans.join(", ")
        };

        let body = format!(
            "Name: {}\nEmail: {}\nService: {}\nCategory: {}\nPlans: {}\n\n{}\n",
            payload.name, payload.email, payload.service, payload.category, plans, payload.message
        );

        OutgoingMail {
            to: self.config.to_email.clone(),
            from: self.config.from_header(),
            subject: format!(
                "{} {} / {}",
                self.config.subject_prefix, payload.service, payload.category
            ),
            body,
        }
    }
}

#[async_trait]
impl MailGateway for StubMailGateway {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<SubmissionReceipt, MailGatewayError> {
        if payload.is_empty() {
            warn!("mail submission rejected: empty payload");
            return Err(MailGatewayError::EmptyPayload);
        }

        if let Some(error) = self.failures.lock().await.pop_front() {
            warn!(error = %error, "mail submission failed (injected)");
            return Err(error);
        }

        let mail = self.format_mail(payload);
        let receipt = SubmissionReceipt {
            message_id: Uuid::new_v4().to_string(),
            accepted_at: Timestamp::now(),
        };

        info!(
            message_id = %receipt.message_id,
            to = %mail.to,
            subject = %mail.subject,
            "mail submission recorded"
        );
        self.sent.lock().await.push(mail);

        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form::FormFields;

    fn test_payload() -> SubmissionPayload {
        SubmissionPayload::from_fields(&FormFields {
            name: "Taro Yamada".to_string(),
            email: "mail@example.com".to_string(),
            service: "Service A".to_string(),
            category: "Category 1".to_string(),
            plans: vec!["Plan a".to_string(), "Plan b".to_string()],
            message: "I would like to know more.".to_string(),
        })
    }

    fn test_config() -> MailConfig {
        MailConfig {
            to_email: "inquiries@example.com".to_string(),
            from_email: "noreply@example.com".to_string(),
            from_name: "Contact Form".to_string(),
            subject_prefix: "[Contact]".to_string(),
        }
    }

    #[tokio::test]
    async fn submit_records_the_formatted_mail() {
        let gateway = StubMailGateway::new(test_config());

        gateway.submit(&test_payload()).await.unwrap();

        let sent = gateway.sent_mail().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "inquiries@example.com");
        assert_eq!(sent[0].from, "Contact Form <noreply@example.com>");
        assert_eq!(sent[0].subject, "[Contact] Service A / Category 1");
        assert!(sent[0].body.contains("Name: Taro Yamada"));
        assert!(sent[0].body.contains("Plans: Plan a, Plan b"));
        assert!(sent[0].body.contains("I would like to know more."));
    }

    #[tokio::test]
    async fn empty_payload_is_rejected_and_not_recorded() {
        let gateway = StubMailGateway::new(test_config());
        let payload = SubmissionPayload::from_fields(&FormFields::default());

        let result = gateway.submit(&payload).await;

        assert_eq!(result, Err(MailGatewayError::EmptyPayload));
        assert_eq!(gateway.sent_count().await, 0);
    }

    #[tokio::test]
    async fn body_shows_placeholder_when_no_plans_selected() {
        let gateway = StubMailGateway::new(test_config());
        let mut payload = test_payload();
        payload.plans.clear();

        gateway.submit(&payload).await.unwrap();

        let sent = gateway.sent_mail().await;
        assert!(sent[0].body.contains("Plans: (none selected)"));
    }

    #[tokio::test]
    async fn injected_failure_is_consumed_then_sends_succeed() {
        let gateway = StubMailGateway::new(test_config())
            .with_failure(MailGatewayError::Unavailable("smtp down".to_string()));

        let first = gateway.submit(&test_payload()).await;
        assert!(matches!(first, Err(MailGatewayError::Unavailable(_))));
        assert_eq!(gateway.sent_count().await, 0);

        let second = gateway.submit(&test_payload()).await;
        assert!(second.is_ok());
        assert_eq!(gateway.sent_count().await, 1);
    }

    #[tokio::test]
    async fn receipts_carry_unique_message_ids() {
        let gateway = StubMailGateway::new(test_config());

        let r1 = gateway.submit(&test_payload()).await.unwrap();
        let r2 = gateway.submit(&test_payload()).await.unwrap();

        assert_ne!(r1.message_id, r2.message_id);
    }
}
