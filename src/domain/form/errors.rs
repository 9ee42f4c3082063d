//! Form-specific error types.

use crate::domain::foundation::{FormId, TransitionError};
use crate::domain::form::Screen;
use crate::ports::MailGatewayError;

/// Form-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Form was not found.
    NotFound(FormId),
    /// Operation is not valid on the current screen.
    ScreenMismatch { screen: Screen, action: &'static str },
    /// Mail gateway refused the submission.
    MailRejected(String),
    /// Mail gateway could not deliver.
    MailUnavailable(String),
    /// Infrastructure error.
    Infrastructure(String),
}

impl FormError {
    pub fn not_found(id: FormId) -> Self {
        FormError::NotFound(id)
    }
    pub fn screen_mismatch(screen: Screen, action: &'static str) -> Self {
        FormError::ScreenMismatch { screen, action }
    }
    pub fn mail_rejected(reason: impl Into<String>) -> Self {
        FormError::MailRejected(reason.into())
    }
    pub fn mail_unavailable(reason: impl Into<String>) -> Self {
        FormError::MailUnavailable(reason.into())
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        FormError::Infrastructure(message.into())
    }
    pub fn code(&self) -> &'static str {
        match self {
            FormError::NotFound(_) => "FORM_NOT_FOUND",
            FormError::ScreenMismatch { .. } => "SCREEN_MISMATCH",
            FormError::MailRejected(_) => "MAIL_REJECTED",
            FormError::MailUnavailable(_) => "MAIL_UNAVAILABLE",
            FormError::Infrastructure(_) => "INTERNAL_ERROR",
        }
    }
    pub fn message(&self) -> String {
        match self {
            FormError::NotFound(id) => format!("Form not found: {}", id),
            FormError::ScreenMismatch { screen, action } => {
                format!("Cannot {} while on the {} screen", action, screen.label())
            }
            FormError::MailRejected(reason) => reason.clone(),
            FormError::MailUnavailable(reason) => {
                format!("Mail service unavailable: {}", reason)
            }
            FormError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for FormError {}

impl From<TransitionError> for FormError {
    fn from(err: TransitionError) -> Self {
        FormError::Infrastructure(err.to_string())
    }
}

impl From<MailGatewayError> for FormError {
    fn from(err: MailGatewayError) -> Self {
        match err {
            MailGatewayError::EmptyPayload | MailGatewayError::Rejected(_) => {
                FormError::MailRejected(err.to_string())
            }
            MailGatewayError::Unavailable(reason) => FormError::MailUnavailable(reason),
        }
    }
}
