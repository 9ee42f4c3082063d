//! HTTP DTOs for form endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::domain::form::{FieldChange, FormError};
use crate::domain::view::ScreenView;
use crate::ports::SubmissionReceipt;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to apply one or more field changes to a form.
///
/// Changes are applied in the order they appear, so a service selection
/// and its dependent category may travel in the same request.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFormRequest {
    pub changes: Vec<FieldChange>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response for a newly started form.
#[derive(Debug, Clone, Serialize)]
pub struct FormStartedResponse {
    pub form_id: String,
    pub view: ScreenView,
}

/// Response for a confirm attempt.
///
/// `passed` is false when validation failed; the view is then the input
/// screen carrying the field errors.
#[derive(Debug, Clone, Serialize)]
pub struct ConfirmResponse {
    pub passed: bool,
    pub view: ScreenView,
}

/// Response for an accepted submission.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitAcceptedResponse {
    pub receipt: ReceiptResponse,
    pub view: ScreenView,
}

/// Receipt details for an accepted submission.
#[derive(Debug, Clone, Serialize)]
pub struct ReceiptResponse {
    pub message_id: String,
    pub accepted_at: String,
}

impl From<SubmissionReceipt> for ReceiptResponse {
    fn from(receipt: SubmissionReceipt) -> Self {
        Self {
            message_id: receipt.message_id,
            accepted_at: receipt.accepted_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn from_form_error(error: &FormError) -> Self {
        Self {
            code: error.code().to_string(),
            message: error.message(),
            details: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{FormId, Timestamp};

    #[test]
    fn update_request_deserializes_ordered_changes() {
        let json = r#"{"changes": [
            {"field": "service", "value": "Service B"},
            {"field": "category", "value": "Category 4"}
        ]}"#;
        let req: UpdateFormRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.changes.len(), 2);
        assert_eq!(
            req.changes[0],
            FieldChange::Service("Service B".to_string())
        );
    }

    #[test]
    fn receipt_response_conversion() {
        let receipt = SubmissionReceipt {
            message_id: "abc-123".to_string(),
            accepted_at: Timestamp::now(),
        };

        let response: ReceiptResponse = receipt.into();
        assert_eq!(response.message_id, "abc-123");
        assert!(response.accepted_at.contains('T'));
    }

    #[test]
    fn error_response_bad_request_creates_correctly() {
        let error = ErrorResponse::bad_request("Invalid input");
        assert_eq!(error.code, "BAD_REQUEST");
        assert_eq!(error.message, "Invalid input");
    }

    #[test]
    fn error_response_carries_the_domain_code() {
        let id = FormId::new();
        let error = ErrorResponse::from_form_error(&FormError::not_found(id));
        assert_eq!(error.code, "FORM_NOT_FOUND");
        assert!(error.message.contains(&id.to_string()));
    }
}
