//! HTTP DTOs for the direct mail intake.
//!
//! Responses use the `status`/`message` envelope the form frontend already
//! speaks, not the error envelope of the form API.

use serde::{Deserialize, Serialize};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A submission posted straight to the mail endpoint.
///
/// Every field defaults so a sparse client post still deserializes; the
/// emptiness check happens downstream in the gateway.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ForwardMailRequest {
    pub name: String,
    pub email: String,
    pub service: String,
    pub category: String,
    pub plans: Vec<String>,
    pub message: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Envelope for an accepted submission.
#[derive(Debug, Clone, Serialize)]
pub struct MailAcceptedResponse {
    pub status: String,
    pub message_id: String,
}

impl MailAcceptedResponse {
    pub fn new(message_id: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            message_id: message_id.into(),
        }
    }
}

/// Envelope for a refused submission.
#[derive(Debug, Clone, Serialize)]
pub struct MailErrorResponse {
    pub status: String,
    pub message: String,
}

impl MailErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}
