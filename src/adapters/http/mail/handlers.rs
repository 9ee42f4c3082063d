//! HTTP handlers for the direct mail intake.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::mail::{ForwardSubmissionCommand, ForwardSubmissionHandler};
use crate::domain::form::FormFields;
use crate::ports::{MailGatewayError, SubmissionPayload};

use super::dto::{ForwardMailRequest, MailAcceptedResponse, MailErrorResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct MailHandlers {
    forward_handler: Arc<ForwardSubmissionHandler>,
}

impl MailHandlers {
    pub fn new(forward_handler: Arc<ForwardSubmissionHandler>) -> Self {
        Self { forward_handler }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/mail - Forward a submission to the mail gateway
///
/// The body is parsed by hand: a missing or unparseable body counts as an
/// empty submission, exactly like a parseable-but-blank one.
pub async fn forward_mail(State(handlers): State<MailHandlers>, body: Bytes) -> Response {
    let req: ForwardMailRequest = match serde_json::from_slice(&body) {
        Ok(req) => req,
        Err(_) => return handle_mail_error(MailGatewayError::EmptyPayload),
    };

    let fields = FormFields {
        name: req.name,
        email: req.email,
        service: req.service,
        category: req.category,
        plans: req.plans,
        message: req.message,
    };

    let cmd = ForwardSubmissionCommand {
        payload: SubmissionPayload::from_fields(&fields),
    };

    match handlers.forward_handler.handle(cmd).await {
        Ok(receipt) => (
            StatusCode::OK,
            Json(MailAcceptedResponse::new(receipt.message_id)),
        )
            .into_response(),
        Err(e) => handle_mail_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_mail_error(error: MailGatewayError) -> Response {
    match error {
        MailGatewayError::EmptyPayload | MailGatewayError::Rejected(_) => (
            StatusCode::BAD_REQUEST,
            Json(MailErrorResponse::new(error.to_string())),
        )
            .into_response(),
        MailGatewayError::Unavailable(_) => (
            StatusCode::BAD_GATEWAY,
            Json(MailErrorResponse::new("Mail service unavailable")),
        )
            .into_response(),
    }
}
