//! HTTP routes for the direct mail intake.

use axum::{routing::post, Router};

use super::handlers::{forward_mail, MailHandlers};

/// Creates the mail intake router.
pub fn mail_routes(handlers: MailHandlers) -> Router {
    Router::new()
        .route("/", post(forward_mail))
        .with_state(handlers)
}
