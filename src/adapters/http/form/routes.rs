//! HTTP routes for form endpoints.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use super::handlers::{
    abandon_form, confirm_form, get_form, list_services, reset_form, revise_form, start_form,
    submit_form, update_form, FormHandlers,
};

/// Creates the form router with all endpoints.
pub fn form_routes(handlers: FormHandlers) -> Router {
    Router::new()
        .route("/", post(start_form))
        .route("/:id", get(get_form))
        .route("/:id", patch(update_form))
        .route("/:id", delete(abandon_form))
        .route("/:id/confirm", post(confirm_form))
        .route("/:id/back", post(revise_form))
        .route("/:id/submit", post(submit_form))
        .route("/:id/reset", post(reset_form))
        .with_state(handlers)
}

/// Creates the service catalog router.
pub fn service_routes(handlers: FormHandlers) -> Router {
    Router::new()
        .route("/", get(list_services))
        .with_state(handlers)
}
