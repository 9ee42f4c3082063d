//! HTTP handlers for form endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::form::{
    AbandonFormCommand, AbandonFormHandler, ConfirmFormCommand, ConfirmFormHandler,
    GetCatalogHandler, GetFormViewHandler, GetFormViewQuery, ResetFormCommand, ResetFormHandler,
    ReviseFormCommand, ReviseFormHandler, StartFormHandler, SubmitFormCommand, SubmitFormHandler,
    UpdateFormCommand, UpdateFormHandler,
};
use crate::domain::foundation::FormId;
use crate::domain::form::FormError;

use super::dto::{
    ConfirmResponse, ErrorResponse, FormStartedResponse, SubmitAcceptedResponse, UpdateFormRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct FormHandlers {
    start_handler: Arc<StartFormHandler>,
    update_handler: Arc<UpdateFormHandler>,
    confirm_handler: Arc<ConfirmFormHandler>,
    revise_handler: Arc<ReviseFormHandler>,
    submit_handler: Arc<SubmitFormHandler>,
    reset_handler: Arc<ResetFormHandler>,
    abandon_handler: Arc<AbandonFormHandler>,
    view_handler: Arc<GetFormViewHandler>,
    catalog_handler: Arc<GetCatalogHandler>,
}

impl FormHandlers {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        start_handler: Arc<StartFormHandler>,
        update_handler: Arc<UpdateFormHandler>,
        confirm_handler: Arc<ConfirmFormHandler>,
        revise_handler: Arc<ReviseFormHandler>,
        submit_handler: Arc<SubmitFormHandler>,
        reset_handler: Arc<ResetFormHandler>,
        abandon_handler: Arc<AbandonFormHandler>,
        view_handler: Arc<GetFormViewHandler>,
        catalog_handler: Arc<GetCatalogHandler>,
    ) -> Self {
        Self {
            start_handler,
            update_handler,
            confirm_handler,
            revise_handler,
            submit_handler,
            reset_handler,
            abandon_handler,
            view_handler,
            catalog_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/forms - Start a new form on a blank input screen
pub async fn start_form(State(handlers): State<FormHandlers>) -> Response {
    match handlers.start_handler.handle().await {
        Ok(result) => {
            let response = FormStartedResponse {
                form_id: result.form_id.to_string(),
                view: result.view,
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_form_error(e),
    }
}

/// GET /api/forms/:id - Render the screen the form is currently on
pub async fn get_form(
    State(handlers): State<FormHandlers>,
    Path(form_id): Path<String>,
) -> Response {
    let form_id = match parse_form_id(&form_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match handlers
        .view_handler
        .handle(GetFormViewQuery { form_id })
        .await
    {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => handle_form_error(e),
    }
}

/// PATCH /api/forms/:id - Apply field changes in request order
pub async fn update_form(
    State(handlers): State<FormHandlers>,
    Path(form_id): Path<String>,
    Json(req): Json<UpdateFormRequest>,
) -> Response {
    let form_id = match parse_form_id(&form_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let cmd = UpdateFormCommand {
        form_id,
        changes: req.changes,
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(result) => (StatusCode::OK, Json(result.view)).into_response(),
        Err(e) => handle_form_error(e),
    }
}

/// POST /api/forms/:id/confirm - Validate and move to the confirm screen
pub async fn confirm_form(
    State(handlers): State<FormHandlers>,
    Path(form_id): Path<String>,
) -> Response {
    let form_id = match parse_form_id(&form_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match handlers.confirm_handler.handle(ConfirmFormCommand { form_id }).await {
        Ok(result) => {
            let response = ConfirmResponse {
                passed: result.passed,
                view: result.view,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_form_error(e),
    }
}

/// POST /api/forms/:id/back - Return from confirm to the input screen
pub async fn revise_form(
    State(handlers): State<FormHandlers>,
    Path(form_id): Path<String>,
) -> Response {
    let form_id = match parse_form_id(&form_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match handlers.revise_handler.handle(ReviseFormCommand { form_id }).await {
        Ok(result) => (StatusCode::OK, Json(result.view)).into_response(),
        Err(e) => handle_form_error(e),
    }
}

/// POST /api/forms/:id/submit - Send the confirmed inquiry
pub async fn submit_form(
    State(handlers): State<FormHandlers>,
    Path(form_id): Path<String>,
) -> Response {
    let form_id = match parse_form_id(&form_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match handlers.submit_handler.handle(SubmitFormCommand { form_id }).await {
        Ok(result) => {
            let response = SubmitAcceptedResponse {
                receipt: result.receipt.into(),
                view: result.view,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_form_error(e),
    }
}

/// POST /api/forms/:id/reset - Start over from the completion screen
pub async fn reset_form(
    State(handlers): State<FormHandlers>,
    Path(form_id): Path<String>,
) -> Response {
    let form_id = match parse_form_id(&form_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match handlers.reset_handler.handle(ResetFormCommand { form_id }).await {
        Ok(result) => (StatusCode::OK, Json(result.view)).into_response(),
        Err(e) => handle_form_error(e),
    }
}

/// DELETE /api/forms/:id - Discard a form
pub async fn abandon_form(
    State(handlers): State<FormHandlers>,
    Path(form_id): Path<String>,
) -> Response {
    let form_id = match parse_form_id(&form_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match handlers.abandon_handler.handle(AbandonFormCommand { form_id }).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_form_error(e),
    }
}

/// GET /api/services - List the services and their options
pub async fn list_services(State(handlers): State<FormHandlers>) -> Response {
    let catalog = handlers.catalog_handler.handle();
    (StatusCode::OK, Json(catalog)).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn parse_form_id(raw: &str) -> Result<FormId, Response> {
    raw.parse::<FormId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid form ID")),
        )
            .into_response()
    })
}

fn handle_form_error(error: FormError) -> Response {
    let status = match &error {
        FormError::NotFound(_) => StatusCode::NOT_FOUND,
        FormError::ScreenMismatch { .. } | FormError::MailRejected(_) => StatusCode::BAD_REQUEST,
        FormError::MailUnavailable(_) => StatusCode::BAD_GATEWAY,
        FormError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status, Json(ErrorResponse::from_form_error(&error))).into_response()
}
