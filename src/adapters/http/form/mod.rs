//! HTTP adapter for form endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ConfirmResponse, ErrorResponse, FormStartedResponse, ReceiptResponse, SubmitAcceptedResponse,
    UpdateFormRequest,
};
pub use handlers::FormHandlers;
pub use routes::{form_routes, service_routes};
