//! HTTP adapter for the direct mail intake.

mod dto;
mod handlers;
mod routes;

pub use dto::{ForwardMailRequest, MailAcceptedResponse, MailErrorResponse};
pub use handlers::MailHandlers;
pub use routes::mail_routes;
