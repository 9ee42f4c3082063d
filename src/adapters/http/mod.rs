//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod form;
pub mod mail;

// Re-export key types for convenience
pub use form::FormHandlers;
pub use form::{form_routes, service_routes};
pub use mail::mail_routes;
pub use mail::MailHandlers;
