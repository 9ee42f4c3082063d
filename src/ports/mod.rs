//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `FormStore` - Keeps in-progress forms between requests
//! - `MailGateway` - Forwards confirmed inquiries by email

mod form_store;
mod mail_gateway;

pub use form_store::FormStore;
pub use mail_gateway::{MailGateway, MailGatewayError, SubmissionPayload, SubmissionReceipt};
