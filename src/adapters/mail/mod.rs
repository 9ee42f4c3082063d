//! Mail Adapters
//!
//! Implementations of the MailGateway port.
//!
//! - **StubMailGateway** - Formats and records submissions without
//!   sending anything. The shipped gateway; real transport would sit
//!   behind the same port.

mod stub_gateway;

pub use stub_gateway::{OutgoingMail, StubMailGateway};
