//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - REST API exposure (axum)
//! - `mail` - Mail gateway implementations (stub)
//! - `storage` - Form store implementations (in-memory)

pub mod http;
pub mod mail;
pub mod storage;

pub use mail::StubMailGateway;
pub use storage::InMemoryFormStore;
