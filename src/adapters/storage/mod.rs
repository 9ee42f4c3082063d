//! Storage Adapters
//!
//! Implementations of the FormStore port.
//!
//! - **InMemoryFormStore** - Keeps forms in memory for the life of the
//!   process. The only shipped store; inquiries are short-lived and do
//!   not need to survive a restart.

mod in_memory_form_store;

pub use in_memory_form_store::InMemoryFormStore;
