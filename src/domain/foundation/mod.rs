//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and traits that form the vocabulary
//! of the contact-flow domain.

mod ids;
mod state_machine;
mod timestamp;

pub use ids::FormId;
pub use state_machine::{StateMachine, TransitionError};
pub use timestamp::Timestamp;
