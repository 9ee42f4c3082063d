//! Contact form domain module.
//!
//! Owns the three-screen inquiry flow: the screen state machine, the
//! form record and its field vocabulary, the aggregate tying them
//! together, and the form error type.

mod aggregate;
mod errors;
mod fields;
mod screen;

pub use aggregate::ContactForm;
pub use errors::FormError;
pub use fields::{FieldChange, FieldErrors, FormField, FormFields};
pub use screen::Screen;
