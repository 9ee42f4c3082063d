//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod form;
pub mod mail;

pub use form::{
    AbandonFormCommand, AbandonFormHandler,
    ConfirmFormCommand, ConfirmFormHandler, ConfirmFormResult,
    GetCatalogHandler,
    GetFormViewHandler, GetFormViewQuery,
    ResetFormCommand, ResetFormHandler, ResetFormResult,
    ReviseFormCommand, ReviseFormHandler, ReviseFormResult,
    StartFormHandler, StartFormResult,
    SubmitFormCommand, SubmitFormHandler, SubmitFormResult,
    UpdateFormCommand, UpdateFormHandler, UpdateFormResult,
};
pub use mail::{ForwardSubmissionCommand, ForwardSubmissionHandler};
