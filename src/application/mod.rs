//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::{
    // Form handlers
    AbandonFormCommand, AbandonFormHandler,
    ConfirmFormCommand, ConfirmFormHandler, ConfirmFormResult,
    GetCatalogHandler,
    GetFormViewHandler, GetFormViewQuery,
    ResetFormCommand, ResetFormHandler, ResetFormResult,
    ReviseFormCommand, ReviseFormHandler, ReviseFormResult,
    StartFormHandler, StartFormResult,
    SubmitFormCommand, SubmitFormHandler, SubmitFormResult,
    UpdateFormCommand, UpdateFormHandler, UpdateFormResult,
    // Mail handlers
    ForwardSubmissionCommand, ForwardSubmissionHandler,
};
