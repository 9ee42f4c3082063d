//! Form command and query handlers.

mod abandon_form;
mod confirm_form;
mod get_catalog;
mod get_form_view;
mod reset_form;
mod revise_form;
mod start_form;
mod submit_form;
mod update_form;

pub use abandon_form::{AbandonFormCommand, AbandonFormHandler};
pub use confirm_form::{ConfirmFormCommand, ConfirmFormHandler, ConfirmFormResult};
pub use get_catalog::GetCatalogHandler;
pub use get_form_view::{GetFormViewHandler, GetFormViewQuery};
pub use reset_form::{ResetFormCommand, ResetFormHandler, ResetFormResult};
pub use revise_form::{ReviseFormCommand, ReviseFormHandler, ReviseFormResult};
pub use start_form::{StartFormHandler, StartFormResult};
pub use submit_form::{SubmitFormCommand, SubmitFormHandler, SubmitFormResult};
pub use update_form::{UpdateFormCommand, UpdateFormHandler, UpdateFormResult};
