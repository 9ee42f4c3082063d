//! Mail forwarding handlers.

mod forward_submission;

pub use forward_submission::{ForwardSubmissionCommand, ForwardSubmissionHandler};
