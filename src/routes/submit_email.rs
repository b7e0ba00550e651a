mod errors;
mod submit_email_handler;
mod types;

pub use errors::SubmitEmailError;
pub use submit_email_handler::{json_error_handler, register_email, submit_email};
pub use types::SubmissionPayload;
