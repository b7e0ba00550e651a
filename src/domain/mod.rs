mod api_response;
mod email_submission;
mod new_submission;
mod submission_email;
mod submission_status;

pub use api_response::{ApiResponse, REGISTERED_MESSAGE};
pub use email_submission::EmailSubmission;
pub use new_submission::NewSubmission;
pub use submission_email::{SubmissionEmail, is_pattern_whitespace, is_valid_email};
pub use submission_status::SubmissionStatus;
