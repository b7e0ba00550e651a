mod health_check;
mod helpers;
mod landing;
mod submit_email;

pub use health_check::health_check;
pub use helpers::{e500, error_chain_fmt};
pub use landing::{SUBMIT_EMAIL_PATH, landing_page};
pub use submit_email::{
    SubmissionPayload, SubmitEmailError, json_error_handler, register_email, submit_email,
};
