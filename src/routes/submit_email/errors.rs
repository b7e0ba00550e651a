use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use crate::{domain::ApiResponse, routes::error_chain_fmt};

#[derive(thiserror::Error)]
pub enum SubmitEmailError {
    #[error("Please provide a valid email address")]
    ValidationError(String),
    #[error("This email is already registered")]
    AlreadyRegistered,
    #[error("Failed to save email. Please try again.")]
    PersistenceError(#[source] anyhow::Error),
    #[error("An unexpected error occurred. Please try again.")]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for SubmitEmailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for SubmitEmailError {
    fn status_code(&self) -> StatusCode {
        match self {
            SubmitEmailError::ValidationError(_) => StatusCode::BAD_REQUEST,
            SubmitEmailError::AlreadyRegistered => StatusCode::CONFLICT,
            SubmitEmailError::PersistenceError(_) | SubmitEmailError::UnexpectedError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        HttpResponse::build(self.status_code()).json(ApiResponse::failure(self.to_string()))
    }
}
