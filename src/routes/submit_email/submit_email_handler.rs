use actix_web::{HttpRequest, HttpResponse, error::JsonPayloadError, web};
use anyhow::Context;

use super::{errors::SubmitEmailError, types::SubmissionPayload};
use crate::{
    domain::{ApiResponse, EmailSubmission, NewSubmission},
    store::{SubmissionStore, SubmissionStoreBackend},
};

#[tracing::instrument(name = "Adding a new waitlist email.", skip(payload, store))]
pub async fn submit_email(
    payload: web::Json<SubmissionPayload>,
    store: web::Data<SubmissionStoreBackend>,
) -> Result<HttpResponse, SubmitEmailError> {
    let submission = register_email(store.get_ref(), payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::registered(submission)))
}

/// Validates the payload and stores its email unless it is already on the
/// waitlist. Nothing is written on any error path.
#[tracing::instrument(
    name = "Registering waitlist email",
    skip(store, payload),
    fields(submission_email = tracing::field::Empty)
)]
pub async fn register_email<S: SubmissionStore>(
    store: &S,
    payload: SubmissionPayload,
) -> Result<EmailSubmission, SubmitEmailError> {
    let new_submission: NewSubmission =
        payload.try_into().map_err(SubmitEmailError::ValidationError)?;
    tracing::Span::current().record(
        "submission_email",
        tracing::field::display(&new_submission.email),
    );

    let existing = store
        .find_by_email(&new_submission.email)
        .await
        .context("Failed to look up an existing submission.")?;
    if existing.is_some() {
        return Err(SubmitEmailError::AlreadyRegistered);
    }

    // The email may have been taken between the lookup and the insert.
    store
        .insert_if_absent(&new_submission)
        .await
        .context("Failed to insert a new submission in the database.")
        .map_err(SubmitEmailError::PersistenceError)?
        .ok_or(SubmitEmailError::AlreadyRegistered)
}

pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    SubmitEmailError::UnexpectedError(anyhow::anyhow!("Failed to read the request body: {err}"))
        .into()
}
