//! Persistence for waitlist entries.
//!
//! The registration flow only ever needs two capabilities from the store:
//! looking an entry up by its normalized email and inserting a new entry
//! while getting the created row back.

mod in_memory;
mod postgres;

pub use in_memory::InMemorySubmissionStore;
pub use postgres::PgSubmissionStore;

use crate::domain::{EmailSubmission, NewSubmission, SubmissionEmail};

#[allow(async_fn_in_trait)]
pub trait SubmissionStore {
    async fn find_by_email(
        &self,
        email: &SubmissionEmail,
    ) -> Result<Option<EmailSubmission>, sqlx::Error>;

    /// Inserts the entry unless one with the same email already exists.
    /// Returns `None` when the email was taken, leaving the store untouched.
    async fn insert_if_absent(
        &self,
        new_submission: &NewSubmission,
    ) -> Result<Option<EmailSubmission>, sqlx::Error>;
}

/// The store selected at startup through `store.backend`.
#[derive(Clone)]
pub enum SubmissionStoreBackend {
    Postgres(PgSubmissionStore),
    InMemory(InMemorySubmissionStore),
}

impl SubmissionStore for SubmissionStoreBackend {
    async fn find_by_email(
        &self,
        email: &SubmissionEmail,
    ) -> Result<Option<EmailSubmission>, sqlx::Error> {
        match self {
            SubmissionStoreBackend::Postgres(store) => store.find_by_email(email).await,
            SubmissionStoreBackend::InMemory(store) => store.find_by_email(email).await,
        }
    }

    async fn insert_if_absent(
        &self,
        new_submission: &NewSubmission,
    ) -> Result<Option<EmailSubmission>, sqlx::Error> {
        match self {
            SubmissionStoreBackend::Postgres(store) => {
                store.insert_if_absent(new_submission).await
            }
            SubmissionStoreBackend::InMemory(store) => {
                store.insert_if_absent(new_submission).await
            }
        }
    }
}
