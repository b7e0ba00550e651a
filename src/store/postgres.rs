use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use super::SubmissionStore;
use crate::domain::{EmailSubmission, NewSubmission, SubmissionEmail};

#[derive(Clone)]
pub struct PgSubmissionStore {
    pool: PgPool,
}

impl PgSubmissionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl SubmissionStore for PgSubmissionStore {
    #[tracing::instrument(name = "Looking up an existing submission by email", skip(self))]
    async fn find_by_email(
        &self,
        email: &SubmissionEmail,
    ) -> Result<Option<EmailSubmission>, sqlx::Error> {
        sqlx::query_as::<_, EmailSubmission>(
            r#"
            SELECT id, email, created_at, status FROM email_submissions WHERE email = $1
            "#,
        )
        .bind(email.as_ref())
        .fetch_optional(&self.pool)
        .await
    }

    #[tracing::instrument(
        name = "Saving new submission in the database",
        skip(self, new_submission),
        fields(submission_email = %new_submission.email)
    )]
    async fn insert_if_absent(
        &self,
        new_submission: &NewSubmission,
    ) -> Result<Option<EmailSubmission>, sqlx::Error> {
        sqlx::query_as::<_, EmailSubmission>(
            r#"
            INSERT INTO email_submissions (id, email, created_at, status)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (email) DO NOTHING
            RETURNING id, email, created_at, status
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new_submission.email.as_ref())
        .bind(Utc::now())
        .bind(new_submission.status.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| {
            tracing::error!("Failed to execute query: {:?}", err);
            err
        })
    }
}
