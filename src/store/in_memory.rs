use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use super::SubmissionStore;
use crate::domain::{EmailSubmission, NewSubmission, SubmissionEmail};

/// Process-local store for running without Postgres. Entries live as long
/// as the last clone of the store.
#[derive(Clone, Default)]
pub struct InMemorySubmissionStore {
    submissions: Arc<Mutex<Vec<EmailSubmission>>>,
}

impl InMemorySubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submissions(&self) -> Vec<EmailSubmission> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<EmailSubmission>> {
        // Writers never leave the vector half-updated.
        self.submissions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SubmissionStore for InMemorySubmissionStore {
    async fn find_by_email(
        &self,
        email: &SubmissionEmail,
    ) -> Result<Option<EmailSubmission>, sqlx::Error> {
        Ok(self
            .lock()
            .iter()
            .find(|s| s.email == email.as_ref())
            .cloned())
    }

    async fn insert_if_absent(
        &self,
        new_submission: &NewSubmission,
    ) -> Result<Option<EmailSubmission>, sqlx::Error> {
        let mut submissions = self.lock();
        if submissions
            .iter()
            .any(|s| s.email == new_submission.email.as_ref())
        {
            return Ok(None);
        }

        let submission = EmailSubmission {
            id: Uuid::new_v4(),
            email: new_submission.email.as_ref().to_owned(),
            created_at: Utc::now(),
            status: new_submission.status,
        };
        submissions.push(submission.clone());

        Ok(Some(submission))
    }
}
