use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use super::SubmissionStatus;

/// A waitlist entry as persisted by the store.
#[derive(Debug, Clone, PartialEq, FromRow, serde::Serialize, serde::Deserialize)]
pub struct EmailSubmission {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
    #[sqlx(try_from = "String")]
    pub status: SubmissionStatus,
}
