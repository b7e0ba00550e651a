use super::{SubmissionEmail, SubmissionStatus};

pub struct NewSubmission {
    pub email: SubmissionEmail,
    pub status: SubmissionStatus,
}

impl NewSubmission {
    pub fn parse(email: String) -> Result<Self, String> {
        let email = SubmissionEmail::parse(email)?;
        Ok(Self {
            email,
            status: SubmissionStatus::Pending,
        })
    }
}
