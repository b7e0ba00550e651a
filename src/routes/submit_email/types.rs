use crate::domain::NewSubmission;

/// `email` is kept loosely typed so that a non-string value is reported as
/// an invalid address rather than as an unreadable body.
#[derive(Debug, serde::Deserialize)]
pub struct SubmissionPayload {
    pub email: Option<serde_json::Value>,
}

impl SubmissionPayload {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: Some(serde_json::Value::String(email.into())),
        }
    }
}

impl TryFrom<SubmissionPayload> for NewSubmission {
    type Error = String;

    fn try_from(value: SubmissionPayload) -> Result<Self, Self::Error> {
        match value.email {
            Some(serde_json::Value::String(email)) => NewSubmission::parse(email),
            Some(other) => Err(format!("{other} is not a string.")),
            None => Err("The email field is missing.".into()),
        }
    }
}
