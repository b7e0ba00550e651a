use super::EmailSubmission;

pub const REGISTERED_MESSAGE: &str = "Email successfully registered!";

/// Body returned by the registration endpoint for every outcome.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<EmailSubmission>,
}

impl ApiResponse {
    pub fn registered(submission: EmailSubmission) -> Self {
        Self {
            success: true,
            message: REGISTERED_MESSAGE.into(),
            data: Some(submission),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}
