#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Pending,
    Confirmed,
    Unsubscribed,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "pending",
            SubmissionStatus::Confirmed => "confirmed",
            SubmissionStatus::Unsubscribed => "unsubscribed",
        }
    }
}

impl TryFrom<String> for SubmissionStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "pending" => Ok(SubmissionStatus::Pending),
            "confirmed" => Ok(SubmissionStatus::Confirmed),
            "unsubscribed" => Ok(SubmissionStatus::Unsubscribed),
            other => Err(format!("{other} is not a known submission status.")),
        }
    }
}
