//! Client-side signup form state.
//!
//! [`EmailForm`] holds everything the signup page shows: the typed text, the
//! busy flag, a field-level validation error, the outcome of the last
//! submission and the success acknowledgment. Format problems are caught here
//! so that obviously bad input never reaches the network.

use crate::domain::{ApiResponse, REGISTERED_MESSAGE, is_pattern_whitespace, is_valid_email};

pub const SUBMISSION_FAILED_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidFormat,
}

impl FieldError {
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::Required => "Email is required",
            FieldError::InvalidFormat => "Please enter a valid email address",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(String),
    Error(String),
}

/// Anything able to carry an email to the registration endpoint. An `Err`
/// means the request itself failed; refusals come back as an unsuccessful
/// [`ApiResponse`].
#[allow(async_fn_in_trait)]
pub trait Submitter {
    async fn submit(&self, email: &str) -> Result<ApiResponse, anyhow::Error>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuccessDialog {
    open: bool,
    message: Option<String>,
}

impl SuccessDialog {
    pub const TITLE: &'static str = "Welcome to the Pack! 🎉";
    pub const TAGLINE: &'static str = "Our mascot is excited to have you join us!";

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or(REGISTERED_MESSAGE)
    }

    fn show(&mut self, message: String) {
        self.open = true;
        self.message = Some(message);
    }

    fn close(&mut self) {
        self.open = false;
    }
}

#[derive(Debug, Clone, Default)]
pub struct EmailForm {
    email: String,
    is_submitting: bool,
    field_error: Option<FieldError>,
    outcome: Option<Outcome>,
    success_dialog: SuccessDialog,
}

impl EmailForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn field_error(&self) -> Option<FieldError> {
        self.field_error
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn success_dialog(&self) -> &SuccessDialog {
        &self.success_dialog
    }

    /// Whether the submit button is enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting && !self.email.trim_matches(is_pattern_whitespace).is_empty()
    }

    pub fn on_input_change(&mut self, value: impl Into<String>) {
        self.email = value.into();
        self.field_error = None;
        self.outcome = None;
    }

    /// Validates the input and, if it is fit to send, marks the form busy
    /// and returns the email to submit. Must be followed by
    /// [`EmailForm::complete_submit`].
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.is_submitting {
            return None;
        }

        let trimmed = self.email.trim_matches(is_pattern_whitespace);
        if trimmed.is_empty() {
            self.field_error = Some(FieldError::Required);
            return None;
        }
        if !is_valid_email(trimmed) {
            self.field_error = Some(FieldError::InvalidFormat);
            return None;
        }

        self.is_submitting = true;
        self.field_error = None;
        self.outcome = None;
        Some(self.email.clone())
    }

    pub fn complete_submit(&mut self, result: Result<ApiResponse, anyhow::Error>) {
        match result {
            Ok(response) if response.success => {
                self.outcome = Some(Outcome::Success(response.message.clone()));
                self.email.clear();
                self.success_dialog.show(response.message);
            }
            Ok(response) => {
                self.outcome = Some(Outcome::Error(response.message));
            }
            Err(e) => {
                tracing::warn!(error.cause_chain = ?e, "Email submission request failed");
                self.outcome = Some(Outcome::Error(SUBMISSION_FAILED_MESSAGE.into()));
            }
        }
        self.is_submitting = false;
    }

    #[tracing::instrument(name = "Submitting the signup form", skip_all)]
    pub async fn submit<S: Submitter>(&mut self, submitter: &S) {
        let Some(email) = self.begin_submit() else {
            return;
        };
        let result = submitter.submit(&email).await;
        self.complete_submit(result);
    }

    pub fn close_success_dialog(&mut self) {
        self.success_dialog.close();
    }
}
