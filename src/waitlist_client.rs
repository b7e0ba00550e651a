use std::time::Duration;

use anyhow::Context;
use reqwest::{Client, Url};
use serde::Serialize;

use crate::{domain::ApiResponse, form::Submitter, routes::SUBMIT_EMAIL_PATH};

/// HTTP client for the registration endpoint.
#[derive(Clone, Debug)]
pub struct WaitlistClient {
    http_client: Client,
    submit_url: Url,
}

#[derive(Serialize)]
struct SubmitEmailRequest<'a> {
    email: &'a str,
}

impl WaitlistClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, anyhow::Error> {
        // Joined relative to a slash-terminated base so a path prefix survives.
        let base_url_dir = format!("{}/", base_url.trim_end_matches('/'));
        let submit_url = Url::parse(&base_url_dir)
            .and_then(|url| url.join(SUBMIT_EMAIL_PATH.trim_start_matches('/')))
            .with_context(|| format!("Failed parsing waitlist base url {base_url}."))?;
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed building the HTTP client.")?;

        Ok(Self {
            http_client,
            submit_url,
        })
    }

    /// Any status carrying a structured body is returned as `Ok`; only
    /// transport and decoding failures are errors.
    #[tracing::instrument(name = "Posting email to the waitlist", skip(self))]
    pub async fn submit_email(&self, email: &str) -> Result<ApiResponse, reqwest::Error> {
        self.http_client
            .post(self.submit_url.clone())
            .json(&SubmitEmailRequest { email })
            .send()
            .await?
            .json::<ApiResponse>()
            .await
    }
}

impl Submitter for WaitlistClient {
    async fn submit(&self, email: &str) -> Result<ApiResponse, anyhow::Error> {
        Ok(self.submit_email(email).await?)
    }
}
