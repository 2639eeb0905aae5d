//! Transactional-email notifier backed by the Resend API.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Client as HttpClient;
use serde_json::{Value, json};
use tracing::info;

use super::{Notifier, check_status, with_timeout};
use crate::core::config::ResendConfig;
use crate::core::models::{DispatchResult, Submission};
use crate::errors::{ContactError, Provider};

#[must_use]
pub fn email_subject(name: &str) -> String {
    format!("Tattoo inquiry from {name}")
}

#[must_use]
pub fn email_html(submission: &Submission, sent_at: DateTime<Utc>) -> String {
    format!(
        "<h2>Contact form – Rodrigo Eric Studio</h2>\n\
         <p><strong>Name:</strong> {name}</p>\n\
         <p><strong>Email:</strong> {email}</p>\n\
         <p><strong>Message:</strong></p>\n\
         <pre style=\"white-space: pre-wrap; font-family: inherit;\">{message}</pre>\n\
         <p><small>Sent from website contact form at {at}</small></p>",
        name = submission.name,
        email = submission.email,
        message = submission.message,
        at = sent_at.to_rfc3339_opts(SecondsFormat::Millis, true),
    )
}

pub struct ResendEmailNotifier {
    http: HttpClient,
    config: ResendConfig,
}

impl ResendEmailNotifier {
    #[must_use]
    pub fn new(http: HttpClient, config: ResendConfig) -> Self {
        Self { http, config }
    }

    async fn send_email(&self, submission: &Submission) -> Result<DispatchResult, ContactError> {
        let payload = json!({
            "from": self.config.from,
            "to": [self.config.to],
            "reply_to": submission.email,
            "subject": email_subject(&submission.name),
            "html": email_html(submission, Utc::now()),
        });

        let response = self
            .http
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await?;

        let response = check_status(Provider::Resend, response).await?;
        // Resend's success body is informational only.
        let data: Value = response.json().await.unwrap_or(Value::Null);
        let id = data.get("id").and_then(Value::as_str).map(ToString::to_string);
        info!(email_id = id.as_deref().unwrap_or("unknown"), "Sent inquiry email");

        Ok(DispatchResult::EmailSent { id })
    }
}

#[async_trait]
impl Notifier for ResendEmailNotifier {
    fn provider(&self) -> Provider {
        Provider::Resend
    }

    async fn dispatch(&self, submission: &Submission) -> Result<DispatchResult, ContactError> {
        with_timeout(
            Provider::Resend,
            self.config.timeout,
            self.send_email(submission),
        )
        .await
    }
}
