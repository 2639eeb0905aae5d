//! Issue-tracker notifier: each inquiry becomes a labelled GitHub issue.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Client as HttpClient;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use super::{Notifier, check_status, with_timeout};
use crate::core::config::GithubConfig;
use crate::core::models::{DispatchResult, Submission};
use crate::errors::{ContactError, Provider};
use crate::utils::text::truncate_with_ellipsis;

pub const APP_USER_AGENT: &str = "Tattoo-Studio-Contact-Form";
pub const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";
pub const ISSUE_LABELS: [&str; 2] = ["inquiry", "contact-form"];
pub const MAX_TITLE_CHARS: usize = 255;

#[derive(Debug, Deserialize)]
struct CreatedIssue {
    number: u64,
    html_url: Option<String>,
}

#[must_use]
pub fn issue_title(name: &str) -> String {
    truncate_with_ellipsis(&format!("New Tattoo Inquiry from {name}"), MAX_TITLE_CHARS)
}

#[must_use]
pub fn issue_body(submission: &Submission, submitted_at: DateTime<Utc>) -> String {
    format!(
        "## Contact Information\n\
         **Name:** {name}\n\
         **Email:** {email}\n\
         \n\
         ## Tattoo Idea\n\
         {message}\n\
         \n\
         ---\n\
         *Submitted via website contact form at {at}*",
        name = submission.name,
        email = submission.email,
        message = submission.message,
        at = submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
    )
}

pub struct GithubIssueNotifier {
    http: HttpClient,
    config: GithubConfig,
}

impl GithubIssueNotifier {
    #[must_use]
    pub fn new(http: HttpClient, config: GithubConfig) -> Self {
        Self { http, config }
    }

    fn issues_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/issues",
            self.config.api_url, self.config.owner, self.config.repo
        )
    }

    async fn create_issue(&self, submission: &Submission) -> Result<DispatchResult, ContactError> {
        let payload = json!({
            "title": issue_title(&submission.name),
            "body": issue_body(submission, Utc::now()),
            "labels": ISSUE_LABELS,
        });

        let response = self
            .http
            .post(self.issues_url())
            .bearer_auth(&self.config.token)
            .header(ACCEPT, GITHUB_ACCEPT)
            .header(USER_AGENT, APP_USER_AGENT)
            .json(&payload)
            .send()
            .await?;

        let issue: CreatedIssue = check_status(Provider::Github, response).await?.json().await?;
        info!(issue_number = issue.number, "Created GitHub issue");

        Ok(DispatchResult::IssueCreated {
            number: issue.number,
            url: issue.html_url,
        })
    }
}

#[async_trait]
impl Notifier for GithubIssueNotifier {
    fn provider(&self) -> Provider {
        Provider::Github
    }

    async fn dispatch(&self, submission: &Submission) -> Result<DispatchResult, ContactError> {
        with_timeout(
            Provider::Github,
            self.config.timeout,
            self.create_issue(submission),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_long_names_are_truncated_in_title() {
        let title = issue_title(&"n".repeat(300));
        assert_eq!(title.chars().count(), MAX_TITLE_CHARS);
        assert!(title.starts_with("New Tattoo Inquiry from nnn"));
        assert!(title.ends_with("..."));
    }

    #[test]
    fn test_body_embeds_fields_and_timestamp() {
        let submission = Submission {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            message: "I want a sleeve tattoo design".to_string(),
        };
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 12, 30, 0).unwrap();

        let body = issue_body(&submission, at);
        assert!(body.contains("**Name:** Ana"));
        assert!(body.contains("**Email:** ana@example.com"));
        assert!(body.contains("## Tattoo Idea\nI want a sleeve tattoo design"));
        assert!(body.contains("2026-03-01T12:30:00.000Z"));
    }
}
