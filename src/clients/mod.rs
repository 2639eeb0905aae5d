//! Outbound provider clients.
//!
//! Each invocation makes exactly one call, bounded by a timer. Dropping the
//! timed-out future aborts the in-flight request.

pub mod github;
pub mod instagram;
pub mod resend;

use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;
use tracing::{error, warn};

use crate::core::models::{DispatchResult, Submission};
use crate::errors::{ContactError, Provider};

pub use github::GithubIssueNotifier;
pub use instagram::InstagramFeedClient;
pub use resend::ResendEmailNotifier;

/// A write-path provider that forwards one submission.
#[async_trait]
pub trait Notifier: Send + Sync {
    fn provider(&self) -> Provider;

    async fn dispatch(&self, submission: &Submission) -> Result<DispatchResult, ContactError>;
}

/// Runs `call` under `limit`; expiry becomes [`ContactError::Timeout`].
pub async fn with_timeout<T, F>(
    provider: Provider,
    limit: Duration,
    call: F,
) -> Result<T, ContactError>
where
    F: Future<Output = Result<T, ContactError>>,
{
    if let Ok(result) = tokio::time::timeout(limit, call).await {
        result
    } else {
        warn!(%provider, timeout = ?limit, "Outbound request timed out");
        Err(ContactError::Timeout(provider))
    }
}

/// Fails with [`ContactError::Provider`] on a non-2xx status, logging the body.
pub async fn check_status(
    provider: Provider,
    response: reqwest::Response,
) -> Result<reqwest::Response, ContactError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "<failed to read body>".to_string());
    error!(%provider, status = status.as_u16(), body = %body, "Provider returned an error");
    Err(ContactError::Provider {
        provider,
        status: status.as_u16(),
        body,
    })
}
