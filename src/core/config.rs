use std::env;
use std::time::Duration;

use crate::api::cors::CorsPolicy;
use crate::errors::ContactError;

pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
pub const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com/emails";
pub const DEFAULT_GRAPH_API_URL: &str = "https://graph.facebook.com";
pub const DEFAULT_FROM_EMAIL: &str = "Rodrigo Eric Studio <onboarding@resend.dev>";

pub const ISSUE_TIMEOUT: Duration = Duration::from_secs(10);
pub const EMAIL_TIMEOUT: Duration = Duration::from_secs(10);
pub const FEED_TIMEOUT: Duration = Duration::from_secs(8);

/// Process-wide configuration, read once per invocation.
///
/// Provider credentials are kept optional here; their absence only matters
/// when the matching route is called.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub cors: CorsPolicy,

    pub github_token: Option<String>,
    pub github_owner: Option<String>,
    pub github_repo: Option<String>,
    pub github_api_url: String,
    pub issue_timeout: Duration,

    pub resend_api_key: Option<String>,
    pub contact_email: Option<String>,
    pub from_email: String,
    pub resend_api_url: String,
    pub email_timeout: Duration,

    pub instagram_access_token: Option<String>,
    pub instagram_user_id: Option<String>,
    pub graph_api_url: String,
    pub feed_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cors: CorsPolicy::Wildcard,
            github_token: None,
            github_owner: None,
            github_repo: None,
            github_api_url: DEFAULT_GITHUB_API_URL.to_string(),
            issue_timeout: ISSUE_TIMEOUT,
            resend_api_key: None,
            contact_email: None,
            from_email: DEFAULT_FROM_EMAIL.to_string(),
            resend_api_url: DEFAULT_RESEND_API_URL.to_string(),
            email_timeout: EMAIL_TIMEOUT,
            instagram_access_token: None,
            instagram_user_id: None,
            graph_api_url: DEFAULT_GRAPH_API_URL.to_string(),
            feed_timeout: FEED_TIMEOUT,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ContactError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ContactError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let cors = CorsPolicy::from_settings(
            var("CORS_POLICY").as_deref(),
            var("ALLOWED_ORIGINS").as_deref(),
        )?;

        let defaults = Self::default();
        Ok(Self {
            cors,
            github_token: var("GITHUB_TOKEN"),
            github_owner: var("GITHUB_OWNER"),
            github_repo: var("GITHUB_REPO"),
            github_api_url: var("GITHUB_API_URL").unwrap_or(defaults.github_api_url),
            resend_api_key: var("RESEND_API_KEY"),
            contact_email: var("CONTACT_EMAIL"),
            from_email: var("FROM_EMAIL").unwrap_or(defaults.from_email),
            resend_api_url: var("RESEND_API_URL").unwrap_or(defaults.resend_api_url),
            instagram_access_token: var("INSTAGRAM_ACCESS_TOKEN"),
            instagram_user_id: var("INSTAGRAM_USER_ID"),
            graph_api_url: var("GRAPH_API_URL").unwrap_or(defaults.graph_api_url),
            ..defaults
        })
    }

    pub fn github(&self) -> Result<GithubConfig, ContactError> {
        Ok(GithubConfig {
            token: required(self.github_token.as_ref(), "GITHUB_TOKEN")?,
            owner: required(self.github_owner.as_ref(), "GITHUB_OWNER")?,
            repo: required(self.github_repo.as_ref(), "GITHUB_REPO")?,
            api_url: self.github_api_url.trim_end_matches('/').to_string(),
            timeout: self.issue_timeout,
        })
    }

    pub fn resend(&self) -> Result<ResendConfig, ContactError> {
        Ok(ResendConfig {
            api_key: required(self.resend_api_key.as_ref(), "RESEND_API_KEY")?,
            to: required(self.contact_email.as_ref(), "CONTACT_EMAIL")?,
            from: self.from_email.clone(),
            api_url: self.resend_api_url.clone(),
            timeout: self.email_timeout,
        })
    }

    pub fn instagram(&self) -> Result<InstagramConfig, ContactError> {
        Ok(InstagramConfig {
            access_token: required(
                self.instagram_access_token.as_ref(),
                "INSTAGRAM_ACCESS_TOKEN",
            )?,
            user_id: required(self.instagram_user_id.as_ref(), "INSTAGRAM_USER_ID")?,
            api_url: self.graph_api_url.trim_end_matches('/').to_string(),
            timeout: self.feed_timeout,
        })
    }
}

fn required(value: Option<&String>, name: &str) -> Result<String, ContactError> {
    value
        .cloned()
        .ok_or_else(|| ContactError::Configuration(name.to_string()))
}

#[derive(Debug, Clone)]
pub struct GithubConfig {
    pub token: String,
    pub owner: String,
    pub repo: String,
    pub api_url: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct ResendConfig {
    pub api_key: String,
    pub to: String,
    pub from: String,
    pub api_url: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct InstagramConfig {
    pub access_token: String,
    pub user_id: String,
    pub api_url: String,
    pub timeout: Duration,
}
