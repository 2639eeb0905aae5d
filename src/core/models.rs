use serde::{Deserialize, Serialize};

/// A validated and sanitized contact-form payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// What a successful write-path dispatch produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchResult {
    IssueCreated { number: u64, url: Option<String> },
    EmailSent { id: Option<String> },
}

/// One item of the public portfolio feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    pub id: String,
    pub url: String,
    pub thumb: String,
    pub caption: String,
    pub link: String,
}

/// Body of every feed response, including soft failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedResponse {
    pub ok: bool,
    pub feed: Vec<FeedItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FeedResponse {
    #[must_use]
    pub fn loaded(feed: Vec<FeedItem>) -> Self {
        Self {
            ok: true,
            feed,
            message: None,
        }
    }

    #[must_use]
    pub fn unavailable(message: &str) -> Self {
        Self {
            ok: false,
            feed: Vec::new(),
            message: Some(message.to_string()),
        }
    }
}
