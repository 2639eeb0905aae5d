//! Response builders.
//!
//! Every builder takes the CORS header set computed up front, so no response
//! can leave without it.

use serde::Serialize;
use serde_json::{Value, json};
use std::collections::BTreeMap;
use tracing::error;

use crate::core::models::{DispatchResult, FeedResponse};
use crate::errors::NormalizedError;

pub const ISSUE_CREATED_MESSAGE: &str = "Your inquiry has been submitted successfully!";
pub const EMAIL_SENT_MESSAGE: &str = "Your inquiry has been sent. We'll get back to you soon!";
pub const FEED_CACHE_CONTROL: &str = "public, s-maxage=300, stale-while-revalidate=600";

const SECURITY_HEADERS: [(&str, &str); 4] = [
    ("X-Content-Type-Options", "nosniff"),
    ("X-Frame-Options", "DENY"),
    ("X-XSS-Protection", "1; mode=block"),
    ("Referrer-Policy", "strict-origin-when-cross-origin"),
];

/// API gateway proxy response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn new(status_code: u16, cors: &[(&'static str, String)]) -> Self {
        let mut headers: BTreeMap<String, String> = cors
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect();
        for (k, v) in SECURITY_HEADERS {
            headers.insert(k.to_string(), v.to_string());
        }
        Self {
            status_code,
            headers,
            body: String::new(),
        }
    }

    #[must_use]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_string(), value.to_string());
        self
    }

    #[must_use]
    pub fn with_json<T: Serialize>(mut self, body: &T) -> Self {
        self.body = serde_json::to_string(body).unwrap_or_else(|e| {
            error!("Failed to serialize response body: {}", e);
            "{}".to_string()
        });
        self.with_header("Content-Type", "application/json")
    }

    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Parses the body back into JSON; `None` for empty or non-JSON bodies.
    #[must_use]
    pub fn json_body(&self) -> Option<Value> {
        serde_json::from_str(&self.body).ok()
    }
}

/// 200 with an empty body for `OPTIONS`.
#[must_use]
pub fn preflight(cors: &[(&'static str, String)]) -> ApiResponse {
    ApiResponse::new(200, cors)
}

#[must_use]
pub fn error_response(error: &NormalizedError, cors: &[(&'static str, String)]) -> ApiResponse {
    let body = match &error.allowed_methods {
        Some(allowed) => json!({ "error": error.public_message, "allowedMethods": allowed }),
        None => json!({ "error": error.public_message }),
    };
    ApiResponse::new(error.status, cors).with_json(&body)
}

#[must_use]
pub fn dispatch_success(result: &DispatchResult, cors: &[(&'static str, String)]) -> ApiResponse {
    let body = match result {
        DispatchResult::IssueCreated { number, url } => {
            let mut body = json!({
                "success": true,
                "issueNumber": number,
                "message": ISSUE_CREATED_MESSAGE,
            });
            if let Some(url) = url {
                body["issueUrl"] = json!(url);
            }
            body
        }
        DispatchResult::EmailSent { .. } => json!({
            "success": true,
            "message": EMAIL_SENT_MESSAGE,
        }),
    };
    ApiResponse::new(200, cors).with_json(&body)
}

/// Feed responses are always 200; failures travel as `ok: false`.
#[must_use]
pub fn feed_response(feed: &FeedResponse, cors: &[(&'static str, String)]) -> ApiResponse {
    ApiResponse::new(200, cors)
        .with_json(feed)
        .with_header("Cache-Control", FEED_CACHE_CONTROL)
}
