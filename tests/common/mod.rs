#![allow(dead_code)]

use inquiry::api::request::ApiRequest;
use inquiry::core::config::AppConfig;
use serde_json::{Value, json};
use std::time::Duration;

pub const ANA_MESSAGE: &str = "I want a sleeve tattoo design";

pub fn ana() -> Value {
    json!({
        "name": "Ana",
        "email": "ana@example.com",
        "message": ANA_MESSAGE
    })
}

pub fn post(path: &str, body: &Value) -> ApiRequest {
    ApiRequest {
        method: "POST".to_string(),
        path: path.to_string(),
        headers: vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Origin".to_string(), "https://studio.example".to_string()),
        ],
        body: Some(body.to_string()),
    }
}

pub fn request(method: &str, path: &str) -> ApiRequest {
    ApiRequest {
        method: method.to_string(),
        path: path.to_string(),
        ..ApiRequest::default()
    }
}

/// Configuration with every provider pointed at `base_url` and short timeouts.
pub fn config_for(base_url: &str) -> AppConfig {
    AppConfig {
        github_token: Some("ghp_test".to_string()),
        github_owner: Some("studio".to_string()),
        github_repo: Some("inquiries".to_string()),
        github_api_url: base_url.to_string(),
        issue_timeout: Duration::from_millis(500),
        resend_api_key: Some("re_test".to_string()),
        contact_email: Some("owner@studio.example".to_string()),
        resend_api_url: format!("{base_url}/emails"),
        email_timeout: Duration::from_millis(500),
        instagram_access_token: Some("ig_test".to_string()),
        instagram_user_id: Some("17841400000000000".to_string()),
        graph_api_url: base_url.to_string(),
        feed_timeout: Duration::from_millis(500),
        ..AppConfig::default()
    }
}
