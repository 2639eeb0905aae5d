mod common;

use common::{ana, config_for, post};
use inquiry::api::handle_request;
use inquiry::api::response::ISSUE_CREATED_MESSAGE;
use inquiry::clients::{GithubIssueNotifier, Notifier};
use inquiry::core::models::{DispatchResult, Submission};
use inquiry::errors::{ContactError, TIMEOUT_MESSAGE};
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ISSUES_PATH: &str = "/repos/studio/inquiries/issues";

#[tokio::test]
async fn test_create_issue_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ISSUES_PATH))
        .and(header("authorization", "Bearer ghp_test"))
        .and(header("user-agent", "Tattoo-Studio-Contact-Form"))
        .and(header("accept", "application/vnd.github.v3+json"))
        .and(body_partial_json(json!({
            "title": "New Tattoo Inquiry from Ana",
            "labels": ["inquiry", "contact-form"]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "number": 42,
            "html_url": "https://github.com/studio/inquiries/issues/42"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = config_for(&mock_server.uri());
    let resp = handle_request(&config, &Client::new(), &post("/create-issue", &ana())).await;

    assert_eq!(resp.status_code, 200);
    assert_eq!(
        resp.json_body().unwrap(),
        json!({
            "success": true,
            "issueNumber": 42,
            "issueUrl": "https://github.com/studio/inquiries/issues/42",
            "message": ISSUE_CREATED_MESSAGE
        })
    );
    assert_eq!(
        resp.header("Access-Control-Allow-Origin"),
        Some("*")
    );
}

#[tokio::test]
async fn test_issue_body_carries_submission() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ISSUES_PATH))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "number": 7 })))
        .mount(&mock_server)
        .await;

    let config = config_for(&mock_server.uri());
    let notifier = GithubIssueNotifier::new(Client::new(), config.github().unwrap());
    let submission = Submission {
        name: "Ana".to_string(),
        email: "ana@example.com".to_string(),
        message: "I want a sleeve tattoo design".to_string(),
    };

    let result = notifier.dispatch(&submission).await.unwrap();
    assert_eq!(
        result,
        DispatchResult::IssueCreated {
            number: 7,
            url: None
        }
    );

    let received = mock_server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    let sent: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
    let body = sent["body"].as_str().unwrap();
    assert!(body.contains("**Email:** ana@example.com"));
    assert!(body.contains("I want a sleeve tattoo design"));
}

#[tokio::test]
async fn test_provider_error_is_generic_500() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ISSUES_PATH))
        .respond_with(
            ResponseTemplate::new(422).set_body_string("{\"message\":\"Validation Failed\"}"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = config_for(&mock_server.uri());
    let resp = handle_request(&config, &Client::new(), &post("/create-issue", &ana())).await;

    assert_eq!(resp.status_code, 500);
    assert_eq!(
        resp.json_body().unwrap(),
        json!({ "error": "Failed to process your inquiry. Please try again later." })
    );
    assert!(!resp.body.contains("Validation Failed"));
}

#[tokio::test]
async fn test_slow_provider_times_out_without_retry() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ISSUES_PATH))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({ "number": 1 }))
                .set_delay(Duration::from_secs(3)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut config = config_for(&mock_server.uri());
    config.issue_timeout = Duration::from_millis(200);
    let resp = handle_request(&config, &Client::new(), &post("/create-issue", &ana())).await;

    assert_eq!(resp.status_code, 504);
    assert_eq!(resp.json_body().unwrap()["error"], TIMEOUT_MESSAGE);
    assert!(resp.header("Access-Control-Allow-Origin").is_some());
}

#[tokio::test]
async fn test_notifier_reports_timeout_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201).set_delay(Duration::from_secs(3)))
        .mount(&mock_server)
        .await;

    let mut config = config_for(&mock_server.uri());
    config.issue_timeout = Duration::from_millis(100);
    let notifier = GithubIssueNotifier::new(Client::new(), config.github().unwrap());
    let submission = Submission {
        name: "Ana".to_string(),
        email: "ana@example.com".to_string(),
        message: "A tiny swallow".to_string(),
    };

    let err = notifier.dispatch(&submission).await.unwrap_err();
    assert!(matches!(err, ContactError::Timeout(_)));
}
