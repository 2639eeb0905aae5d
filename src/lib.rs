//! Inquiry - stateless contact-form handlers for a tattoo studio website.
//!
//! A single API Lambda serves three routes:
//! 1. `POST /create-issue` validates a submission and files it as a GitHub issue
//! 2. `POST /send-email` validates a submission and emails it through Resend
//! 3. `GET /instagram-feed` returns the studio's recent Instagram media
//!
//! # Architecture
//!
//! Each invocation is independent: the configuration is read from the
//! environment, the request is validated and sanitized, and exactly one
//! outbound call is made under a timeout. Nothing is shared between requests.
//!
//! - `lambda_runtime` for serverless execution
//! - `reqwest` for the outbound provider calls
//! - `tracing` with a JSON formatter for `CloudWatch` logs
//!
//! # Example
//!
//! ```no_run
//! use inquiry::api::handle_request;
//! use inquiry::api::request::ApiRequest;
//! use inquiry::core::config::AppConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     inquiry::setup_logging();
//!
//!     let config = AppConfig {
//!         github_token: Some("ghp_dummy".to_string()),
//!         github_owner: Some("studio".to_string()),
//!         github_repo: Some("inquiries".to_string()),
//!         ..AppConfig::default()
//!     };
//!
//!     let request = ApiRequest {
//!         method: "POST".to_string(),
//!         path: "/create-issue".to_string(),
//!         headers: vec![("Content-Type".to_string(), "application/json".to_string())],
//!         body: Some(
//!             r#"{"name":"Ana","email":"ana@example.com","message":"I want a sleeve tattoo design"}"#
//!                 .to_string(),
//!         ),
//!     };
//!
//!     let response = handle_request(&config, &reqwest::Client::new(), &request).await;
//!     println!("{} {}", response.status_code, response.body);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod clients;
pub mod core;
pub mod errors;
pub mod sanitize;
pub mod utils;

pub use errors::{ContactError, NormalizedError};

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
///
/// # Example
///
/// ```
/// inquiry::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
