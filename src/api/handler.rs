//! API Lambda handler: one entry point for every contact-form route.
//!
//! Per request the flow is strictly linear:
//! - CORS headers are computed before anything else
//! - `OPTIONS` short-circuits as a preflight
//! - the request is validated, then exactly one outbound call is made
//! - the outcome is normalized into a single JSON response

use lambda_runtime::{Error, LambdaEvent};
use reqwest::Client as HttpClient;
use serde_json::Value;
use tracing::{error, info, warn};

use super::cors::CorsPolicy;
use super::request::ApiRequest;
use super::response::{self, ApiResponse};
use super::validation::{require_json_content, require_method, validate_submission};
use crate::clients::{GithubIssueNotifier, InstagramFeedClient, Notifier, ResendEmailNotifier};
use crate::core::config::AppConfig;
use crate::core::models::{DispatchResult, FeedResponse};
use crate::errors::{ContactError, ErrorKind, NormalizedError, Provider};

pub use self::function_handler as handler;

pub const FEED_NOT_CONFIGURED: &str = "Instagram feed not configured.";
pub const FEED_TIMEOUT: &str = "Request timeout.";
pub const FEED_UNAVAILABLE: &str = "Unable to load feed.";

type CorsHeaders = Vec<(&'static str, String)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    CreateIssue,
    SendEmail,
    InstagramFeed,
}

impl Route {
    /// Matches on the last path segment, so `/api/send-email` and `/send-email/` both work.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim_end_matches('/').rsplit('/').next()? {
            "create-issue" => Some(Route::CreateIssue),
            "send-email" => Some(Route::SendEmail),
            "instagram-feed" => Some(Route::InstagramFeed),
            _ => None,
        }
    }

    #[must_use]
    pub fn method(self) -> &'static str {
        match self {
            Route::CreateIssue | Route::SendEmail => "POST",
            Route::InstagramFeed => "GET",
        }
    }

    fn methods(route: Option<Self>) -> Vec<&'static str> {
        route.map_or_else(|| vec!["GET", "POST"], |r| vec![r.method()])
    }
}

/// Lambda handler for the API entrypoint.
///
/// Never returns `Err`: every failure is answered with a JSON error response.
#[tracing::instrument(level = "info", skip(event), fields(request_id = %event.context.request_id))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<ApiResponse, Error> {
    let request = ApiRequest::from_event(&event.payload);
    let http = HttpClient::new();

    let response = match AppConfig::from_env() {
        Ok(config) => handle_request(&config, &http, &request).await,
        Err(e) => {
            error!("Config error: {}", e);
            handle_unconfigured(&e, &request)
        }
    };
    Ok(response)
}

/// Answers a request when the configuration could not be loaded.
///
/// Preflight and the feed keep their usual shape under wildcard CORS; only the
/// write routes surface the configuration error.
#[must_use]
pub fn handle_unconfigured(error: &ContactError, request: &ApiRequest) -> ApiResponse {
    let route = Route::from_path(&request.path);
    let cors = CorsPolicy::Wildcard.headers(request.origin(), &Route::methods(route));

    if is_preflight(request) {
        return response::preflight(&cors);
    }

    match route {
        None => fail(&ContactError::NotFound, &cors),
        Some(Route::InstagramFeed) => {
            match require_method(&request.method, Route::InstagramFeed.method()) {
                Ok(()) => response::feed_response(
                    &FeedResponse::unavailable(FEED_NOT_CONFIGURED),
                    &cors,
                ),
                Err(e) => fail(&e, &cors),
            }
        }
        Some(_) => fail(error, &cors),
    }
}

fn is_preflight(request: &ApiRequest) -> bool {
    request.method.eq_ignore_ascii_case("OPTIONS")
}

/// Routes one request. Always yields exactly one response.
pub async fn handle_request(
    config: &AppConfig,
    http: &HttpClient,
    request: &ApiRequest,
) -> ApiResponse {
    let route = Route::from_path(&request.path);
    let cors = config
        .cors
        .headers(request.origin(), &Route::methods(route));

    info!(method = %request.method, path = %request.path, ?route, "Handling request");

    if is_preflight(request) {
        return response::preflight(&cors);
    }

    match route {
        None => fail(&ContactError::NotFound, &cors),
        Some(Route::InstagramFeed) => instagram_feed(config, http, request, &cors).await,
        Some(route) => match submit_inquiry(config, http, route, request).await {
            Ok(result) => response::dispatch_success(&result, &cors),
            Err(e) => fail(&e, &cors),
        },
    }
}

async fn submit_inquiry(
    config: &AppConfig,
    http: &HttpClient,
    route: Route,
    request: &ApiRequest,
) -> Result<DispatchResult, ContactError> {
    require_method(&request.method, route.method())?;
    require_json_content(request.header("Content-Type"))?;
    let submission = validate_submission(request.body.as_deref())?;

    let notifier = notifier_for(config, http, route)?;
    info!(provider = %notifier.provider(), "Dispatching inquiry");
    notifier.dispatch(&submission).await
}

fn notifier_for(
    config: &AppConfig,
    http: &HttpClient,
    route: Route,
) -> Result<Box<dyn Notifier>, ContactError> {
    match route {
        Route::CreateIssue => Ok(Box::new(GithubIssueNotifier::new(
            http.clone(),
            config.github()?,
        ))),
        Route::SendEmail => Ok(Box::new(ResendEmailNotifier::new(
            http.clone(),
            config.resend()?,
        ))),
        Route::InstagramFeed => Err(ContactError::Unexpected(
            "feed route has no notifier".to_string(),
        )),
    }
}

/// The read path degrades to `ok: false` instead of failing the page.
async fn instagram_feed(
    config: &AppConfig,
    http: &HttpClient,
    request: &ApiRequest,
    cors: &CorsHeaders,
) -> ApiResponse {
    if let Err(e) = require_method(&request.method, Route::InstagramFeed.method()) {
        return fail(&e, cors);
    }

    let feed = match config.instagram() {
        Err(e) => {
            warn!("Instagram feed not configured: {}", e);
            FeedResponse::unavailable(FEED_NOT_CONFIGURED)
        }
        Ok(instagram) => match InstagramFeedClient::new(http.clone(), instagram)
            .fetch_feed()
            .await
        {
            Ok(items) => FeedResponse::loaded(items),
            Err(ContactError::Timeout(_)) => FeedResponse::unavailable(FEED_TIMEOUT),
            Err(ContactError::Provider { .. }) => {
                FeedResponse::unavailable(Provider::Instagram.failure_message())
            }
            Err(e) => {
                error!("Instagram feed error: {}", e);
                FeedResponse::unavailable(FEED_UNAVAILABLE)
            }
        },
    };

    response::feed_response(&feed, cors)
}

fn fail(error: &ContactError, cors: &CorsHeaders) -> ApiResponse {
    let normalized = NormalizedError::from(error);
    match normalized.kind {
        ErrorKind::Client => warn!(
            status = normalized.status,
            detail = %normalized.internal_detail,
            "Rejected request"
        ),
        _ => error!(
            status = normalized.status,
            kind = ?normalized.kind,
            detail = %normalized.internal_detail,
            "Request failed"
        ),
    }
    response::error_response(&normalized, cors)
}
