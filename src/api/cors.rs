//! CORS origin policy and the fixed header set attached to every response.

use crate::errors::ContactError;

pub const ALLOW_HEADERS: &str = "Content-Type";
pub const MAX_AGE_SECS: &str = "86400";

/// Which origin is echoed back in `Access-Control-Allow-Origin`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsPolicy {
    /// `*` for every request.
    Wildcard,
    /// Echo the request origin when it is listed, `*` otherwise.
    AllowList(Vec<String>),
}

impl CorsPolicy {
    /// Parses `CORS_POLICY` and `ALLOWED_ORIGINS`.
    pub fn from_settings(
        policy: Option<&str>,
        allowed_origins: Option<&str>,
    ) -> Result<Self, ContactError> {
        let origins: Vec<String> = allowed_origins
            .unwrap_or_default()
            .split(',')
            .map(|o| o.trim().trim_end_matches('/').to_string())
            .filter(|o| !o.is_empty())
            .collect();

        match policy.map(str::to_ascii_lowercase).as_deref() {
            Some("wildcard") => Ok(CorsPolicy::Wildcard),
            Some("allow-list" | "allowlist") if origins.is_empty() => Err(
                ContactError::Configuration("ALLOWED_ORIGINS (required by CORS_POLICY)".into()),
            ),
            Some("allow-list" | "allowlist") => Ok(CorsPolicy::AllowList(origins)),
            Some(other) => Err(ContactError::Configuration(format!(
                "CORS_POLICY has unknown value '{other}'"
            ))),
            None if origins.is_empty() => Ok(CorsPolicy::Wildcard),
            None => Ok(CorsPolicy::AllowList(origins)),
        }
    }

    #[must_use]
    pub fn allow_origin(&self, request_origin: Option<&str>) -> String {
        match (self, request_origin) {
            (CorsPolicy::AllowList(origins), Some(origin))
                if origins.iter().any(|o| o == origin.trim_end_matches('/')) =>
            {
                origin.to_string()
            }
            _ => "*".to_string(),
        }
    }

    /// Builds the CORS header set for one response.
    #[must_use]
    pub fn headers(
        &self,
        request_origin: Option<&str>,
        allowed_methods: &[&str],
    ) -> Vec<(&'static str, String)> {
        let mut methods = allowed_methods.to_vec();
        methods.push("OPTIONS");

        let mut headers = vec![
            (
                "Access-Control-Allow-Origin",
                self.allow_origin(request_origin),
            ),
            ("Access-Control-Allow-Methods", methods.join(", ")),
            ("Access-Control-Allow-Headers", ALLOW_HEADERS.to_string()),
            ("Access-Control-Max-Age", MAX_AGE_SECS.to_string()),
        ];
        if matches!(self, CorsPolicy::AllowList(_)) {
            headers.push(("Vary", "Origin".to_string()));
        }
        headers
    }
}
