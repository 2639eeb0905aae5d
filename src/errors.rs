use thiserror::Error;

/// Generic message for any misconfiguration. Never names the missing variable.
pub const CONFIGURATION_MESSAGE: &str =
    "Server configuration error. Please contact the administrator.";
pub const TIMEOUT_MESSAGE: &str = "Request timeout. Please try again.";
pub const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

/// Outbound services a request can be forwarded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Github,
    Resend,
    Instagram,
}

impl Provider {
    #[must_use]
    pub fn failure_message(self) -> &'static str {
        match self {
            Provider::Github => "Failed to process your inquiry. Please try again later.",
            Provider::Resend => "Failed to send your message. Please try again later.",
            Provider::Instagram => "Unable to load Instagram feed.",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::Github => write!(f, "GitHub"),
            Provider::Resend => write!(f, "Resend"),
            Provider::Instagram => write!(f, "Instagram"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("Invalid request body")]
    InvalidBody,

    #[error("Missing required fields")]
    MissingFields,

    #[error("{field} must be {min}–{max} characters")]
    FieldLength {
        field: &'static str,
        min: usize,
        max: usize,
    },

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Method not allowed")]
    MethodNotAllowed { allowed: Vec<&'static str> },

    #[error("Content-Type must be application/json")]
    UnsupportedMediaType,

    #[error("Not found")]
    NotFound,

    #[error("Missing configuration: {0}")]
    Configuration(String),

    #[error("{provider} API returned {status}: {body}")]
    Provider {
        provider: Provider,
        status: u16,
        body: String,
    },

    #[error("{0} request timed out")]
    Timeout(Provider),

    #[error("Failed to send HTTP request: {0}")]
    Http(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl From<reqwest::Error> for ContactError {
    fn from(error: reqwest::Error) -> Self {
        ContactError::Http(error.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Client,
    Configuration,
    Provider,
    Timeout,
    Unexpected,
}

/// The only error shape handed to the response formatter.
///
/// `internal_detail` is for logs; `public_message` is what the caller sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedError {
    pub kind: ErrorKind,
    pub status: u16,
    pub public_message: String,
    pub internal_detail: String,
    pub allowed_methods: Option<Vec<&'static str>>,
}

impl From<&ContactError> for NormalizedError {
    fn from(error: &ContactError) -> Self {
        let internal_detail = error.to_string();
        let (kind, status, public_message) = match error {
            ContactError::InvalidBody
            | ContactError::MissingFields
            | ContactError::FieldLength { .. }
            | ContactError::InvalidEmail => (ErrorKind::Client, 400, internal_detail.clone()),
            ContactError::MethodNotAllowed { .. } => {
                (ErrorKind::Client, 405, internal_detail.clone())
            }
            ContactError::UnsupportedMediaType => (ErrorKind::Client, 415, internal_detail.clone()),
            ContactError::NotFound => (ErrorKind::Client, 404, internal_detail.clone()),
            ContactError::Configuration(_) => (
                ErrorKind::Configuration,
                500,
                CONFIGURATION_MESSAGE.to_string(),
            ),
            ContactError::Provider { provider, .. } => (
                ErrorKind::Provider,
                500,
                provider.failure_message().to_string(),
            ),
            ContactError::Timeout(_) => (ErrorKind::Timeout, 504, TIMEOUT_MESSAGE.to_string()),
            ContactError::Http(_) | ContactError::Unexpected(_) => (
                ErrorKind::Unexpected,
                500,
                UNEXPECTED_MESSAGE.to_string(),
            ),
        };

        let allowed_methods = match error {
            ContactError::MethodNotAllowed { allowed } => Some(allowed.clone()),
            _ => None,
        };

        Self {
            kind,
            status,
            public_message,
            internal_detail,
            allowed_methods,
        }
    }
}

impl From<ContactError> for NormalizedError {
    fn from(error: ContactError) -> Self {
        Self::from(&error)
    }
}
