//! Request validation: method, body shape, field bounds and email format.
//!
//! Produces a sanitized [`Submission`] or a client error that is safe to show.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::core::models::Submission;
use crate::errors::ContactError;
use crate::sanitize::sanitize_text;

pub const MAX_NAME: usize = 100;
pub const MAX_EMAIL: usize = 255;
pub const MIN_MESSAGE: usize = 10;
pub const MAX_MESSAGE: usize = 5000;

/// Simplified RFC 5322: permissive local part, hostname-style labels of 1–63 chars.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("static regex compile")
});

pub fn require_method(method: &str, allowed: &'static str) -> Result<(), ContactError> {
    if method.eq_ignore_ascii_case(allowed) {
        Ok(())
    } else {
        Err(ContactError::MethodNotAllowed {
            allowed: vec![allowed],
        })
    }
}

/// Rejects an explicit non-JSON `Content-Type`. A missing header is accepted.
pub fn require_json_content(content_type: Option<&str>) -> Result<(), ContactError> {
    match content_type {
        None => Ok(()),
        Some(ct) => {
            let mime = ct.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
            if mime.is_empty() || mime == "application/json" || mime.ends_with("+json") {
                Ok(())
            } else {
                Err(ContactError::UnsupportedMediaType)
            }
        }
    }
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Parses, validates and sanitizes a raw JSON body.
pub fn validate_submission(body: Option<&str>) -> Result<Submission, ContactError> {
    let parsed: Value = body
        .and_then(|b| serde_json::from_str(b).ok())
        .ok_or(ContactError::InvalidBody)?;
    let Some(fields) = parsed.as_object() else {
        return Err(ContactError::InvalidBody);
    };

    let (Some(name), Some(email), Some(message)) = (
        field_text(fields.get("name")),
        field_text(fields.get("email")),
        field_text(fields.get("message")),
    ) else {
        return Err(ContactError::MissingFields);
    };

    let name = name.trim().to_string();
    let email = email.trim().to_lowercase();
    let message = message.trim().to_string();

    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err(ContactError::MissingFields);
    }

    check_length(&name, "Name", 1, MAX_NAME)?;
    check_length(&email, "Email", 1, MAX_EMAIL)?;
    if !is_valid_email(&email) {
        return Err(ContactError::InvalidEmail);
    }
    check_length(&message, "Message", MIN_MESSAGE, MAX_MESSAGE)?;

    Ok(Submission {
        name: sanitize_text(&name),
        email: sanitize_text(&email),
        message: sanitize_text(&message),
    })
}

/// Strings pass through; truthy numbers and booleans are stringified.
///
/// `false`, zero and every non-scalar count as absent.
fn field_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

fn check_length(
    value: &str,
    field: &'static str,
    min: usize,
    max: usize,
) -> Result<(), ContactError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(ContactError::FieldLength { field, min, max });
    }
    Ok(())
}
