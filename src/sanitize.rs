//! Defense-in-depth stripping of script injection from free-text fields.
//!
//! This is not an HTML sanitizer: markup other than the patterns below is
//! left untouched.

use once_cell::sync::Lazy;
use regex::Regex;

/// `<script ...> ... </script>` blocks, across lines, up to the first closing tag.
static SCRIPT_BLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<script\b.*?</script>").expect("static regex compile"));

static JAVASCRIPT_URI_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)javascript:").expect("static regex compile"));

/// Inline event handlers such as `onclick=` or `onerror =`.
static EVENT_HANDLER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)on[a-z0-9_]+\s*=").expect("static regex compile"));

#[must_use]
pub fn sanitize_text(text: &str) -> String {
    let without_scripts = SCRIPT_BLOCK_RE.replace_all(text, "");
    let without_uris = JAVASCRIPT_URI_RE.replace_all(&without_scripts, "");
    EVENT_HANDLER_RE
        .replace_all(&without_uris, "")
        .into_owned()
}
