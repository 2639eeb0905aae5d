use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;
use tracing::warn;

/// Transport-neutral view of one inbound HTTP request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl ApiRequest {
    /// Decodes an API gateway proxy event (payload format 1.0 or 2.0).
    #[must_use]
    pub fn from_event(payload: &Value) -> Self {
        let method = v_str(payload, &["requestContext", "http", "method"])
            .or_else(|| v_str(payload, &["httpMethod"]))
            .unwrap_or("")
            .to_ascii_uppercase();

        let path = payload
            .get("rawPath")
            .and_then(|v| v.as_str())
            .or_else(|| payload.get("path").and_then(|v| v.as_str()))
            .unwrap_or("/")
            .to_string();

        let headers = payload
            .get("headers")
            .and_then(Value::as_object)
            .map(|map| {
                map.iter()
                    .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                    .collect()
            })
            .unwrap_or_default();

        let is_base64 = payload
            .get("isBase64Encoded")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        let body = payload
            .get("body")
            .and_then(|v| v.as_str())
            .and_then(|raw| {
                if is_base64 {
                    decode_base64_body(raw)
                } else {
                    Some(raw.to_string())
                }
            });

        Self {
            method,
            path,
            headers,
            body,
        }
    }

    /// Case-insensitive header lookup.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn origin(&self) -> Option<&str> {
        self.header("Origin").filter(|o| !o.is_empty())
    }
}

fn decode_base64_body(raw: &str) -> Option<String> {
    match STANDARD.decode(raw) {
        Ok(bytes) => String::from_utf8(bytes).ok(),
        Err(e) => {
            warn!("Failed to decode base64 request body: {}", e);
            None
        }
    }
}

fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    cur.as_str()
}
