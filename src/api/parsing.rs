use base64::{Engine as _, engine::general_purpose};
use serde_json::Value;
use std::borrow::Cow;

use crate::errors::BotError;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// HTTP method of an API Gateway event (REST `httpMethod` or HTTP API
/// `requestContext.http.method`).
pub fn request_method(payload: &Value) -> Option<&str> {
    v_str(payload, &["httpMethod"]).or_else(|| v_str(payload, &["requestContext", "http", "method"]))
}

pub fn is_preflight(payload: &Value) -> bool {
    request_method(payload).is_some_and(|m| m.eq_ignore_ascii_case("OPTIONS"))
}

fn decode_body<'a>(raw: &'a str, payload: &Value) -> Result<Cow<'a, str>, BotError> {
    let base64_encoded = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if !base64_encoded {
        return Ok(Cow::Borrowed(raw));
    }

    let bytes = general_purpose::STANDARD
        .decode(raw.trim())
        .map_err(|e| BotError::MalformedBody(format!("invalid base64 body: {e}")))?;
    String::from_utf8(bytes)
        .map(Cow::Owned)
        .map_err(|e| BotError::MalformedBody(format!("body is not valid UTF-8: {e}")))
}

/// Pulls the `frage` field out of an inbound event.
///
/// Looks in a JSON-string `body`, then a structured `body`, then the top level
/// when there is no body at all.
///
/// # Errors
///
/// [`BotError::MalformedBody`] if a string body is not JSON,
/// [`BotError::MissingQuestion`] if `frage` is absent, not a string, or empty.
pub fn extract_question(payload: &Value) -> Result<String, BotError> {
    let frage = match payload.get("body") {
        Some(Value::String(raw)) => {
            let decoded = decode_body(raw, payload)?;
            let body: Value = serde_json::from_str(&decoded)
                .map_err(|e| BotError::MalformedBody(e.to_string()))?;
            body.get("frage").cloned()
        }
        Some(Value::Null) | None => payload.get("frage").cloned(),
        Some(body) => body.get("frage").cloned(),
    };

    match frage {
        Some(Value::String(question)) if !question.is_empty() => Ok(question),
        _ => Err(BotError::MissingQuestion),
    }
}
