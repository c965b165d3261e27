//! Response builders for the API handler.
//!
//! Every response carries the same CORS header set so browser clients can call
//! the function cross-origin.

use serde_json::json;
use std::collections::BTreeMap;

use crate::core::models::ApiResponse;
use crate::errors::BotError;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_HEADERS: &str = "Content-Type,x-api-key";
pub const ALLOW_METHODS: &str = "POST,OPTIONS";

#[must_use]
pub fn cors_headers() -> BTreeMap<String, String> {
    BTreeMap::from([
        (
            "Access-Control-Allow-Origin".to_string(),
            ALLOW_ORIGIN.to_string(),
        ),
        (
            "Access-Control-Allow-Headers".to_string(),
            ALLOW_HEADERS.to_string(),
        ),
        (
            "Access-Control-Allow-Methods".to_string(),
            ALLOW_METHODS.to_string(),
        ),
    ])
}

/// Returns the 200 response for a CORS preflight: CORS headers, empty body.
#[must_use]
pub fn preflight() -> ApiResponse {
    ApiResponse {
        status_code: 200,
        headers: cors_headers(),
        body: String::new(),
    }
}

/// Returns a JSON response with the given status and `{"antwort": text}` body.
#[must_use]
pub fn answer_response(status_code: u16, text: &str) -> ApiResponse {
    let mut headers = cors_headers();
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    ApiResponse {
        status_code,
        headers,
        body: json!({ "antwort": text }).to_string(),
    }
}

/// Returns a 200 OK response carrying the model's answer.
#[must_use]
pub fn ok_answer(text: &str) -> ApiResponse {
    answer_response(200, text)
}

/// Returns the error response matching `error`'s status and user-facing text.
#[must_use]
pub fn err_response(error: &BotError) -> ApiResponse {
    answer_response(error.status_code(), &error.user_message())
}
