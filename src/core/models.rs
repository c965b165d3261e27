use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Envelope returned to API Gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

/// JSON body of every non-preflight response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerBody {
    pub antwort: String,
}

impl ApiResponse {
    /// Decodes the `antwort` field from the body, if the body carries one.
    #[must_use]
    pub fn answer(&self) -> Option<String> {
        serde_json::from_str::<AnswerBody>(&self.body)
            .ok()
            .map(|b| b.antwort)
    }

    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}
