//! Typed view over the completion API's response shapes.
//!
//! The chat-completions endpoint and the responses endpoint return different
//! JSON. [`CompletionResponse::from_value`] resolves which one it got, using the
//! `object` discriminator when present and the shape's marker fields otherwise.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Answer used when no shape yields any text.
pub const NO_ANSWER_PLACEHOLDER: &str = "Keine Antwort erhalten.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionResponse {
    Chat(ChatCompletion),
    Responses(ResponsesOutput),
    Unrecognized,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ChatCompletion {
    #[serde(default, deserialize_with = "lenient_list")]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ChatChoice {
    #[serde(default, deserialize_with = "lenient")]
    pub message: Option<ChatMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ChatMessage {
    #[serde(default, deserialize_with = "lenient")]
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ResponsesOutput {
    #[serde(default, deserialize_with = "lenient")]
    pub output_text: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub output: Vec<OutputItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct OutputItem {
    #[serde(default, deserialize_with = "lenient_blocks")]
    pub content: Option<Vec<ContentBlock>>,
}

/// A content block inside an output item, tagged by its `type` field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(tag = "type")]
pub enum ContentBlock {
    #[serde(rename = "output_text")]
    OutputText { text: String },
    #[default]
    #[serde(other)]
    Other,
}

// Each field and list element decodes on its own: a malformed value becomes
// `None`/default and never fails the surrounding response.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|v| serde_json::from_value(v).ok()))
}

// Null or a non-list yields an empty list; elements keep their index.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => Ok(decode_each(items)),
        _ => Ok(Vec::new()),
    }
}

// A `content` that is not a list counts as absent, so the item is skipped.
fn lenient_blocks<'de, D>(deserializer: D) -> Result<Option<Vec<ContentBlock>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(blocks)) => Ok(Some(decode_each(blocks))),
        _ => Ok(None),
    }
}

fn decode_each<T: DeserializeOwned + Default>(items: Vec<Value>) -> Vec<T> {
    items
        .into_iter()
        .map(|v| serde_json::from_value(v).unwrap_or_default())
        .collect()
}

impl CompletionResponse {
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        let discriminator = value.get("object").and_then(Value::as_str);
        let is_chat = match discriminator {
            Some("chat.completion") => true,
            Some("response") => false,
            _ if value.get("choices").is_some() => true,
            _ if value.get("output_text").is_some() || value.get("output").is_some() => false,
            _ => return CompletionResponse::Unrecognized,
        };

        if is_chat {
            serde_json::from_value(value)
                .map(CompletionResponse::Chat)
                .unwrap_or(CompletionResponse::Unrecognized)
        } else {
            serde_json::from_value(value)
                .map(CompletionResponse::Responses)
                .unwrap_or(CompletionResponse::Unrecognized)
        }
    }

    /// Answer text carried by the response, if any.
    #[must_use]
    pub fn answer(&self) -> Option<&str> {
        match self {
            CompletionResponse::Chat(chat) => chat
                .choices
                .first()
                .and_then(|c| c.message.as_ref())
                .and_then(|m| m.content.as_deref()),
            CompletionResponse::Responses(resp) => resp.output_text.as_deref().or_else(|| {
                resp.output
                    .iter()
                    .find_map(|item| item.content.as_ref())
                    .and_then(|blocks| {
                        blocks.iter().find_map(|b| match b {
                            ContentBlock::OutputText { text } => Some(text.as_str()),
                            ContentBlock::Other => None,
                        })
                    })
            }),
            CompletionResponse::Unrecognized => None,
        }
    }

    /// Answer text, or [`NO_ANSWER_PLACEHOLDER`] when the response has none.
    #[must_use]
    pub fn answer_or_placeholder(&self) -> String {
        self.answer().unwrap_or(NO_ANSWER_PLACEHOLDER).to_string()
    }
}
