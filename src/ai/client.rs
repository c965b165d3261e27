//! LLM (`OpenAI`) API client module
//!
//! Sends the rendered prompt to the completion endpoint and unwraps the answer.

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use serde_json::{Value, json};
use tracing::info;

use super::prompt_builder::{PromptText, SYSTEM_MESSAGE};
use super::response::CompletionResponse;
use crate::core::config::{ApiVariant, AppConfig};
use crate::errors::BotError;

const TEMPERATURE: f64 = 0.7;
const MAX_OUTPUT_TOKENS: u32 = 1000;

/// Anything that can turn a prompt into answer text.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// # Errors
    ///
    /// Returns [`BotError::CompletionFailed`] when no answer could be obtained.
    async fn complete(&self, prompt: &PromptText) -> Result<String, BotError>;
}

/// LLM API client for answering questions
pub struct LlmClient {
    http: Client,
    api_key: Option<String>,
    org_id: Option<String>,
    model_name: String,
    base_url: String,
    variant: ApiVariant,
}

impl LlmClient {
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, BotError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.openai_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| {
            BotError::Internal(format!("Failed to build OpenAI HTTP client: {e}"))
        })?;

        Ok(Self {
            http,
            api_key: config.openai_api_key.clone(),
            org_id: config.openai_org_id.clone(),
            model_name: config.openai_model.clone(),
            base_url: config.openai_base_url.trim_end_matches('/').to_string(),
            variant: config.api_variant,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> String {
        match self.variant {
            ApiVariant::Chat => format!("{}/chat/completions", self.base_url),
            ApiVariant::Responses => format!("{}/responses", self.base_url),
        }
    }

    pub fn build_messages(&self, prompt: &PromptText) -> Vec<ChatCompletionMessage> {
        vec![
            ChatCompletionMessage {
                role: MessageRole::system,
                content: Content::Text(SYSTEM_MESSAGE.to_string()),
                name: None,
                tool_calls: None,
                tool_call_id: None,
            },
            ChatCompletionMessage {
                role: MessageRole::user,
                content: Content::Text(prompt.as_str().to_string()),
                name: None,
                tool_calls: None,
                tool_call_id: None,
            },
        ]
    }

    /// JSON body for the configured endpoint.
    #[must_use]
    pub fn build_request_body(&self, prompt: &PromptText) -> Value {
        match self.variant {
            ApiVariant::Chat => json!({
                "model": self.model_name,
                "messages": chat_messages_to_json(&self.build_messages(prompt)),
                "temperature": TEMPERATURE,
                "max_tokens": MAX_OUTPUT_TOKENS
            }),
            ApiVariant::Responses => json!({
                "model": self.model_name,
                "input": prompt.as_str(),
                "max_output_tokens": MAX_OUTPUT_TOKENS
            }),
        }
    }

    /// Posts the prompt and returns the parsed response.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::CompletionFailed`] if the API key is missing, the
    /// request fails, the status is not 2xx, or the body is not JSON.
    pub async fn request_completion(
        &self,
        prompt: &PromptText,
    ) -> Result<CompletionResponse, BotError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(BotError::CompletionFailed(
                "OPENAI_API_KEY is not set".to_string(),
            ));
        };

        #[cfg(feature = "debug-logs")]
        info!("Using prompt:\n{}", prompt);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            prompt_chars = prompt.as_str().chars().count(),
            model = %self.model_name,
            "Requesting completion"
        );

        let mut headers = reqwest::header::HeaderMap::new();
        let auth_value = format!("Bearer {api_key}").parse().map_err(|e| {
            BotError::CompletionFailed(format!("Invalid Authorization header: {e}"))
        })?;
        headers.insert("Authorization", auth_value);

        if let Some(org) = &self.org_id {
            let org_value = org.parse().map_err(|e| {
                BotError::CompletionFailed(format!("Invalid OpenAI-Organization header: {e}"))
            })?;
            headers.insert("OpenAI-Organization", org_value);
        }

        let response = self
            .http
            .post(self.endpoint())
            .headers(headers)
            .json(&self.build_request_body(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(BotError::CompletionFailed(format!(
                "OpenAI API error (status {status}): {error_text}"
            )));
        }

        let bytes = response.bytes().await?;
        let raw: Value = serde_json::from_slice(&bytes)?;

        #[cfg(feature = "debug-logs")]
        info!("OpenAI raw response: {}", raw);

        info!(%status, "Completion received");
        Ok(CompletionResponse::from_value(raw))
    }
}

#[async_trait]
impl CompletionBackend for LlmClient {
    async fn complete(&self, prompt: &PromptText) -> Result<String, BotError> {
        let response = self.request_completion(prompt).await?;
        Ok(response.answer_or_placeholder())
    }
}

/// Serializes chat messages into the `{role, content}` objects the chat
/// endpoint expects.
pub(crate) fn chat_messages_to_json(messages: &[ChatCompletionMessage]) -> Vec<Value> {
    messages
        .iter()
        .filter_map(|m| {
            let role_str = match m.role {
                MessageRole::system => "system",
                MessageRole::user | MessageRole::function | MessageRole::tool => "user",
                MessageRole::assistant => "assistant",
            };
            match &m.content {
                Content::Text(t) => Some(json!({ "role": role_str, "content": t })),
                Content::ImageUrl(_) => None,
            }
        })
        .collect()
}
