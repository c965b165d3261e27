//! API Lambda handler - answers one question per invocation.
//!
//! This module handles:
//! - CORS preflight short-circuit
//! - Question extraction (delegated to `parsing`)
//! - Knowledge lookup, prompt rendering and the completion call
//! - Turning every outcome into the JSON envelope (delegated to `helpers`)

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info};

use super::{helpers, parsing};
use crate::ai::{CompletionBackend, LlmClient, build_prompt};
use crate::clients::{KnowledgeSource, S3KnowledgeStore};
use crate::core::{config::AppConfig, models::ApiResponse};
use crate::errors::BotError;

/// Request handler with its collaborators injected.
#[derive(Clone)]
pub struct AskHandler {
    knowledge: Arc<dyn KnowledgeSource>,
    completion: Arc<dyn CompletionBackend>,
}

impl AskHandler {
    #[must_use]
    pub fn new(
        knowledge: Arc<dyn KnowledgeSource>,
        completion: Arc<dyn CompletionBackend>,
    ) -> Self {
        Self {
            knowledge,
            completion,
        }
    }

    /// Wires the S3 knowledge store and the `OpenAI` client from config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub async fn from_config(config: &AppConfig) -> Result<Self, BotError> {
        let knowledge = S3KnowledgeStore::from_config(config).await;
        info!(location = %knowledge.location(), "Knowledge store configured");
        let completion = LlmClient::from_config(config)?;
        Ok(Self::new(Arc::new(knowledge), Arc::new(completion)))
    }

    /// Handles one inbound event. Never fails: errors become 4xx/5xx envelopes.
    pub async fn handle(&self, payload: &Value) -> ApiResponse {
        if parsing::is_preflight(payload) {
            info!("Answering CORS preflight");
            return helpers::preflight();
        }

        match self.answer(payload).await {
            Ok(answer) => {
                info!(answer_chars = answer.chars().count(), "Question answered");
                helpers::ok_answer(&answer)
            }
            Err(e) => {
                error!(status = e.status_code(), "Request failed: {}", e);
                helpers::err_response(&e)
            }
        }
    }

    async fn answer(&self, payload: &Value) -> Result<String, BotError> {
        let question = parsing::extract_question(payload)?;
        info!(question_chars = question.chars().count(), "Extracted question");

        let knowledge = self.knowledge.fetch().await?;
        let prompt = build_prompt(&knowledge, &question);

        self.completion.complete(&prompt).await
    }
}

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Never returns an error in practice; every failure is reported in the
/// response envelope.
#[tracing::instrument(level = "info", skip(handler, event), fields(request_id = %event.context.request_id))]
pub async fn function_handler(
    handler: &AskHandler,
    event: LambdaEvent<Value>,
) -> Result<ApiResponse, Error> {
    #[cfg(feature = "debug-logs")]
    info!("API Lambda received event: {}", event.payload);

    #[cfg(not(feature = "debug-logs"))]
    info!(
        method = parsing::request_method(&event.payload).unwrap_or("-"),
        "API Lambda received request"
    );

    Ok(handler.handle(&event.payload).await)
}
