//! Knowledge document storage
//!
//! Loads the reference text the model answers from. The document is fetched
//! on every request; nothing is cached between invocations.

use async_trait::async_trait;
use aws_sdk_s3::Client as S3Client;
use aws_sdk_s3::error::DisplayErrorContext;
use tracing::info;

use crate::core::config::AppConfig;
use crate::errors::BotError;

/// Source of the knowledge document.
#[async_trait]
pub trait KnowledgeSource: Send + Sync {
    /// # Errors
    ///
    /// Returns [`BotError::KnowledgeUnavailable`] if the document cannot be
    /// read or is not valid UTF-8.
    async fn fetch(&self) -> Result<String, BotError>;
}

/// Reads the knowledge document from a fixed S3 bucket/key.
pub struct S3KnowledgeStore {
    client: S3Client,
    bucket: String,
    key: String,
}

impl S3KnowledgeStore {
    #[must_use]
    pub fn new(client: S3Client, bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// Builds an S3 client from the default AWS credential/region chain.
    pub async fn from_config(config: &AppConfig) -> Self {
        let shared = aws_config::from_env().load().await;
        Self::new(
            S3Client::new(&shared),
            config.knowledge_bucket.clone(),
            config.knowledge_key.clone(),
        )
    }

    #[must_use]
    pub fn location(&self) -> String {
        format!("s3://{}/{}", self.bucket, self.key)
    }
}

#[async_trait]
impl KnowledgeSource for S3KnowledgeStore {
    async fn fetch(&self) -> Result<String, BotError> {
        let object = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(&self.key)
            .send()
            .await
            .map_err(|e| {
                BotError::KnowledgeUnavailable(format!(
                    "s3 get_object {}: {}",
                    self.location(),
                    DisplayErrorContext(&e)
                ))
            })?;

        let bytes = object
            .body
            .collect()
            .await
            .map_err(|e| {
                BotError::KnowledgeUnavailable(format!("s3 read {}: {e}", self.location()))
            })?
            .into_bytes();

        let text = String::from_utf8(bytes.to_vec()).map_err(|e| {
            BotError::KnowledgeUnavailable(format!("{} is not valid UTF-8: {e}", self.location()))
        })?;

        info!(location = %self.location(), bytes = text.len(), "Loaded knowledge document");
        Ok(text)
    }
}
