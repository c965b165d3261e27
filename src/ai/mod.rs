//! All AI/LLM functionality

pub mod client;
pub mod prompt_builder;
pub mod response;

// Re-export main types for convenience
pub use client::{CompletionBackend, LlmClient};
pub use prompt_builder::{PromptText, build_prompt};
pub use response::{CompletionResponse, NO_ANSWER_PLACEHOLDER};
