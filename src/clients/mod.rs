//! Client modules for external storage interactions

pub mod knowledge_store;

pub use knowledge_store::{KnowledgeSource, S3KnowledgeStore};
