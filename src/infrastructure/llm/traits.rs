//! Completion capability used by the chat service

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::ChatMessage;

/// One assistant reply
#[derive(Debug, Clone, PartialEq)]
pub struct LLMResponse {
    pub content: String,
    /// Model that actually answered, as reported upstream
    pub model: String,
    pub total_tokens: Option<u32>,
    pub finish_reason: Option<String>,
}

#[derive(Error, Debug)]
pub enum LLMError {
    #[error("Missing API key")]
    MissingApiKey,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Config error: {0}")]
    ConfigError(String),
}

pub type LLMResult<T> = Result<T, LLMError>;

/// Chat completion against the provider's configured model
#[async_trait]
pub trait LLM: Send + Sync {
    fn name(&self) -> &str;

    async fn chat(
        &self,
        messages: Vec<ChatMessage>,
        temperature: Option<f32>,
        max_tokens: Option<u32>,
    ) -> LLMResult<LLMResponse>;
}
