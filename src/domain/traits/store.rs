use async_trait::async_trait;
use crate::application::errors::StorageError;
use crate::domain::entities::ChatMessage;

/// Conversation store keyed by session id
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Messages of a session in insertion order, empty for unknown sessions
    async fn history(&self, session_id: &str) -> Result<Vec<ChatMessage>, StorageError>;

    /// Append messages to the end of a session, creating it if needed
    async fn append(&self, session_id: &str, messages: Vec<ChatMessage>) -> Result<(), StorageError>;

    /// Drop a session. Returns whether it existed.
    async fn clear(&self, session_id: &str) -> Result<bool, StorageError>;
}
