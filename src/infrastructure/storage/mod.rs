//! In-memory session storage

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::application::errors::StorageError;
use crate::domain::entities::ChatMessage;
use crate::domain::traits::SessionStore;

/// Per-session conversation logs, each capped at `history_limit` messages.
/// Oldest messages are evicted first; order is never changed otherwise.
pub struct MemorySessionStore {
    sessions: Arc<RwLock<HashMap<String, VecDeque<ChatMessage>>>>,
    history_limit: usize,
}

impl MemorySessionStore {
    pub fn new(history_limit: usize) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            history_limit: history_limit.max(1),
        }
    }

    pub fn history_limit(&self) -> usize {
        self.history_limit
    }

    fn check_id(session_id: &str) -> Result<(), StorageError> {
        if session_id.trim().is_empty() {
            return Err(StorageError::InvalidSessionId(session_id.to_string()));
        }
        Ok(())
    }

    #[cfg(test)]
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn history(&self, session_id: &str) -> Result<Vec<ChatMessage>, StorageError> {
        Self::check_id(session_id)?;
        let sessions = self.sessions.read().await;
        Ok(sessions
            .get(session_id)
            .map(|log| log.iter().cloned().collect())
            .unwrap_or_default())
    }

    async fn append(&self, session_id: &str, messages: Vec<ChatMessage>) -> Result<(), StorageError> {
        Self::check_id(session_id)?;
        let mut sessions = self.sessions.write().await;
        let log = sessions.entry(session_id.to_string()).or_default();

        log.extend(messages);
        while log.len() > self.history_limit {
            log.pop_front();
        }
        Ok(())
    }

    async fn clear(&self, session_id: &str) -> Result<bool, StorageError> {
        Self::check_id(session_id)?;
        let mut sessions = self.sessions.write().await;
        Ok(sessions.remove(session_id).is_some())
    }
}
