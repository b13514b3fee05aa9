use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::application::errors::ChatError;
use crate::application::messaging::{system_prompt, IntentDetector};
use crate::domain::entities::{ChatMessage, IntentResult, TenantProfile};
use crate::domain::traits::SessionStore;
use crate::infrastructure::llm::LLM;

/// What happens to the user's message when the completion fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// The user message stays in the session without a reply
    #[default]
    KeepUserMessage,
    /// Nothing is written unless the completion succeeds
    Discard,
}

/// Result of one chat turn
#[derive(Debug, Clone, PartialEq)]
pub struct ChatTurn {
    pub session_id: String,
    pub reply: String,
    pub intent: IntentResult,
}

/// Orchestrates a single request/response cycle with the language model
pub struct ChatService {
    llm: Arc<dyn LLM>,
    store: Arc<dyn SessionStore>,
    detector: IntentDetector,
    profile: TenantProfile,
    policy: FailurePolicy,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
}

impl ChatService {
    pub fn new(llm: Arc<dyn LLM>, store: Arc<dyn SessionStore>, profile: TenantProfile) -> Self {
        Self {
            llm,
            store,
            detector: IntentDetector::new(profile.monthly_rent),
            profile,
            policy: FailurePolicy::default(),
            temperature: Some(0.7),
            max_tokens: Some(500),
        }
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_sampling(mut self, temperature: f32, max_tokens: Option<u32>) -> Self {
        self.temperature = Some(temperature);
        self.max_tokens = max_tokens;
        self
    }

    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    /// Run one turn for `session_id`
    pub async fn handle_turn(&self, session_id: &str, user_text: &str) -> Result<ChatTurn, ChatError> {
        tracing::info!("[{}] User message: {}", session_id, user_text);

        let user_message = ChatMessage::user(user_text);
        let history = self.store.history(session_id).await?;

        if self.policy == FailurePolicy::KeepUserMessage {
            self.store.append(session_id, vec![user_message.clone()]).await?;
        }

        let today = chrono::Local::now().date_naive();
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(ChatMessage::system(system_prompt(&self.profile, today)));
        messages.extend(history);
        messages.push(user_message.clone());

        let response = match self.llm.chat(messages, self.temperature, self.max_tokens).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("[{}] Completion failed via {}: {}", session_id, self.llm.name(), e);
                return Err(ChatError::Completion(e.to_string()));
            }
        };

        tracing::info!("[{}] AI response: {}", session_id, response.content);
        if let Some(tokens) = response.total_tokens {
            tracing::debug!(
                "[{}] {} tokens used ({}, finish: {:?})",
                session_id,
                tokens,
                response.model,
                response.finish_reason
            );
        }

        let assistant = ChatMessage::assistant(response.content.clone());
        let commit = match self.policy {
            FailurePolicy::KeepUserMessage => vec![assistant],
            FailurePolicy::Discard => vec![user_message, assistant],
        };
        self.store.append(session_id, commit).await?;

        // Intent comes from what the tenant wrote, not from the reply
        let intent = self.detector.detect(user_text);
        if intent.detected {
            tracing::debug!("[{}] Payment intent: {:?}", session_id, intent.amount);
        }

        Ok(ChatTurn {
            session_id: session_id.to_string(),
            reply: response.content,
            intent,
        })
    }
}
