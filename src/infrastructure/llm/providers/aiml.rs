//! AI/ML API Provider - OpenAI-compatible chat completions

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::entities::ChatMessage;
use crate::infrastructure::llm::{LLMConfig, LLMError, LLMResponse, LLMResult, LLM};

/// Provider for any OpenAI-compatible `/chat/completions` endpoint
pub struct AimlProvider {
    api_key: Option<String>,
    client: Client,
    base_url: String,
    model: String,
}

impl AimlProvider {
    pub fn new(api_key: Option<String>, base_url: impl Into<String>, model: impl Into<String>, timeout: Duration) -> LLMResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LLMError::ConfigError(e.to_string()))?;

        Ok(Self {
            api_key,
            client,
            base_url: base_url.into(),
            model: model.into(),
        })
    }

    pub fn from_config(config: &LLMConfig) -> LLMResult<Self> {
        Self::new(
            config.api_key.clone(),
            config.base_url.clone(),
            config.model.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

/// API request structure
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

/// API response structure
#[derive(Deserialize, Debug)]
struct ChatResponse {
    #[serde(default)]
    model: Option<String>,
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Deserialize, Debug)]
struct Choice {
    message: ResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize, Debug)]
struct Usage {
    total_tokens: Option<u32>,
}

#[async_trait]
impl LLM for AimlProvider {
    fn name(&self) -> &str {
        "aiml"
    }

    async fn chat(
        &self,
        messages: Vec<ChatMessage>,
        temperature: Option<f32>,
        max_tokens: Option<u32>,
    ) -> LLMResult<LLMResponse> {
        let api_key = self.api_key.as_deref().ok_or(LLMError::MissingApiKey)?;

        let request = ChatRequest {
            model: &self.model,
            messages: &messages,
            temperature,
            max_tokens,
        };

        tracing::debug!("Sending {} messages to {} ({})", messages.len(), self.completions_url(), self.model);

        let response = self.client
            .post(self.completions_url())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| LLMError::NetworkError(e.to_string()))?;

        if response.status() == 429 {
            return Err(LLMError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LLMError::ApiError(format!("status: {}, body: {}", status, body)));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| LLMError::ParseError(e.to_string()))?;

        let choice = chat_response.choices
            .into_iter()
            .next()
            .ok_or_else(|| LLMError::InvalidRequest("No choices in response".to_string()))?;

        let content = choice.message.content
            .ok_or_else(|| LLMError::ParseError("Completion has no content".to_string()))?;

        Ok(LLMResponse {
            content,
            model: chat_response.model.unwrap_or_else(|| self.model.clone()),
            total_tokens: chat_response.usage.and_then(|u| u.total_tokens),
            finish_reason: choice.finish_reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completions_url_trims_slash() {
        let provider = AimlProvider::new(None, "https://example.test/v1/", "gpt-4o", Duration::from_secs(5)).unwrap();
        assert_eq!(provider.completions_url(), "https://example.test/v1/chat/completions");
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_network() {
        let provider = AimlProvider::new(None, "http://127.0.0.1:9", "gpt-4o", Duration::from_secs(1)).unwrap();
        let err = provider.chat(vec![ChatMessage::user("hi")], None, None).await.unwrap_err();
        assert!(matches!(err, LLMError::MissingApiKey));
    }

    #[test]
    fn test_request_shape() {
        let messages = vec![ChatMessage::system("s"), ChatMessage::user("u")];
        let request = ChatRequest {
            model: "gpt-4o",
            messages: &messages,
            temperature: Some(0.7),
            max_tokens: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["messages"][1]["role"], "user");
        assert!(json.get("max_tokens").is_none());
    }

    #[test]
    fn test_response_parsing() {
        let body = r#"{"id":"x","model":"gpt-4o-2024","choices":[{"index":0,"message":{"role":"assistant","content":"Hi!"},"finish_reason":"stop"}],"usage":{"prompt_tokens":3,"completion_tokens":2,"total_tokens":5}}"#;
        let parsed: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.choices[0].message.content.as_deref(), Some("Hi!"));
        assert_eq!(parsed.usage.unwrap().total_tokens, Some(5));
    }
}
