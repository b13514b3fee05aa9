//! LLM Configuration

use serde::{Deserialize, Serialize};

use crate::application::errors::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://api.aimlapi.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// LLM Configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct LLMConfig {
    /// API key for the completion service
    pub api_key: Option<String>,

    /// OpenAI-compatible base URL, without the `/chat/completions` suffix
    pub base_url: String,

    pub model: String,

    /// Default settings
    pub temperature: f32,
    pub max_tokens: Option<u32>,
    pub timeout_secs: u64,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            max_tokens: Some(500),
            timeout_secs: 60,
        }
    }
}

impl LLMConfig {
    /// Overlay environment variables on top of `self`
    pub fn apply_env(mut self) -> Result<Self, ConfigError> {
        if let Ok(key) = std::env::var("AIML_API_KEY") {
            if !key.trim().is_empty() {
                self.api_key = Some(key);
            }
        }
        if let Ok(url) = std::env::var("AIML_BASE_URL") {
            self.base_url = url;
        }
        if let Ok(model) = std::env::var("AIML_MODEL") {
            self.model = model;
        }
        if let Ok(temp) = std::env::var("LLM_TEMPERATURE") {
            self.temperature = temp
                .parse()
                .map_err(|_| ConfigError::InvalidValue(format!("LLM_TEMPERATURE={}", temp)))?;
        }

        Ok(self)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}
