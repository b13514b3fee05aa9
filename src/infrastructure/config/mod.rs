//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

use crate::application::errors::ConfigError;
use crate::application::services::FailurePolicy;
use crate::domain::entities::TenantProfile;
use crate::infrastructure::llm::LLMConfig;
use crate::infrastructure::wallet::circle;

/// Service configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LLMConfig,
    pub wallet: WalletConfig,
    pub tenant: TenantProfile,
    pub session: SessionConfig,
    pub payment: PaymentConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory served for every non-API path
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            static_dir: PathBuf::from("."),
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Wallet-custody credentials. Both secrets must be present for live mode.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct WalletConfig {
    pub api_key: Option<String>,
    pub entity_secret: Option<String>,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            entity_secret: None,
            base_url: circle::API_BASE.to_string(),
            timeout_secs: 30,
        }
    }
}

impl WalletConfig {
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some() && self.entity_secret.is_some()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SessionConfig {
    /// Maximum messages kept per session
    pub history_limit: usize,
    /// Session used when a chat request carries no id
    pub default_session_id: String,
    pub on_failure: FailurePolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            history_limit: 40,
            default_session_id: "default".to_string(),
            on_failure: FailurePolicy::KeepUserMessage,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PaymentConfig {
    /// Artificial settlement latency
    pub delay_ms: u64,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self { delay_ms: 1500 }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))
    }

    /// Defaults overlaid with environment variables
    pub fn load_env() -> Result<Self, ConfigError> {
        Config::default().apply_env()
    }

    /// Overlay environment variables on top of `self`
    pub fn apply_env(mut self) -> Result<Self, ConfigError> {
        if let Some(port) = env_parse::<u16>("PORT")? {
            self.server.port = port;
        }
        if let Ok(host) = std::env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(dir) = std::env::var("STATIC_DIR") {
            self.server.static_dir = PathBuf::from(dir);
        }

        self.llm = self.llm.apply_env()?;

        if let Some(key) = env_non_empty("CIRCLE_API_KEY") {
            self.wallet.api_key = Some(key);
        }
        if let Some(secret) = env_non_empty("CIRCLE_ENTITY_SECRET") {
            self.wallet.entity_secret = Some(secret);
        }
        if let Ok(url) = std::env::var("CIRCLE_BASE_URL") {
            self.wallet.base_url = url;
        }

        if let Some(delay) = env_parse::<u64>("PAYMENT_DELAY_MS")? {
            self.payment.delay_ms = delay;
        }
        if let Some(limit) = env_parse::<usize>("SESSION_HISTORY_LIMIT")? {
            self.session.history_limit = limit;
        }

        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session.history_limit == 0 {
            return Err(ConfigError::InvalidValue("session.history-limit must be at least 1".to_string()));
        }
        if self.session.default_session_id.trim().is_empty() {
            return Err(ConfigError::MissingField("session.default-session-id".to_string()));
        }
        if !(self.tenant.monthly_rent.is_finite() && self.tenant.monthly_rent > 0.0) {
            return Err(ConfigError::InvalidValue("tenant.monthly-rent must be positive".to_string()));
        }
        Ok(())
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_parse<T: FromStr>(key: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue(format!("{}={}", key, raw))),
        Err(_) => Ok(None),
    }
}
