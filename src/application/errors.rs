//! Application layer errors

use thiserror::Error;

/// Server lifecycle errors
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),

    #[error("HTTP client error: {0}")]
    Client(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Chat turn errors
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("{0}")]
    Completion(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Payment simulation errors
#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Wallet provider errors
#[derive(Error, Debug)]
pub enum WalletError {
    #[error("Wallet provider not configured")]
    NotConfigured,

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Session storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Invalid session id: {0:?}")]
    InvalidSessionId(String),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
