//! Infrastructure layer - External concerns
//!
//! This layer contains:
//! - Config: Configuration loading
//! - Storage: In-memory session storage
//! - LLM: Chat completion providers
//! - Wallet: Custody providers (Circle, demo)
//! - Simulated ledger: fabricated transaction artifacts
//! - HTTP: Router and server lifecycle

pub mod config;
pub mod http;
pub mod llm;
pub mod simulated_ledger;
pub mod storage;
pub mod wallet;
