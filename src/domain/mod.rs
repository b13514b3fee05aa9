//! Domain layer - Core business logic with no external dependencies
//!
//! This layer contains:
//! - Entities: Core business objects (ChatMessage, IntentResult, PaymentConfirmation, wallets)
//! - Traits: Abstractions for infrastructure (SessionStore, WalletProvider)

pub mod entities;
pub mod traits;
