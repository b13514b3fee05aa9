//! Domain entities - Core business objects with no external dependencies

pub mod intent;
pub mod message;
pub mod payment;
pub mod tenant;
pub mod wallet;

pub use intent::{format_amount, IntentResult};
pub use message::ChatMessage;
#[cfg(test)]
pub use message::Role;
pub use payment::{short_address, PaymentConfirmation};
pub use tenant::TenantProfile;
pub use wallet::{balance_of, TokenBalance, WalletDirectory, WalletInfo, WalletMode, WalletParty, WalletRecord};
