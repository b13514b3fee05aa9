use async_trait::async_trait;
use crate::application::errors::WalletError;
use crate::domain::entities::{TokenBalance, WalletDirectory, WalletRecord};

/// Wallet-custody capability. Picked once at startup and injected.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Provider name for logs
    fn name(&self) -> &str;

    /// Whether this provider talks to a real custody service
    fn is_live(&self) -> bool;

    /// Resolve the tenant and landlord wallets, `None` when none exist
    async fn fetch_wallet_directory(&self) -> Result<Option<WalletDirectory>, WalletError>;

    async fn get_balance(&self, wallet_id: &str) -> Result<Vec<TokenBalance>, WalletError>;

    async fn get_wallet_details(&self, wallet_id: &str) -> Result<WalletRecord, WalletError>;
}
