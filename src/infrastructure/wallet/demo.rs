//! Demo wallet provider used when no custody credentials are configured

use async_trait::async_trait;

use crate::application::errors::WalletError;
use crate::domain::entities::{TokenBalance, WalletDirectory, WalletRecord};
use crate::domain::traits::WalletProvider;

pub const DEMO_TENANT_ADDRESS: &str = "0xf651bd6d7346195c556e20c9b4e419d5ba06496d";
pub const DEMO_LANDLORD_ADDRESS: &str = "0x9636796c5a674c8307efd7a4bada03b949c23398";
pub const DEMO_BLOCKCHAIN: &str = "ETH-SEPOLIA";
pub const DEMO_NETWORK: &str = "testnet";

/// Stub provider: never live, never resolves wallets
#[derive(Debug, Default, Clone, Copy)]
pub struct DemoWallets;

#[async_trait]
impl WalletProvider for DemoWallets {
    fn name(&self) -> &str {
        "demo"
    }

    fn is_live(&self) -> bool {
        false
    }

    async fn fetch_wallet_directory(&self) -> Result<Option<WalletDirectory>, WalletError> {
        Ok(None)
    }

    async fn get_balance(&self, _wallet_id: &str) -> Result<Vec<TokenBalance>, WalletError> {
        Err(WalletError::NotConfigured)
    }

    async fn get_wallet_details(&self, _wallet_id: &str) -> Result<WalletRecord, WalletError> {
        Err(WalletError::NotConfigured)
    }
}
