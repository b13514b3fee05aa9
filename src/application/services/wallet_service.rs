use std::sync::Arc;

use crate::application::errors::WalletError;
use crate::domain::entities::{balance_of, WalletDirectory, WalletInfo, WalletMode, WalletParty};
use crate::domain::traits::WalletProvider;
use crate::infrastructure::wallet::demo::{DEMO_BLOCKCHAIN, DEMO_LANDLORD_ADDRESS, DEMO_TENANT_ADDRESS};

const STABLECOIN: &str = "USDC";

/// Reports wallet addresses and balances, live or demo
pub struct WalletService {
    provider: Arc<dyn WalletProvider>,
    directory: Option<WalletDirectory>,
}

impl WalletService {
    pub fn new(provider: Arc<dyn WalletProvider>, directory: Option<WalletDirectory>) -> Self {
        Self { provider, directory }
    }

    pub async fn get_wallet_info(&self) -> Result<WalletInfo, WalletError> {
        let directory = match &self.directory {
            Some(dir) if self.provider.is_live() => dir,
            _ => return Ok(demo_info()),
        };

        let tenant_balances = self.provider.get_balance(&directory.tenant.id).await?;
        let landlord_balances = self.provider.get_balance(&directory.landlord.id).await?;
        let landlord_details = self.provider.get_wallet_details(&directory.landlord.id).await?;

        let landlord_address = if landlord_details.address.is_empty() {
            directory.landlord.address.clone()
        } else {
            landlord_details.address
        };

        Ok(WalletInfo {
            success: true,
            mode: WalletMode::Live,
            message: format!("Connected to {} wallets", provider_title(self.provider.name())),
            tenant: WalletParty {
                id: Some(directory.tenant.id.clone()),
                address: directory.tenant.address.clone(),
                blockchain: directory.tenant.blockchain.clone(),
                usdc_balance: Some(balance_of(&tenant_balances, STABLECOIN)),
                eth_balance: None,
                state: Some(directory.tenant.state.clone()),
            },
            landlord: WalletParty {
                id: Some(directory.landlord.id.clone()),
                address: landlord_address,
                blockchain: directory.landlord.blockchain.clone(),
                usdc_balance: Some(balance_of(&landlord_balances, STABLECOIN)),
                eth_balance: None,
                state: Some(directory.landlord.state.clone()),
            },
        })
    }
}

fn demo_info() -> WalletInfo {
    WalletInfo {
        success: true,
        mode: WalletMode::Demo,
        message: "Running in demo mode".to_string(),
        tenant: WalletParty {
            id: None,
            address: DEMO_TENANT_ADDRESS.to_string(),
            blockchain: DEMO_BLOCKCHAIN.to_string(),
            usdc_balance: Some("Demo Mode".to_string()),
            eth_balance: Some("Demo Mode".to_string()),
            state: None,
        },
        landlord: WalletParty {
            id: None,
            address: DEMO_LANDLORD_ADDRESS.to_string(),
            blockchain: DEMO_BLOCKCHAIN.to_string(),
            usdc_balance: None,
            eth_balance: None,
            state: None,
        },
    }
}

// "circle" -> "Circle"
fn provider_title(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
