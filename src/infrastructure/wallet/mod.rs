//! Wallet providers - live Circle adapter and demo fallback

pub mod circle;
pub mod demo;

use std::sync::Arc;
use std::time::Duration;

pub use circle::CircleWallets;
pub use demo::DemoWallets;

use crate::domain::entities::WalletDirectory;
use crate::domain::traits::WalletProvider;
use crate::infrastructure::config::WalletConfig;

/// Pick the provider once: Circle when both credentials are present, demo otherwise
pub fn select_provider(config: &WalletConfig) -> Arc<dyn WalletProvider> {
    let Some(api_key) = config.api_key.as_deref().filter(|_| config.is_configured()) else {
        tracing::info!("Running in demo mode (Circle not configured)");
        return Arc::new(DemoWallets);
    };

    match CircleWallets::new(api_key, config.base_url.clone(), Duration::from_secs(config.timeout_secs)) {
        Ok(circle) => {
            tracing::info!("Circle client initialized");
            Arc::new(circle)
        }
        Err(e) => {
            tracing::warn!("Circle client unavailable ({}), running in demo mode", e);
            Arc::new(DemoWallets)
        }
    }
}

/// Resolve the wallet directory; failures degrade to `None`
pub async fn resolve_directory(provider: &dyn WalletProvider) -> Option<WalletDirectory> {
    if !provider.is_live() {
        return None;
    }

    tracing::info!("Fetching {} wallets...", provider.name());
    match provider.fetch_wallet_directory().await {
        Ok(Some(directory)) => {
            tracing::info!("Landlord wallet: {}", directory.landlord.id);
            tracing::info!("Tenant wallet: {}", directory.tenant.id);
            Some(directory)
        }
        Ok(None) => {
            tracing::warn!("No wallets found, payments will use demo addresses");
            None
        }
        Err(e) => {
            tracing::error!("Could not fetch wallets: {}", e);
            None
        }
    }
}
