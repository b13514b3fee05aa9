use std::time::Duration;

use chrono::{SecondsFormat, Utc};

use crate::application::errors::PaymentError;
use crate::domain::entities::{format_amount, short_address, PaymentConfirmation, WalletDirectory};
use crate::infrastructure::simulated_ledger;
use crate::infrastructure::wallet::demo::{DEMO_BLOCKCHAIN, DEMO_LANDLORD_ADDRESS, DEMO_NETWORK, DEMO_TENANT_ADDRESS};

const LIVE_PROVIDER_LABEL: &str = "Circle Developer-Controlled Wallets (Architecture Implemented)";
const DEMO_PROVIDER_LABEL: &str = "Demo Mode - Circle Integration Ready";
const EXPLORER_BASE: &str = "https://sepolia.etherscan.io/address";

/// Produces simulated rent payment confirmations
pub struct PaymentService {
    directory: Option<WalletDirectory>,
    provider_live: bool,
    delay: Duration,
}

impl PaymentService {
    pub fn new(directory: Option<WalletDirectory>, provider_live: bool, delay: Duration) -> Self {
        Self {
            directory,
            provider_live,
            delay,
        }
    }

    /// Simulate a payment of `amount` USDC from `payer_name`.
    /// Resolves after the configured delay; nothing reaches a real chain.
    pub async fn simulate_payment(&self, amount: f64, payer_name: &str) -> Result<PaymentConfirmation, PaymentError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(PaymentError::InvalidAmount(amount.to_string()));
        }

        let display_amount = format_amount(amount);
        tracing::info!("Processing payment: ${} from {}", display_amount, payer_name);

        let (from_address, to_address, blockchain, provider_label) = match &self.directory {
            Some(dir) => {
                let to = non_empty_or(&dir.landlord.address, DEMO_LANDLORD_ADDRESS);
                let chain = non_empty_or(&dir.tenant.blockchain, DEMO_BLOCKCHAIN);
                tracing::info!("Using wallets: from {} ({}) to {} ({})", dir.tenant.address, dir.tenant.id, to, dir.landlord.id);
                (dir.tenant.address.clone(), to, chain, LIVE_PROVIDER_LABEL)
            }
            None => {
                tracing::info!("Demo mode - using simulated addresses");
                (
                    DEMO_TENANT_ADDRESS.to_string(),
                    DEMO_LANDLORD_ADDRESS.to_string(),
                    DEMO_BLOCKCHAIN.to_string(),
                    DEMO_PROVIDER_LABEL,
                )
            }
        };

        let transaction_hash = simulated_ledger::transaction_hash();
        tracing::info!("Amount: {} USDC, TX Hash: {}", display_amount, transaction_hash);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let note = if self.provider_live {
            "Circle wallets connected - Transaction simulated for demo"
        } else {
            "Demo mode"
        };

        Ok(PaymentConfirmation {
            success: true,
            message: format!("Payment of ${} USDC processed successfully!", display_amount),
            amount,
            transaction_id: simulated_ledger::transaction_id(),
            transaction_hash,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            blockchain,
            network: DEMO_NETWORK.to_string(),
            from_wallet: short_address(&from_address),
            to_wallet: short_address(&to_address),
            explorer_url: format!("{}/{}", EXPLORER_BASE, from_address),
            from_address,
            to_address,
            note: note.to_string(),
            wallet_provider: provider_label.to_string(),
            circle_integrated: self.provider_live,
        })
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}
