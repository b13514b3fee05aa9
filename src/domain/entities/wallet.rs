use serde::{Deserialize, Serialize};

/// Wallet as reported by the custody provider
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WalletRecord {
    pub id: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub blockchain: String,
    #[serde(default)]
    pub state: String,
}

/// Token holding of a single wallet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBalance {
    pub symbol: String,
    pub amount: String,
}

/// Find the balance for `symbol`, defaulting to "0"
pub fn balance_of(balances: &[TokenBalance], symbol: &str) -> String {
    balances
        .iter()
        .find(|b| b.symbol == symbol)
        .map(|b| b.amount.clone())
        .unwrap_or_else(|| "0".to_string())
}

/// Payer and payee wallets, resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletDirectory {
    pub tenant: WalletRecord,
    pub landlord: WalletRecord,
}

impl WalletDirectory {
    /// First wallet is the landlord's; the second (or the first again) pays
    pub fn from_wallets(wallets: &[WalletRecord]) -> Option<Self> {
        let landlord = wallets.first()?.clone();
        let tenant = wallets.get(1).cloned().unwrap_or_else(|| landlord.clone());
        Some(Self { tenant, landlord })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletMode {
    Demo,
    Live,
}

/// Party entry in a wallet info report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletParty {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub address: String,
    pub blockchain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usdc_balance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eth_balance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Response of the wallet info report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalletInfo {
    pub success: bool,
    pub mode: WalletMode,
    pub message: String,
    pub tenant: WalletParty,
    pub landlord: WalletParty,
}
