use serde::Serialize;

use super::intent::serialize_amount;

/// Fabricated confirmation returned by the payment simulator. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentConfirmation {
    pub success: bool,
    pub message: String,
    #[serde(serialize_with = "serialize_amount")]
    pub amount: f64,
    pub transaction_id: String,
    pub transaction_hash: String,
    pub timestamp: String,
    pub blockchain: String,
    pub network: String,
    pub from_address: String,
    pub to_address: String,
    pub from_wallet: String,
    pub to_wallet: String,
    pub explorer_url: String,
    pub note: String,
    pub wallet_provider: String,
    pub circle_integrated: bool,
}

/// `0x12345678...abcd` style abbreviation
pub fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 14 {
        return address.to_string();
    }
    let head: String = chars[..10].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}
