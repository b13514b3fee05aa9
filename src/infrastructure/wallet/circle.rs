//! Circle developer-controlled wallets adapter (read-only)

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::application::errors::WalletError;
use crate::domain::entities::{TokenBalance, WalletDirectory, WalletRecord};
use crate::domain::traits::WalletProvider;

/// Circle API endpoint
pub const API_BASE: &str = "https://api.circle.com";

/// Live wallet provider backed by the Circle W3S REST API
pub struct CircleWallets {
    api_key: String,
    client: Client,
    base_url: String,
}

impl CircleWallets {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>, timeout: Duration) -> Result<Self, WalletError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| WalletError::Network(e.to_string()))?;

        Ok(Self {
            api_key: api_key.into(),
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/v1/w3s{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T, WalletError> {
        let response = self.client
            .get(self.url(path))
            .bearer_auth(&self.api_key)
            .query(query)
            .send()
            .await
            .map_err(|e| WalletError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(WalletError::Api(format!("status: {}, body: {}", status, body)));
        }

        let envelope: Envelope<T> = response
            .json()
            .await
            .map_err(|e| WalletError::Parse(e.to_string()))?;
        Ok(envelope.data)
    }
}

/// Every Circle response wraps its payload in `data`
#[derive(Deserialize, Debug)]
struct Envelope<T> {
    data: T,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct WalletSetsData {
    #[serde(default)]
    wallet_sets: Vec<WalletSet>,
}

#[derive(Deserialize, Debug)]
struct WalletSet {
    id: String,
}

#[derive(Deserialize, Debug)]
struct WalletsData {
    #[serde(default)]
    wallets: Vec<WalletRecord>,
}

#[derive(Deserialize, Debug)]
struct WalletData {
    wallet: WalletRecord,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct BalancesData {
    #[serde(default)]
    token_balances: Vec<CircleTokenBalance>,
}

#[derive(Deserialize, Debug)]
struct CircleTokenBalance {
    token: CircleToken,
    amount: String,
}

#[derive(Deserialize, Debug)]
struct CircleToken {
    #[serde(default)]
    symbol: String,
}

impl From<CircleTokenBalance> for TokenBalance {
    fn from(b: CircleTokenBalance) -> Self {
        Self {
            symbol: b.token.symbol,
            amount: b.amount,
        }
    }
}

#[async_trait]
impl WalletProvider for CircleWallets {
    fn name(&self) -> &str {
        "circle"
    }

    fn is_live(&self) -> bool {
        true
    }

    async fn fetch_wallet_directory(&self) -> Result<Option<WalletDirectory>, WalletError> {
        let sets: WalletSetsData = self.get("/walletSets", &[]).await?;
        let Some(set) = sets.wallet_sets.first() else {
            tracing::warn!("Circle account has no wallet sets");
            return Ok(None);
        };
        tracing::info!("Found wallet set: {}", set.id);

        let wallets: WalletsData = self.get("/wallets", &[("walletSetId", set.id.as_str())]).await?;
        Ok(WalletDirectory::from_wallets(&wallets.wallets))
    }

    async fn get_balance(&self, wallet_id: &str) -> Result<Vec<TokenBalance>, WalletError> {
        let data: BalancesData = self.get(&format!("/wallets/{}/balances", wallet_id), &[]).await?;
        Ok(data.token_balances.into_iter().map(TokenBalance::from).collect())
    }

    async fn get_wallet_details(&self, wallet_id: &str) -> Result<WalletRecord, WalletError> {
        let data: WalletData = self.get(&format!("/wallets/{}", wallet_id), &[]).await?;
        Ok(data.wallet)
    }
}
