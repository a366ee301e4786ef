use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

use super::models::{ContractSource, Page, TokenHolding, TokenInfo, TokenTransfer, Transaction};
use super::stats::{
    normalize, Span, StatItem, StatsEndpoint, StatsQuery, StatsQueryWindow, TopEndpoint, TopEntry,
};
use crate::format::{Clock, RawValue};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Scan API error: {0}")]
    Status(StatusCode),
    #[error("Scan API returned status {status}: {message}")]
    Upstream { status: String, message: String },
    #[error("Unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Invalid address: {0}")]
    InvalidAddress(String),
}

/// `{ status, message, result }` envelope every endpoint answers with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T = Value> {
    #[serde(default)]
    pub status: Value,
    #[serde(default)]
    pub message: String,
    #[serde(default = "Option::default")]
    pub result: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn is_ok(&self) -> bool {
        match &self.status {
            Value::String(s) => s == "1",
            Value::Number(n) => n.as_i64() == Some(1),
            _ => false,
        }
    }

    pub fn into_result(self) -> Result<T, ApiError> {
        let status = match &self.status {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        if !self.is_ok() {
            return Err(ApiError::Upstream {
                status,
                message: self.message,
            });
        }
        self.result.ok_or_else(|| ApiError::Upstream {
            status,
            message: "response has no result".to_string(),
        })
    }
}

pub struct ScanClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl ScanClient {
    pub fn new(base_url: &str, api_key: Option<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.is_empty()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Raw GET of `endpoint` with `params`; the envelope is decoded but its
    /// status is not interpreted.
    pub async fn fetch_api(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<ApiResponse, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!(endpoint, ?params, "scan api request");

        let mut query: Vec<(&str, String)> = params.to_vec();
        if let Some(key) = &self.api_key {
            query.push(("apikey", key.clone()));
        }

        let response = self
            .client
            .get(&url)
            .query(&query)
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::warn!(endpoint, status = %response.status(), "scan api http error");
            return Err(ApiError::Status(response.status()));
        }

        Ok(response.json().await?)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let envelope = self.fetch_api(endpoint, params).await?;
        let result = envelope.into_result().inspect_err(|err| {
            tracing::warn!(endpoint, error = %err, "scan api rejected request");
        })?;
        Ok(serde_json::from_value(result)?)
    }

    /// Native balance in drip.
    pub async fn balance(&self, address: &str) -> Result<RawValue, ApiError> {
        self.fetch("/account/balance", &[("address", address.to_string())])
            .await
    }

    pub async fn token_holdings(&self, address: &str) -> Result<Page<TokenHolding>, ApiError> {
        self.fetch("/account/tokens", &[("account", address.to_string())])
            .await
    }

    pub async fn transactions(
        &self,
        address: &str,
        limit: u64,
    ) -> Result<Page<Transaction>, ApiError> {
        self.fetch(
            "/account/transactions",
            &[
                ("account", address.to_string()),
                ("skip", "0".to_string()),
                ("limit", limit.to_string()),
                ("sort", "DESC".to_string()),
            ],
        )
        .await
    }

    pub async fn token_transfers(
        &self,
        address: &str,
        limit: u64,
    ) -> Result<Page<TokenTransfer>, ApiError> {
        self.fetch(
            "/account/transfers",
            &[
                ("account", address.to_string()),
                ("transferType", "ERC20".to_string()),
                ("skip", "0".to_string()),
                ("limit", limit.to_string()),
                ("sort", "DESC".to_string()),
            ],
        )
        .await
    }

    pub async fn contract_source(&self, address: &str) -> Result<ContractSource, ApiError> {
        let sources: Vec<ContractSource> = self
            .fetch("/contract/getsourcecode", &[("address", address.to_string())])
            .await?;
        Ok(sources.into_iter().next().unwrap_or_default())
    }

    pub async fn token_info(&self, contract: &str) -> Result<TokenInfo, ApiError> {
        let infos: Vec<TokenInfo> = self
            .fetch("/token/tokeninfos", &[("contracts", contract.to_string())])
            .await?;
        infos.into_iter().next().ok_or_else(|| ApiError::Upstream {
            status: "1".to_string(),
            message: format!("no token info for {}", contract),
        })
    }

    pub async fn stats(
        &self,
        endpoint: StatsEndpoint,
        query: StatsQuery,
        clock: &impl Clock,
    ) -> Result<Page<StatItem>, ApiError> {
        self.stats_window(endpoint, &normalize(query, clock)).await
    }

    pub async fn stats_window(
        &self,
        endpoint: StatsEndpoint,
        window: &StatsQueryWindow,
    ) -> Result<Page<StatItem>, ApiError> {
        self.fetch(endpoint.path(), &window.to_query_pairs()).await
    }

    pub async fn top(
        &self,
        endpoint: TopEndpoint,
        span: Span,
        limit: u64,
    ) -> Result<Page<TopEntry>, ApiError> {
        self.fetch(
            endpoint.path(),
            &[
                ("span", span.as_str().to_string()),
                ("limit", limit.to_string()),
            ],
        )
        .await
    }
}
