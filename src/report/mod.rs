//! Wrapper layer: fetches through [`ScanClient`] and pairs each raw result
//! with its human-readable rendering.

pub mod render;

use serde::Serialize;

use crate::api::{
    is_valid_address, normalize, ApiError, ContractSource, Page, ScanClient, Span, StatItem,
    StatsEndpoint, StatsQuery, StatsQueryWindow, TokenHolding, TokenInfo, TokenTransfer,
    TopEndpoint, TopEntry, Transaction,
};
use crate::format::{Clock, RawValue, ResponseFormatter, SystemClock};

pub use render::*;

/// Raw API data together with its rendered text.
#[derive(Debug, Clone, Serialize)]
pub struct Formatted<T> {
    pub raw: T,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AccountOverview {
    pub address: String,
    pub balance: RawValue,
    pub tokens: Page<TokenHolding>,
    pub transactions: Page<Transaction>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsSeries {
    pub window: StatsQueryWindow,
    pub page: Page<StatItem>,
}

pub fn render_overview(fmt: &ResponseFormatter, overview: &AccountOverview) -> String {
    [
        render_balance(fmt, &overview.address, &overview.balance),
        render_token_holdings(fmt, &overview.address, &overview.tokens),
        render_transactions(fmt, &overview.address, &overview.transactions),
    ]
    .join("\n\n")
}

pub struct ScanWrapper<C = SystemClock> {
    client: ScanClient,
    formatter: ResponseFormatter,
    clock: C,
}

impl ScanWrapper {
    pub fn new(client: ScanClient) -> Self {
        Self::with_clock(client, SystemClock)
    }
}

impl<C: Clock> ScanWrapper<C> {
    pub fn with_clock(client: ScanClient, clock: C) -> Self {
        Self {
            client,
            formatter: ResponseFormatter,
            clock,
        }
    }

    pub fn client(&self) -> &ScanClient {
        &self.client
    }

    fn check_address(address: &str) -> Result<(), ApiError> {
        if is_valid_address(address) {
            Ok(())
        } else {
            Err(ApiError::InvalidAddress(address.to_string()))
        }
    }

    pub async fn balance(&self, address: &str) -> Result<Formatted<RawValue>, ApiError> {
        Self::check_address(address)?;
        let raw = self.client.balance(address).await?;
        let text = render_balance(&self.formatter, address, &raw);
        Ok(Formatted { raw, text })
    }

    pub async fn token_holdings(
        &self,
        address: &str,
    ) -> Result<Formatted<Page<TokenHolding>>, ApiError> {
        Self::check_address(address)?;
        let raw = self.client.token_holdings(address).await?;
        let text = render_token_holdings(&self.formatter, address, &raw);
        Ok(Formatted { raw, text })
    }

    pub async fn transactions(
        &self,
        address: &str,
        limit: u64,
    ) -> Result<Formatted<Page<Transaction>>, ApiError> {
        Self::check_address(address)?;
        let raw = self.client.transactions(address, limit).await?;
        let text = render_transactions(&self.formatter, address, &raw);
        Ok(Formatted { raw, text })
    }

    pub async fn token_transfers(
        &self,
        address: &str,
        limit: u64,
    ) -> Result<Formatted<Page<TokenTransfer>>, ApiError> {
        Self::check_address(address)?;
        let raw = self.client.token_transfers(address, limit).await?;
        let text = render_token_transfers(&self.formatter, address, &raw);
        Ok(Formatted { raw, text })
    }

    pub async fn contract(&self, address: &str) -> Result<Formatted<ContractSource>, ApiError> {
        Self::check_address(address)?;
        let raw = self.client.contract_source(address).await?;
        let text = render_contract(address, &raw);
        Ok(Formatted { raw, text })
    }

    pub async fn token_info(&self, contract: &str) -> Result<Formatted<TokenInfo>, ApiError> {
        Self::check_address(contract)?;
        let raw = self.client.token_info(contract).await?;
        let text = render_token_info(&self.formatter, &raw);
        Ok(Formatted { raw, text })
    }

    pub async fn stats(
        &self,
        endpoint: StatsEndpoint,
        query: StatsQuery,
    ) -> Result<Formatted<StatsSeries>, ApiError> {
        let window = normalize(query, &self.clock);
        let page = self.client.stats_window(endpoint, &window).await?;
        let text = render_stats(&self.formatter, endpoint, &window, &page);
        Ok(Formatted {
            raw: StatsSeries { window, page },
            text,
        })
    }

    pub async fn top(
        &self,
        endpoint: TopEndpoint,
        span: Span,
        limit: u64,
    ) -> Result<Formatted<Page<TopEntry>>, ApiError> {
        let raw = self.client.top(endpoint, span, limit).await?;
        let text = render_top(&self.formatter, endpoint, span, &raw);
        Ok(Formatted { raw, text })
    }

    /// Balance, token holdings and recent transactions, fetched concurrently.
    pub async fn overview(
        &self,
        address: &str,
        limit: u64,
    ) -> Result<Formatted<AccountOverview>, ApiError> {
        Self::check_address(address)?;
        let (balance, tokens, transactions) = futures::join!(
            self.client.balance(address),
            self.client.token_holdings(address),
            self.client.transactions(address, limit),
        );
        let raw = AccountOverview {
            address: address.to_string(),
            balance: balance?,
            tokens: tokens?,
            transactions: transactions?,
        };
        let text = render_overview(&self.formatter, &raw);
        Ok(Formatted { raw, text })
    }
}
