use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::format::date::{Clock, SECONDS_PER_DAY};
use crate::format::{RawValue, StatField};

pub const DEFAULT_SORT: &str = "DESC";
pub const DEFAULT_SKIP: u64 = 0;
pub const DEFAULT_LIMIT: u64 = 10;

/// Caller-supplied parameters for a time-series statistics request.
/// Any field left as `None` is filled in by [`normalize`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsQuery {
    pub min_timestamp: Option<i64>,
    pub max_timestamp: Option<i64>,
    pub sort: Option<String>,
    pub skip: Option<u64>,
    pub limit: Option<u64>,
    pub contract: Option<String>,
    pub interval_type: Option<String>,
}

/// Fully populated statistics query, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsQueryWindow {
    pub min_timestamp: i64,
    pub max_timestamp: i64,
    pub sort: String,
    pub skip: u64,
    pub limit: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval_type: Option<String>,
}

/// Fills in the last-24h window, `DESC` sort and the first page of ten.
///
/// Supplied values pass through untouched: no clamping and no whitelist,
/// the server decides what is acceptable. The clock is read once so a
/// fully defaulted window spans exactly one day.
pub fn normalize(query: StatsQuery, clock: &impl Clock) -> StatsQueryWindow {
    let now = clock.now();
    StatsQueryWindow {
        min_timestamp: query.min_timestamp.unwrap_or(now - SECONDS_PER_DAY),
        max_timestamp: query.max_timestamp.unwrap_or(now),
        sort: query.sort.unwrap_or_else(|| DEFAULT_SORT.to_string()),
        skip: query.skip.unwrap_or(DEFAULT_SKIP),
        limit: query.limit.unwrap_or(DEFAULT_LIMIT),
        contract: query.contract,
        interval_type: query.interval_type,
    }
}

impl StatsQueryWindow {
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("minTimestamp", self.min_timestamp.to_string()),
            ("maxTimestamp", self.max_timestamp.to_string()),
            ("sort", self.sort.clone()),
            ("skip", self.skip.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(contract) = &self.contract {
            pairs.push(("contract", contract.clone()));
        }
        if let Some(interval) = &self.interval_type {
            pairs.push(("intervalType", interval.clone()));
        }
        pairs
    }
}

/// Time-series statistics endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StatsEndpoint {
    ActiveAccounts,
    AccountGrowth,
    Contracts,
    Transactions,
    NativeTransfers,
    TokenTransfers,
    TokenHolders,
    Tps,
    Mining,
    Fees,
}

impl StatsEndpoint {
    pub fn path(&self) -> &'static str {
        match self {
            StatsEndpoint::ActiveAccounts => "/statistics/account/active",
            StatsEndpoint::AccountGrowth => "/statistics/account/growth",
            StatsEndpoint::Contracts => "/statistics/contract",
            StatsEndpoint::Transactions => "/statistics/transaction",
            StatsEndpoint::NativeTransfers => "/statistics/cfx/transfer",
            StatsEndpoint::TokenTransfers => "/statistics/token/transfer",
            StatsEndpoint::TokenHolders => "/statistics/token/holder",
            StatsEndpoint::Tps => "/statistics/tps",
            StatsEndpoint::Mining => "/statistics/mining",
            StatsEndpoint::Fees => "/statistics/fee",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            StatsEndpoint::ActiveAccounts => "Active accounts",
            StatsEndpoint::AccountGrowth => "Account growth",
            StatsEndpoint::Contracts => "Contracts created",
            StatsEndpoint::Transactions => "Transactions",
            StatsEndpoint::NativeTransfers => "CFX transfers",
            StatsEndpoint::TokenTransfers => "Token transfers",
            StatsEndpoint::TokenHolders => "Token holders",
            StatsEndpoint::Tps => "Transactions per second",
            StatsEndpoint::Mining => "Mining",
            StatsEndpoint::Fees => "Fees",
        }
    }

    /// Measures present in each row, in display order.
    pub fn fields(&self) -> &'static [StatField] {
        match self {
            StatsEndpoint::NativeTransfers => &[StatField::Count, StatField::Value],
            StatsEndpoint::Mining => &[StatField::Difficulty, StatField::HashRate],
            StatsEndpoint::Fees => &[StatField::Fee, StatField::Gas],
            _ => &[StatField::Count],
        }
    }

    /// Whether the server expects a `contract` parameter.
    pub fn needs_contract(&self) -> bool {
        matches!(self, StatsEndpoint::TokenTransfers | StatsEndpoint::TokenHolders)
    }
}

/// Lookback window of a top-N ranking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Span {
    #[default]
    #[value(name = "24h")]
    Day,
    #[value(name = "3d")]
    ThreeDays,
    #[value(name = "7d")]
    Week,
}

impl Span {
    pub fn as_str(&self) -> &'static str {
        match self {
            Span::Day => "24h",
            Span::ThreeDays => "3d",
            Span::Week => "7d",
        }
    }
}

/// Top-N ranking endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TopEndpoint {
    GasUsed,
    NativeSenders,
    NativeReceivers,
    TransactionSenders,
    TokenTransfers,
}

impl TopEndpoint {
    pub fn path(&self) -> &'static str {
        match self {
            TopEndpoint::GasUsed => "/statistics/top/gas/used",
            TopEndpoint::NativeSenders => "/statistics/top/cfx/sender",
            TopEndpoint::NativeReceivers => "/statistics/top/cfx/receiver",
            TopEndpoint::TransactionSenders => "/statistics/top/transaction/sender",
            TopEndpoint::TokenTransfers => "/statistics/top/token/transfer",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            TopEndpoint::GasUsed => "Top gas users",
            TopEndpoint::NativeSenders => "Top CFX senders",
            TopEndpoint::NativeReceivers => "Top CFX receivers",
            TopEndpoint::TransactionSenders => "Top transaction senders",
            TopEndpoint::TokenTransfers => "Top token transfers",
        }
    }

    /// The measure each entry is ranked by.
    pub fn measure(&self) -> StatField {
        match self {
            TopEndpoint::NativeSenders | TopEndpoint::NativeReceivers => StatField::Value,
            _ => StatField::Count,
        }
    }
}

/// One row of a time-bucketed statistics series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatItem {
    #[serde(default, alias = "timestamp", alias = "day")]
    pub stat_time: RawValue,
    #[serde(default)]
    pub count: RawValue,
    #[serde(default)]
    pub value: RawValue,
    #[serde(default)]
    pub fee: RawValue,
    #[serde(default)]
    pub gas: RawValue,
    #[serde(default)]
    pub difficulty: RawValue,
    #[serde(default)]
    pub hash_rate: RawValue,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl StatItem {
    pub fn measure(&self, field: StatField) -> &RawValue {
        match field {
            StatField::Count => &self.count,
            StatField::Value => &self.value,
            StatField::Fee => &self.fee,
            StatField::Gas => &self.gas,
            StatField::Difficulty => &self.difficulty,
            StatField::HashRate => &self.hash_rate,
        }
    }
}

static ABSENT: RawValue = RawValue::Absent;

/// One entry of a top-N ranking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopEntry {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub count: RawValue,
    #[serde(default)]
    pub value: RawValue,
    #[serde(default)]
    pub gas: RawValue,
}

impl TopEntry {
    pub fn measure(&self, field: StatField) -> &RawValue {
        match field {
            StatField::Count => &self.count,
            StatField::Value | StatField::Fee => &self.value,
            StatField::Gas => &self.gas,
            StatField::Difficulty | StatField::HashRate => &ABSENT,
        }
    }
}
