use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::format::units::MAX_DECIMALS;
use crate::format::RawValue;

/// Decimals assumed for a token that does not report its own.
pub const DEFAULT_TOKEN_DECIMALS: u32 = 18;

/// `{ total, list }` page returned by list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub total: RawValue,
    #[serde(default = "Vec::new")]
    pub list: Vec<T>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenHolding {
    #[serde(default, alias = "contract")]
    pub address: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub decimals: RawValue,
    #[serde(default, alias = "balance")]
    pub amount: RawValue,
    #[serde(default, rename = "type")]
    pub token_type: Option<String>,
}

impl TokenHolding {
    pub fn decimals(&self) -> u32 {
        token_decimals(&self.decimals)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default)]
    pub hash: String,
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub value: RawValue,
    #[serde(default)]
    pub gas_price: RawValue,
    #[serde(default)]
    pub gas_fee: RawValue,
    #[serde(default)]
    pub timestamp: RawValue,
    #[serde(default)]
    pub status: RawValue,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenTransfer {
    #[serde(default, alias = "hash")]
    pub transaction_hash: String,
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    #[serde(default, alias = "value")]
    pub amount: RawValue,
    #[serde(default, alias = "address")]
    pub contract: String,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub decimals: RawValue,
    #[serde(default)]
    pub timestamp: RawValue,
}

impl TokenTransfer {
    pub fn decimals(&self) -> u32 {
        token_decimals(&self.decimals)
    }
}

/// Verified-source record, Etherscan-compatible field names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContractSource {
    #[serde(default)]
    pub source_code: String,
    #[serde(default, rename = "ABI")]
    pub abi: String,
    #[serde(default)]
    pub contract_name: String,
    #[serde(default)]
    pub compiler_version: String,
    #[serde(default)]
    pub optimization_used: RawValue,
    #[serde(default)]
    pub runs: RawValue,
    #[serde(default)]
    pub license_type: String,
    #[serde(default)]
    pub proxy: RawValue,
    #[serde(default)]
    pub implementation: String,
}

impl ContractSource {
    pub fn is_verified(&self) -> bool {
        !self.source_code.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    #[serde(default, alias = "address")]
    pub contract: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub decimals: RawValue,
    #[serde(default)]
    pub total_supply: RawValue,
    #[serde(default)]
    pub holder_count: RawValue,
    #[serde(default)]
    pub transfer_count: RawValue,
    #[serde(default, rename = "type")]
    pub token_type: Option<String>,
}

impl TokenInfo {
    pub fn decimals(&self) -> u32 {
        token_decimals(&self.decimals)
    }
}

fn token_decimals(raw: &RawValue) -> u32 {
    raw.to_integer()
        .ok()
        .and_then(|d| d.to_u32())
        .filter(|d| *d <= MAX_DECIMALS)
        .unwrap_or(DEFAULT_TOKEN_DECIMALS)
}
