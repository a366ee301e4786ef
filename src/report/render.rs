//! Pure text renderers for explorer records.

use crate::api::{
    ContractSource, Page, Span, StatItem, StatsEndpoint, StatsQueryWindow, TokenHolding, TokenInfo,
    TokenTransfer, TopEndpoint, TopEntry, Transaction,
};
use crate::format::{RawValue, ResponseFormatter};

pub fn render_balance(fmt: &ResponseFormatter, address: &str, balance: &RawValue) -> String {
    format!("Address: {}\nBalance: {}", address, fmt.currency(balance))
}

pub fn render_token_holdings(
    fmt: &ResponseFormatter,
    address: &str,
    page: &Page<TokenHolding>,
) -> String {
    if page.list.is_empty() {
        return format!("No tokens found for {}", address);
    }
    let mut out = format!("Tokens held by {} ({}):", address, total_or_len(fmt, page));
    for holding in &page.list {
        let label = token_label(holding.symbol.as_deref(), holding.name.as_deref());
        out.push_str(&format!(
            "\n  {:<10} {}  {}",
            label,
            fmt.token_amount(&holding.amount, holding.decimals(), holding.symbol.as_deref()),
            holding.address
        ));
    }
    out
}

pub fn render_transactions(
    fmt: &ResponseFormatter,
    address: &str,
    page: &Page<Transaction>,
) -> String {
    if page.list.is_empty() {
        return format!("No transactions found for {}", address);
    }
    let mut out = format!("Transactions for {} (total {}):", address, total_or_len(fmt, page));
    for tx in &page.list {
        out.push_str(&format!(
            "\n  {}  {}  [{}]\n    {} -> {}\n    value {}  gas price {}  fee {}",
            fmt.timestamp(&tx.timestamp),
            tx.hash,
            tx_status(&tx.status),
            tx.from,
            tx.to.as_deref().unwrap_or("contract creation"),
            fmt.currency(&tx.value),
            fmt.gas(&tx.gas_price),
            fmt.currency(&tx.gas_fee),
        ));
    }
    out
}

pub fn render_token_transfers(
    fmt: &ResponseFormatter,
    address: &str,
    page: &Page<TokenTransfer>,
) -> String {
    if page.list.is_empty() {
        return format!("No token transfers found for {}", address);
    }
    let mut out = format!("Token transfers for {} (total {}):", address, total_or_len(fmt, page));
    for transfer in &page.list {
        out.push_str(&format!(
            "\n  {}  {}\n    {} -> {}  {}  ({})",
            fmt.timestamp(&transfer.timestamp),
            transfer.transaction_hash,
            transfer.from,
            transfer.to,
            fmt.token_amount(&transfer.amount, transfer.decimals(), transfer.symbol.as_deref()),
            transfer.contract,
        ));
    }
    out
}

pub fn render_contract(address: &str, source: &ContractSource) -> String {
    if !source.is_verified() {
        return format!("Contract {} has no verified source", address);
    }
    let optimization = if is_flag_set(&source.optimization_used) {
        match source.runs.to_integer() {
            Ok(runs) => format!("enabled ({} runs)", runs),
            Err(_) => "enabled".to_string(),
        }
    } else {
        "disabled".to_string()
    };
    let mut out = format!(
        "Contract: {}\nName: {}\nCompiler: {}\nOptimization: {}\nLicense: {}",
        address,
        non_empty(&source.contract_name),
        non_empty(&source.compiler_version),
        optimization,
        non_empty(&source.license_type),
    );
    if is_flag_set(&source.proxy) {
        out.push_str(&format!("\nProxy for: {}", non_empty(&source.implementation)));
    }
    out.push_str(&format!("\nSource: {} lines", source.source_code.lines().count()));
    out
}

pub fn render_token_info(fmt: &ResponseFormatter, info: &TokenInfo) -> String {
    format!(
        "Token: {} ({})\nContract: {}\nType: {}\nDecimals: {}\nTotal supply: {}\nHolders: {}\nTransfers: {}",
        info.name.as_deref().unwrap_or("N/A"),
        info.symbol.as_deref().unwrap_or("N/A"),
        info.contract,
        info.token_type.as_deref().unwrap_or("N/A"),
        info.decimals(),
        fmt.token_amount(&info.total_supply, info.decimals(), info.symbol.as_deref()),
        fmt.number(&info.holder_count),
        fmt.number(&info.transfer_count),
    )
}

pub fn render_stats(
    fmt: &ResponseFormatter,
    endpoint: StatsEndpoint,
    window: &StatsQueryWindow,
    page: &Page<StatItem>,
) -> String {
    let mut out = format!(
        "{} from {} to {} ({}, skip {}, limit {})",
        endpoint.title(),
        fmt.timestamp(window.min_timestamp),
        fmt.timestamp(window.max_timestamp),
        window.sort,
        window.skip,
        window.limit,
    );
    if let Some(contract) = &window.contract {
        out.push_str(&format!("\nContract: {}", contract));
    }
    if page.list.is_empty() {
        out.push_str("\n  No data points in range");
        return out;
    }
    for item in &page.list {
        out.push_str(&format!("\n  {}", render_stat_item(fmt, item, endpoint)));
    }
    out
}

/// `time | count: 1,234 | value: 1.5 CFX` with the measures of `endpoint`.
pub fn render_stat_item(fmt: &ResponseFormatter, item: &StatItem, endpoint: StatsEndpoint) -> String {
    let mut line = fmt.timestamp(&item.stat_time);
    for field in endpoint.fields() {
        line.push_str(&format!(
            " | {}: {}",
            field.label(),
            fmt.stat_field(*field, item.measure(*field))
        ));
    }
    line
}

pub fn render_top(
    fmt: &ResponseFormatter,
    endpoint: TopEndpoint,
    span: Span,
    page: &Page<TopEntry>,
) -> String {
    let mut out = format!("{} ({})", endpoint.title(), span.as_str());
    if page.list.is_empty() {
        out.push_str("\n  No entries");
        return out;
    }
    let measure = endpoint.measure();
    for (rank, entry) in page.list.iter().enumerate() {
        out.push_str(&format!(
            "\n  {:>3}. {}  {}",
            rank + 1,
            entry.address,
            fmt.stat_field(measure, entry.measure(measure))
        ));
    }
    out
}

fn total_or_len<T>(fmt: &ResponseFormatter, page: &Page<T>) -> String {
    if page.total.is_absent() {
        fmt.number(page.list.len() as u64)
    } else {
        fmt.number(&page.total)
    }
}

fn token_label<'a>(symbol: Option<&'a str>, name: Option<&'a str>) -> &'a str {
    symbol
        .filter(|s| !s.is_empty())
        .or(name.filter(|n| !n.is_empty()))
        .unwrap_or("?")
}

// Conflux receipts use 0 for success and 1 for failure.
fn tx_status(status: &RawValue) -> &'static str {
    match status.to_integer().ok().map(|s| s.to_string()).as_deref() {
        Some("0") => "success",
        Some("1") => "failed",
        Some(_) => "skipped",
        None => "pending",
    }
}

fn is_flag_set(flag: &RawValue) -> bool {
    match flag {
        RawValue::Text(text) => matches!(text.trim(), "1" | "true"),
        other => other.to_integer().is_ok_and(|n| n.to_string() == "1"),
    }
}

fn non_empty(text: &str) -> &str {
    if text.is_empty() { "N/A" } else { text }
}
