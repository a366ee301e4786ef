use anyhow::{bail, Context, Result};
use cfxscan_cli::api::{is_valid_address, ScanClient, Span, StatsEndpoint, StatsQuery, TopEndpoint};
use cfxscan_cli::config::Config;
use cfxscan_cli::format::date::format_timestamp;
use cfxscan_cli::format::TimestampStyle;
use cfxscan_cli::report::{Formatted, ScanWrapper};
use clap::{Parser, Subcommand};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "cfxscan")]
#[command(about = "Query the ConfluxScan explorer API and print readable reports", long_about = None)]
struct Cli {
    /// API base URL (overrides config and CFXSCAN_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// API key (overrides config and CFXSCAN_API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Also print the raw response as JSON
    #[arg(long, global = true)]
    raw: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Native balance of an account
    Balance { address: String },
    /// Tokens held by an account
    Tokens { address: String },
    /// Recent transactions of an account
    Transactions {
        address: String,
        #[arg(short, long)]
        limit: Option<u64>,
    },
    /// Recent token transfers of an account
    Transfers {
        address: String,
        #[arg(short, long)]
        limit: Option<u64>,
    },
    /// Verified source metadata of a contract
    Contract { address: String },
    /// Token metadata
    Token { contract: String },
    /// Time-series statistics (defaults to the last 24 hours)
    Stats {
        #[arg(value_enum)]
        kind: StatsEndpoint,
        #[arg(long)]
        min_timestamp: Option<i64>,
        #[arg(long)]
        max_timestamp: Option<i64>,
        #[arg(long)]
        sort: Option<String>,
        #[arg(long)]
        skip: Option<u64>,
        #[arg(short, long)]
        limit: Option<u64>,
        #[arg(long)]
        contract: Option<String>,
        #[arg(long)]
        interval_type: Option<String>,
    },
    /// Top-N rankings
    Top {
        #[arg(value_enum)]
        kind: TopEndpoint,
        #[arg(long, value_enum, default_value = "24h")]
        span: Span,
        #[arg(short, long, default_value = "10")]
        limit: u64,
    },
    /// Balance, tokens and recent transactions in one report
    Overview {
        address: String,
        #[arg(short, long)]
        limit: Option<u64>,
    },
    /// Render a timestamp the way reports do
    Time {
        value: String,
        #[arg(long, value_enum, default_value = "full")]
        style: TimestampStyle,
    },
    /// Show config path and effective settings
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let mut config = Config::load().context("failed to load configuration")?;
    config.apply_env();
    if let Some(url) = cli.base_url.clone() {
        config.base_url = url;
    }
    if let Some(key) = cli.api_key.clone() {
        config.api_key = Some(key);
    }

    let client = ScanClient::new(&config.base_url, config.api_key.clone(), config.timeout())?;
    let wrapper = ScanWrapper::new(client);
    let limit = |l: Option<u64>| l.unwrap_or(config.default_limit);

    match cli.command {
        Commands::Balance { address } => {
            require_address(&address)?;
            print(wrapper.balance(&address).await?, cli.raw)?;
        }
        Commands::Tokens { address } => {
            require_address(&address)?;
            print(wrapper.token_holdings(&address).await?, cli.raw)?;
        }
        Commands::Transactions { address, limit: l } => {
            require_address(&address)?;
            print(wrapper.transactions(&address, limit(l)).await?, cli.raw)?;
        }
        Commands::Transfers { address, limit: l } => {
            require_address(&address)?;
            print(wrapper.token_transfers(&address, limit(l)).await?, cli.raw)?;
        }
        Commands::Contract { address } => {
            require_address(&address)?;
            print(wrapper.contract(&address).await?, cli.raw)?;
        }
        Commands::Token { contract } => {
            require_address(&contract)?;
            print(wrapper.token_info(&contract).await?, cli.raw)?;
        }
        Commands::Stats {
            kind,
            min_timestamp,
            max_timestamp,
            sort,
            skip,
            limit,
            contract,
            interval_type,
        } => {
            if kind.needs_contract() && contract.is_none() {
                tracing::warn!("{:?} usually needs --contract", kind);
            }
            let query = StatsQuery {
                min_timestamp,
                max_timestamp,
                sort,
                skip,
                limit,
                contract,
                interval_type,
            };
            print(wrapper.stats(kind, query).await?, cli.raw)?;
        }
        Commands::Top { kind, span, limit } => {
            print(wrapper.top(kind, span, limit).await?, cli.raw)?;
        }
        Commands::Overview { address, limit: l } => {
            require_address(&address)?;
            print(wrapper.overview(&address, limit(l)).await?, cli.raw)?;
        }
        Commands::Time { value, style } => {
            println!("{}", format_timestamp(value.as_str(), style));
        }
        Commands::Config => {
            println!("Config file: {}", Config::config_path()?.display());
            let mut shown = config.clone();
            if shown.api_key.is_some() {
                shown.api_key = Some("********".to_string());
            }
            println!("{}", serde_json::to_string_pretty(&shown)?);
        }
    }

    Ok(())
}

fn require_address(address: &str) -> Result<()> {
    if !is_valid_address(address) {
        bail!("'{}' is not a valid hex or base32 address", address);
    }
    Ok(())
}

fn print<T: Serialize>(formatted: Formatted<T>, raw: bool) -> Result<()> {
    println!("{}", formatted.text);
    if raw {
        println!("\n{}", serde_json::to_string_pretty(&formatted.raw)?);
    }
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
