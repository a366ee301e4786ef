pub mod address;
pub mod models;
pub mod scan;
pub mod stats;

pub use address::is_valid_address;
pub use models::{ContractSource, Page, TokenHolding, TokenInfo, TokenTransfer, Transaction};
pub use scan::{ApiError, ApiResponse, ScanClient};
pub use stats::{
    normalize, Span, StatItem, StatsEndpoint, StatsQuery, StatsQueryWindow, TopEndpoint, TopEntry,
};
