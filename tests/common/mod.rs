#![allow(dead_code)]

use cfxscan_cli::api::Page;
use cfxscan_cli::format::{FixedClock, ResponseFormatter};
use serde::de::DeserializeOwned;

/// 2024-02-07 12:00:00 UTC
pub const NOW: i64 = 1_707_307_200;

pub const ADDR: &str = "0x1234567890abcdef1234567890abcdef12345678";
pub const TOKEN: &str = "0xfe97e85d13abd9c1c33384e796f10b73905637ce";

pub fn clock() -> FixedClock {
    FixedClock(NOW)
}

pub fn fmt() -> ResponseFormatter {
    ResponseFormatter
}

// Decodes a `{ total, list }` result the way the API layer does.
pub fn page<T: DeserializeOwned>(json: &str) -> Page<T> {
    serde_json::from_str(json).expect("fixture should decode")
}
