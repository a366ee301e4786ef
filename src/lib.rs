pub mod api;
pub mod config;
pub mod format;
pub mod report;
