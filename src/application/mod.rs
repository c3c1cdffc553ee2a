/// High-level facade over every platform service
pub mod client;
/// Response payload models grouped by service
pub mod models;
/// Rate limiter module for API request throttling
pub mod rate_limiter;
/// Service traits and their REST implementations
pub mod services;

pub use client::FinanceAnalystClient;
