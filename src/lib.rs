//! # FinanceAnalyst Pro Client
//!
//! Rust client for the FinanceAnalyst Pro REST API: market data, server-side
//! analytics, AI commentary, webhooks, provider integrations, collaboration
//! and visualization exports behind one typed, rate-limited client.
//!
//! All heavy computation happens on the platform. This crate frames the
//! requests, enforces the client-side contract (request spacing, Retry-After
//! replays on 429, a single token refresh on 401, exponential backoff) and
//! decodes the responses into typed models.
//!
//! ## Quick start
//!
//! ```ignore
//! use financeanalyst_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let client = FinanceAnalystClient::from_env()?;
//!     let quote = client.market().get_quote("AAPL").await?;
//!     println!("{} last traded at {:?}", quote.symbol, quote.price);
//!     Ok(())
//! }
//! ```
//!
//! Configuration comes from `FA_*` environment variables; see
//! [`config::Config`] for the full list.

/// High-level client, service implementations and response models
pub mod application;
/// Configuration loaded from the environment
pub mod config;
/// Default endpoints, headers and retry settings
pub mod constants;
/// The error hierarchy shared by the whole crate
pub mod error;
/// Convenience re-exports of the commonly used types
pub mod prelude;
/// Tabular reshaping of record-style payloads
pub mod presentation;
/// Token storage and the grant flows
pub mod session;
/// HTTP transport, response normalization and the resilient client
pub mod transport;
/// Environment, request id and logging helpers
pub mod utils;

/// Crate version, as compiled
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the crate version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
