use crate::application::models::market::{
    CompanyProfile, IndexQuote, Quote, ReportingPeriod, StatementKind,
};
use crate::error::AppError;
use crate::presentation::table::DataTable;
use async_trait::async_trait;
use std::collections::HashMap;

/// Interface for market data
#[async_trait]
pub trait MarketService: Send + Sync {
    /// Gets the current quote for a symbol
    async fn get_quote(&self, symbol: &str) -> Result<Quote, AppError>;

    /// Gets quotes for several symbols, capturing failures per symbol
    ///
    /// One bad symbol never fails the batch; its entry carries the error
    /// instead.
    async fn get_quotes(
        &self,
        symbols: &[&str],
    ) -> HashMap<String, Result<Quote, AppError>>;

    /// Gets historical bars reshaped into a column-keyed table
    ///
    /// # Arguments
    /// * `symbol` - Instrument symbol
    /// * `period` - Lookback window, e.g. "1y", "6mo"
    /// * `interval` - Bar size, e.g. "1d", "1h"
    async fn get_historical_data(
        &self,
        symbol: &str,
        period: &str,
        interval: &str,
    ) -> Result<DataTable, AppError>;

    /// Gets company reference data for a symbol
    async fn get_company_profile(&self, symbol: &str) -> Result<CompanyProfile, AppError>;

    /// Gets one financial statement reshaped into a column-keyed table
    async fn get_financial_statements(
        &self,
        symbol: &str,
        statement: StatementKind,
        period: ReportingPeriod,
    ) -> Result<DataTable, AppError>;

    /// Gets quotes for the major market indices
    async fn get_market_indices(&self) -> Result<Vec<IndexQuote>, AppError>;
}
