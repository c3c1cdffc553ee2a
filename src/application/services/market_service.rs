use crate::application::models::market::{
    CompanyProfile, IndexQuote, Quote, ReportingPeriod, StatementKind,
};
use crate::application::services::interfaces::MarketService;
use crate::application::services::{decode, expect_records};
use crate::error::AppError;
use crate::presentation::table::DataTable;
use crate::transport::rest_client::ApiClient;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the market data service
pub struct MarketServiceImpl<C: ApiClient> {
    client: Arc<C>,
}

impl<C: ApiClient> MarketServiceImpl<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<C: ApiClient + 'static> MarketService for MarketServiceImpl<C> {
    async fn get_quote(&self, symbol: &str) -> Result<Quote, AppError> {
        debug!("Fetching quote for {}", symbol);
        let data = self
            .client
            .get(&format!("market/quote/{symbol}"))
            .await
            .map_err(|e| e.in_operation("get_quote"))?
            .into_result("get_quote")?;
        let mut quote: Quote = decode(data, "get_quote")?;
        // Flat payloads may omit the symbol; the caller already knows it.
        if quote.symbol.is_empty() {
            quote.symbol = symbol.to_string();
        }
        Ok(quote)
    }

    async fn get_quotes(&self, symbols: &[&str]) -> HashMap<String, Result<Quote, AppError>> {
        info!("Fetching quotes for {} symbols", symbols.len());
        let mut quotes = HashMap::with_capacity(symbols.len());
        for symbol in symbols {
            let result = self.get_quote(symbol).await;
            if let Err(err) = &result {
                debug!("Quote for {} failed: {}", symbol, err);
            }
            quotes.insert((*symbol).to_string(), result);
        }
        quotes
    }

    async fn get_historical_data(
        &self,
        symbol: &str,
        period: &str,
        interval: &str,
    ) -> Result<DataTable, AppError> {
        info!("Fetching {} history for {} at {}", period, symbol, interval);
        let query = vec![
            ("period".to_string(), period.to_string()),
            ("interval".to_string(), interval.to_string()),
        ];
        let data = self
            .client
            .get_with_query(&format!("market/history/{symbol}"), query)
            .await
            .map_err(|e| e.in_operation("get_historical_data"))?
            .into_result("get_historical_data")?;
        let records = expect_records(data, &["data"], "get_historical_data")?;
        debug!("✓ {} bars received for {}", records.len(), symbol);
        Ok(DataTable::from_records(&records))
    }

    async fn get_company_profile(&self, symbol: &str) -> Result<CompanyProfile, AppError> {
        debug!("Fetching company profile for {}", symbol);
        let data = self
            .client
            .get(&format!("company/{symbol}/info"))
            .await
            .map_err(|e| e.in_operation("get_company_profile"))?
            .into_result("get_company_profile")?;
        let mut profile: CompanyProfile = decode(data, "get_company_profile")?;
        if profile.symbol.is_empty() {
            profile.symbol = symbol.to_string();
        }
        Ok(profile)
    }

    async fn get_financial_statements(
        &self,
        symbol: &str,
        statement: StatementKind,
        period: ReportingPeriod,
    ) -> Result<DataTable, AppError> {
        info!(
            "Fetching {} {} statements for {}",
            period.as_str(),
            statement.as_str(),
            symbol
        );
        let query = vec![
            ("type".to_string(), statement.as_str().to_string()),
            ("period".to_string(), period.as_str().to_string()),
        ];
        let data = self
            .client
            .get_with_query(&format!("company/{symbol}/financials"), query)
            .await
            .map_err(|e| e.in_operation("get_financial_statements"))?
            .into_result("get_financial_statements")?;
        let records = expect_records(data, &["data"], "get_financial_statements")?;
        Ok(DataTable::from_records(&records))
    }

    async fn get_market_indices(&self) -> Result<Vec<IndexQuote>, AppError> {
        debug!("Fetching market indices");
        let data = self
            .client
            .get("market/indices")
            .await
            .map_err(|e| e.in_operation("get_market_indices"))?
            .into_result("get_market_indices")?;
        let records = expect_records(data, &["indices", "data"], "get_market_indices")?;
        decode(serde_json::Value::Array(records), "get_market_indices")
    }
}
