use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Real-time quote for a single symbol
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct Quote {
    /// Ticker symbol, echoed back by the server
    #[serde(default)]
    pub symbol: String,
    /// Last traded price
    pub price: f64,
    /// Absolute change since previous close
    #[serde(default)]
    pub change: Option<f64>,
    /// Percent change since previous close
    #[serde(default, alias = "changePercent")]
    pub change_percent: Option<f64>,
    /// Traded volume
    #[serde(default)]
    pub volume: Option<u64>,
    /// Quote currency
    #[serde(default)]
    pub currency: Option<String>,
    /// When the quote was produced
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Company reference data
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct CompanyProfile {
    #[serde(default)]
    pub symbol: String,
    /// Legal company name
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    /// Market capitalization in the listing currency
    #[serde(default, alias = "marketCap")]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub employees: Option<u64>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Quote for a market index
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct IndexQuote {
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Current index level
    #[serde(default, alias = "value")]
    pub price: Option<f64>,
    #[serde(default)]
    pub change: Option<f64>,
    #[serde(default, alias = "changePercent")]
    pub change_percent: Option<f64>,
}

/// Which financial statement to fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatementKind {
    #[default]
    Income,
    Balance,
    Cashflow,
}

impl StatementKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Balance => "balance",
            Self::Cashflow => "cashflow",
        }
    }
}

impl std::fmt::Display for StatementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reporting cadence for financial statements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportingPeriod {
    #[default]
    Annual,
    Quarterly,
}

impl ReportingPeriod {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Quarterly => "quarterly",
        }
    }
}

impl std::fmt::Display for ReportingPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
