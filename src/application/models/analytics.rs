use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One position inside a portfolio
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct PortfolioAsset {
    pub symbol: String,
    /// Portfolio weight, the server expects all weights to sum to 1
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
}

/// Portfolio sent to the analytics endpoints
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub assets: Vec<PortfolioAsset>,
}

impl Portfolio {
    #[must_use]
    pub fn new(assets: Vec<PortfolioAsset>) -> Self {
        Self { name: None, assets }
    }

    #[must_use]
    pub fn named(name: impl Into<String>, assets: Vec<PortfolioAsset>) -> Self {
        Self {
            name: Some(name.into()),
            assets,
        }
    }

    /// Builds an equal-weighted portfolio over the given symbols
    #[must_use]
    pub fn equal_weighted(symbols: &[&str]) -> Self {
        if symbols.is_empty() {
            return Self::new(Vec::new());
        }
        let weight = 1.0 / symbols.len() as f64;
        Self::new(
            symbols
                .iter()
                .map(|symbol| PortfolioAsset {
                    symbol: (*symbol).to_string(),
                    weight,
                    quantity: None,
                })
                .collect(),
        )
    }
}

/// Risk model the server should run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskMethod {
    #[default]
    Parametric,
    Historical,
    MonteCarlo,
}

impl RiskMethod {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Parametric => "parametric",
            Self::Historical => "historical",
            Self::MonteCarlo => "monte_carlo",
        }
    }
}

/// Server-computed portfolio analysis
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct PortfolioAnalysis {
    #[serde(default, alias = "expectedReturn")]
    pub expected_return: Option<f64>,
    #[serde(default)]
    pub volatility: Option<f64>,
    #[serde(default, alias = "sharpeRatio")]
    pub sharpe_ratio: Option<f64>,
    #[serde(default, alias = "diversificationScore")]
    pub diversification_score: Option<f64>,
    /// Anything else the engine reports, passed through untouched
    #[serde(default)]
    pub metrics: Option<Value>,
}

/// Server-computed risk report
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct RiskReport {
    /// Value at risk at the requested confidence level
    #[serde(default, alias = "var")]
    pub value_at_risk: Option<f64>,
    /// Expected shortfall beyond the VaR threshold
    #[serde(default, alias = "cvar")]
    pub expected_shortfall: Option<f64>,
    #[serde(default)]
    pub confidence_level: Option<f64>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub metrics: Option<Value>,
}

/// Call or put
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Call,
    Put,
}

/// Option contract sent for pricing
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct OptionContract {
    pub symbol: String,
    pub strike: f64,
    /// Expiry date, ISO 8601
    pub expiry: String,
    pub option_type: OptionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volatility: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_free_rate: Option<f64>,
}

impl OptionContract {
    #[must_use]
    pub fn new(
        symbol: impl Into<String>,
        strike: f64,
        expiry: impl Into<String>,
        option_type: OptionType,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            strike,
            expiry: expiry.into(),
            option_type,
            quantity: None,
            volatility: None,
            risk_free_rate: None,
        }
    }

    #[must_use]
    pub fn with_volatility(mut self, volatility: f64) -> Self {
        self.volatility = Some(volatility);
        self
    }

    #[must_use]
    pub fn with_risk_free_rate(mut self, rate: f64) -> Self {
        self.risk_free_rate = Some(rate);
        self
    }
}

/// Server-computed option valuation and greeks
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct OptionPricing {
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub delta: Option<f64>,
    #[serde(default)]
    pub gamma: Option<f64>,
    #[serde(default)]
    pub theta: Option<f64>,
    #[serde(default)]
    pub vega: Option<f64>,
    #[serde(default)]
    pub rho: Option<f64>,
    #[serde(default, alias = "impliedVolatility")]
    pub implied_volatility: Option<f64>,
}

/// One derivative position sent for analysis
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct DerivativePosition {
    /// Instrument kind, e.g. "swap", "forward", "future"
    pub instrument_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underlying: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notional: Option<f64>,
    /// Maturity date, ISO 8601
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maturity: Option<String>,
    /// Free-form contract terms the engine understands
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms: Option<Value>,
}

/// Server-computed derivatives analysis
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct DerivativesReport {
    #[serde(default, alias = "totalExposure")]
    pub total_exposure: Option<f64>,
    #[serde(default)]
    pub instruments: Option<Value>,
    #[serde(default)]
    pub metrics: Option<Value>,
}

/// Named shock set applied during a stress test
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct StressScenario {
    pub name: String,
    /// Shocks keyed however the engine expects, passed through untouched
    pub shocks: Value,
}

impl StressScenario {
    #[must_use]
    pub fn new(name: impl Into<String>, shocks: Value) -> Self {
        Self {
            name: name.into(),
            shocks,
        }
    }
}

/// Server-computed stress test results
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct StressTestReport {
    #[serde(default)]
    pub scenarios: Option<Value>,
    #[serde(default, alias = "worstCaseLoss")]
    pub worst_case_loss: Option<f64>,
    #[serde(default)]
    pub summary: Option<Value>,
}

/// Inputs for a server-side DCF valuation
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct DcfRequest {
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminal_growth_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projection_years: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assumptions: Option<Value>,
}

impl DcfRequest {
    #[must_use]
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            discount_rate: None,
            terminal_growth_rate: None,
            projection_years: None,
            assumptions: None,
        }
    }

    #[must_use]
    pub fn with_discount_rate(mut self, rate: f64) -> Self {
        self.discount_rate = Some(rate);
        self
    }

    #[must_use]
    pub fn with_projection_years(mut self, years: u32) -> Self {
        self.projection_years = Some(years);
        self
    }
}

/// Server-computed DCF valuation
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct DcfValuation {
    #[serde(default)]
    pub symbol: String,
    #[serde(default, alias = "intrinsicValue")]
    pub intrinsic_value: Option<f64>,
    #[serde(default, alias = "fairValuePerShare")]
    pub fair_value_per_share: Option<f64>,
    /// Upside versus the current price, percent
    #[serde(default, alias = "upsidePercent")]
    pub upside_percent: Option<f64>,
    #[serde(default)]
    pub assumptions: Option<Value>,
}

/// Benchmark metrics for one industry sector
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct IndustryBenchmarks {
    #[serde(default)]
    pub sector: String,
    #[serde(default)]
    pub metrics: Option<Value>,
    #[serde(default, alias = "peerCount")]
    pub peer_count: Option<u32>,
    #[serde(default, alias = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}
