use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Forecasting model the server should run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastModel {
    /// Let the server pick
    #[default]
    Auto,
    Linear,
    RandomForest,
    NeuralNet,
}

impl ForecastModel {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Linear => "linear",
            Self::RandomForest => "random_forest",
            Self::NeuralNet => "neural_net",
        }
    }
}

/// Where a text being scored for sentiment came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentSource {
    #[default]
    News,
    Social,
    Earnings,
}

impl SentimentSource {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::News => "news",
            Self::Social => "social",
            Self::Earnings => "earnings",
        }
    }
}

/// AI-generated commentary over a dataset
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct InsightReport {
    #[serde(default)]
    pub insights: Option<Value>,
    #[serde(default)]
    pub summary: Option<String>,
    /// Model confidence, 0 to 1
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default, alias = "generatedAt")]
    pub generated_at: Option<DateTime<Utc>>,
}

/// Predicted metric path
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct Forecast {
    /// Number of periods predicted
    #[serde(default)]
    pub horizon: Option<u32>,
    /// Model the server actually used
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub predictions: Option<Value>,
    #[serde(default, alias = "confidenceIntervals")]
    pub confidence_intervals: Option<Value>,
}

/// Sentiment verdict over a text
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct SentimentScore {
    /// Polarity, -1 (bearish) to 1 (bullish)
    #[serde(default)]
    pub score: Option<f64>,
    /// Categorical label, e.g. "positive"
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub breakdown: Option<Value>,
}
