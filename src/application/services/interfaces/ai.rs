use crate::application::models::ai::{
    Forecast, ForecastModel, InsightReport, SentimentScore, SentimentSource,
};
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the AI endpoints
#[async_trait]
pub trait AiService: Send + Sync {
    /// Generates commentary over a dataset, with optional extra context
    async fn generate_insights(
        &self,
        data: &Value,
        context: Option<&Value>,
    ) -> Result<InsightReport, AppError>;

    /// Predicts future metric values
    ///
    /// # Arguments
    /// * `data` - Historical series the prediction starts from
    /// * `horizon` - Number of periods to predict
    /// * `model` - Which model family the server should run
    async fn predict_metrics(
        &self,
        data: &Value,
        horizon: u32,
        model: ForecastModel,
    ) -> Result<Forecast, AppError>;

    /// Scores a text for market sentiment
    async fn analyze_sentiment(
        &self,
        text: &str,
        source: SentimentSource,
    ) -> Result<SentimentScore, AppError>;
}
