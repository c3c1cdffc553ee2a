use crate::application::models::ai::{
    Forecast, ForecastModel, InsightReport, SentimentScore, SentimentSource,
};
use crate::application::services::decode;
use crate::application::services::interfaces::AiService;
use crate::error::AppError;
use crate::transport::rest_client::ApiClient;
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the AI-assisted analysis service
pub struct AiServiceImpl<C: ApiClient> {
    client: Arc<C>,
}

impl<C: ApiClient> AiServiceImpl<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<C: ApiClient + 'static> AiService for AiServiceImpl<C> {
    async fn generate_insights(
        &self,
        data: &Value,
        context: Option<&Value>,
    ) -> Result<InsightReport, AppError> {
        info!("Generating insights");
        let mut body = json!({ "data": data });
        if let Some(context) = context {
            body["context"] = context.clone();
        }
        let data = self
            .client
            .post("ai/insights", body)
            .await
            .map_err(|e| e.in_operation("generate_insights"))?
            .into_result("generate_insights")?;
        let report = decode(data, "generate_insights")?;
        debug!("✓ Insight report received");
        Ok(report)
    }

    async fn predict_metrics(
        &self,
        data: &Value,
        horizon: u32,
        model: ForecastModel,
    ) -> Result<Forecast, AppError> {
        info!(
            "Predicting {} periods ahead with the {} model",
            horizon,
            model.as_str()
        );
        let body = json!({
            "data": data,
            "horizon": horizon,
            "model": model,
        });
        let data = self
            .client
            .post("ai/predict", body)
            .await
            .map_err(|e| e.in_operation("predict_metrics"))?
            .into_result("predict_metrics")?;
        decode(data, "predict_metrics")
    }

    async fn analyze_sentiment(
        &self,
        text: &str,
        source: SentimentSource,
    ) -> Result<SentimentScore, AppError> {
        debug!("Scoring sentiment of {} chars of {}", text.len(), source.as_str());
        let body = json!({
            "text": text,
            "source": source,
        });
        let data = self
            .client
            .post("ai/sentiment", body)
            .await
            .map_err(|e| e.in_operation("analyze_sentiment"))?
            .into_result("analyze_sentiment")?;
        decode(data, "analyze_sentiment")
    }
}
