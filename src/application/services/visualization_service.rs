use crate::application::models::visualization::{
    ExportJob, ExportRequest, Visualization, VisualizationSpec,
};
use crate::application::services::decode;
use crate::application::services::interfaces::VisualizationService;
use crate::error::AppError;
use crate::transport::rest_client::ApiClient;
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the visualization and export service
pub struct VisualizationServiceImpl<C: ApiClient> {
    client: Arc<C>,
}

impl<C: ApiClient> VisualizationServiceImpl<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<C: ApiClient + 'static> VisualizationService for VisualizationServiceImpl<C> {
    async fn create_visualization(
        &self,
        spec: &VisualizationSpec,
    ) -> Result<Visualization, AppError> {
        info!("Creating {} visualization", spec.chart_type.as_str());
        let data = self
            .client
            .post("visualizations", json!(spec))
            .await
            .map_err(|e| e.in_operation("create_visualization"))?
            .into_result("create_visualization")?;
        let visualization = decode(data, "create_visualization")?;
        debug!("✓ Visualization created");
        Ok(visualization)
    }

    async fn get_visualization(&self, id: &str) -> Result<Visualization, AppError> {
        debug!("Fetching visualization {}", id);
        let data = self
            .client
            .get(&format!("visualizations/{id}"))
            .await
            .map_err(|e| e.in_operation("get_visualization"))?
            .into_result("get_visualization")?;
        decode(data, "get_visualization")
    }

    async fn export(&self, request: &ExportRequest) -> Result<ExportJob, AppError> {
        info!("Requesting {} export", request.format.as_str());
        let data = self
            .client
            .post("export", json!(request))
            .await
            .map_err(|e| e.in_operation("export"))?
            .into_result("export")?;
        decode(data, "export")
    }
}
