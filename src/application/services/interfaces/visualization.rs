use crate::application::models::visualization::{
    ExportJob, ExportRequest, Visualization, VisualizationSpec,
};
use crate::error::AppError;
use async_trait::async_trait;

/// Interface for server-side visualizations and exports
#[async_trait]
pub trait VisualizationService: Send + Sync {
    /// Creates a visualization from a chart spec
    async fn create_visualization(
        &self,
        spec: &VisualizationSpec,
    ) -> Result<Visualization, AppError>;

    /// Fetches a stored visualization by id
    async fn get_visualization(&self, id: &str) -> Result<Visualization, AppError>;

    /// Starts a server-side export and returns the job
    ///
    /// File generation happens on the platform; the client only carries
    /// the request and hands back the job handle.
    async fn export(&self, request: &ExportRequest) -> Result<ExportJob, AppError>;
}
