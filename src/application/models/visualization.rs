use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Chart family a visualization renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Candlestick,
    Heatmap,
}

impl ChartKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Bar => "bar",
            Self::Candlestick => "candlestick",
            Self::Heatmap => "heatmap",
        }
    }
}

/// Request to render a server-side visualization
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct VisualizationSpec {
    pub chart_type: ChartKind,
    /// The series or records to plot, passed through untouched
    pub data: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Renderer options the server understands, e.g. axis config
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
}

impl VisualizationSpec {
    #[must_use]
    pub fn new(chart_type: ChartKind, data: Value) -> Self {
        Self {
            chart_type,
            data,
            title: None,
            options: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: Value) -> Self {
        self.options = Some(options);
        self
    }
}

/// A stored visualization as reported by the platform
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct Visualization {
    #[serde(default, alias = "visualization_id")]
    pub id: String,
    #[serde(default)]
    pub chart_type: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// Hosted render URL when the platform produced one
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Export file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Xlsx,
    Json,
    Pdf,
}

impl ExportFormat {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
            Self::Json => "json",
            Self::Pdf => "pdf",
        }
    }
}

/// Request to export data server-side
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct ExportRequest {
    /// What to export, passed through untouched
    pub data: Value,
    pub format: ExportFormat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl ExportRequest {
    #[must_use]
    pub fn new(data: Value, format: ExportFormat) -> Self {
        Self {
            data,
            format,
            filename: None,
        }
    }

    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }
}

/// Server-side export job
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize)]
pub struct ExportJob {
    #[serde(default, alias = "export_id")]
    pub id: Option<String>,
    /// Job state, e.g. "ready"
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, alias = "download_url")]
    pub url: Option<String>,
}
