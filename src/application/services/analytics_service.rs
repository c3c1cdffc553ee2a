use crate::application::models::analytics::{
    DcfRequest, DcfValuation, DerivativePosition, DerivativesReport, IndustryBenchmarks,
    OptionContract, OptionPricing, Portfolio, PortfolioAnalysis, RiskMethod, RiskReport,
    StressScenario, StressTestReport,
};
use crate::application::services::decode;
use crate::application::services::interfaces::AnalyticsService;
use crate::error::AppError;
use crate::transport::rest_client::ApiClient;
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the analytics service
///
/// All heavy computation runs server-side; this layer frames the request
/// payloads and decodes the reports.
pub struct AnalyticsServiceImpl<C: ApiClient> {
    client: Arc<C>,
}

impl<C: ApiClient> AnalyticsServiceImpl<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<C: ApiClient + 'static> AnalyticsService for AnalyticsServiceImpl<C> {
    async fn analyze_portfolio(
        &self,
        portfolio: &Portfolio,
    ) -> Result<PortfolioAnalysis, AppError> {
        info!("Analyzing portfolio of {} assets", portfolio.assets.len());
        let data = self
            .client
            .post("analytics/portfolio", json!(portfolio))
            .await
            .map_err(|e| e.in_operation("analyze_portfolio"))?
            .into_result("analyze_portfolio")?;
        let analysis = decode(data, "analyze_portfolio")?;
        debug!("✓ Portfolio analysis received");
        Ok(analysis)
    }

    async fn quick_portfolio_analysis(
        &self,
        symbols: &[&str],
    ) -> Result<PortfolioAnalysis, AppError> {
        info!("Quick analysis over {:?}", symbols);
        let portfolio = Portfolio::equal_weighted(symbols);
        self.analyze_portfolio(&portfolio).await
    }

    async fn calculate_risk(
        &self,
        portfolio: &Portfolio,
        method: RiskMethod,
        confidence_level: f64,
    ) -> Result<RiskReport, AppError> {
        info!(
            "Calculating {} risk at {:.0}% confidence",
            method.as_str(),
            confidence_level * 100.0
        );
        let body = json!({
            "portfolio": portfolio,
            "method": method,
            "confidence_level": confidence_level,
        });
        let data = self
            .client
            .post("analytics/risk", body)
            .await
            .map_err(|e| e.in_operation("calculate_risk"))?
            .into_result("calculate_risk")?;
        decode(data, "calculate_risk")
    }

    async fn price_options(&self, contract: &OptionContract) -> Result<OptionPricing, AppError> {
        debug!("Pricing option on {}", contract.symbol);
        let data = self
            .client
            .post("analytics/options", json!(contract))
            .await
            .map_err(|e| e.in_operation("price_options"))?
            .into_result("price_options")?;
        decode(data, "price_options")
    }

    async fn analyze_derivatives(
        &self,
        positions: &[DerivativePosition],
    ) -> Result<DerivativesReport, AppError> {
        info!("Analyzing {} derivative positions", positions.len());
        let data = self
            .client
            .post("analytics/derivatives", json!(positions))
            .await
            .map_err(|e| e.in_operation("analyze_derivatives"))?
            .into_result("analyze_derivatives")?;
        decode(data, "analyze_derivatives")
    }

    async fn stress_test(
        &self,
        portfolio: &Portfolio,
        scenarios: &[StressScenario],
    ) -> Result<StressTestReport, AppError> {
        info!("Stress testing against {} scenarios", scenarios.len());
        let body = json!({
            "portfolio": portfolio,
            "scenarios": scenarios,
        });
        let data = self
            .client
            .post("analytics/stress-test", body)
            .await
            .map_err(|e| e.in_operation("stress_test"))?
            .into_result("stress_test")?;
        decode(data, "stress_test")
    }

    async fn calculate_dcf(&self, request: &DcfRequest) -> Result<DcfValuation, AppError> {
        info!("Running DCF valuation for {}", request.symbol);
        let data = self
            .client
            .post("models/dcf/calculate", json!(request))
            .await
            .map_err(|e| e.in_operation("calculate_dcf"))?
            .into_result("calculate_dcf")?;
        let valuation = decode(data, "calculate_dcf")?;
        debug!("✓ DCF valuation received for {}", request.symbol);
        Ok(valuation)
    }

    async fn industry_benchmarks(&self, sector: &str) -> Result<IndustryBenchmarks, AppError> {
        debug!("Fetching industry benchmarks for {}", sector);
        let data = self
            .client
            .get(&format!("benchmarks/industry/{sector}"))
            .await
            .map_err(|e| e.in_operation("industry_benchmarks"))?
            .into_result("industry_benchmarks")?;
        let mut benchmarks: IndustryBenchmarks = decode(data, "industry_benchmarks")?;
        if benchmarks.sector.is_empty() {
            benchmarks.sector = sector.to_string();
        }
        Ok(benchmarks)
    }
}
