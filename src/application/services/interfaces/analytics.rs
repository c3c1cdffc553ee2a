use crate::application::models::analytics::{
    DcfRequest, DcfValuation, DerivativePosition, DerivativesReport, IndustryBenchmarks,
    OptionContract, OptionPricing, Portfolio, PortfolioAnalysis, RiskMethod, RiskReport,
    StressScenario, StressTestReport,
};
use crate::error::AppError;
use async_trait::async_trait;

/// Interface for server-side analytics
///
/// Every computation happens on the platform; these methods frame the
/// request and decode the report.
#[async_trait]
pub trait AnalyticsService: Send + Sync {
    /// Runs the full portfolio analysis
    async fn analyze_portfolio(&self, portfolio: &Portfolio)
    -> Result<PortfolioAnalysis, AppError>;

    /// Equal-weighted portfolio analysis over a list of symbols
    async fn quick_portfolio_analysis(
        &self,
        symbols: &[&str],
    ) -> Result<PortfolioAnalysis, AppError>;

    /// Computes portfolio risk with the given model
    ///
    /// # Arguments
    /// * `portfolio` - The portfolio to analyze
    /// * `method` - Risk model to run
    /// * `confidence_level` - e.g. 0.95 for 95% VaR
    async fn calculate_risk(
        &self,
        portfolio: &Portfolio,
        method: RiskMethod,
        confidence_level: f64,
    ) -> Result<RiskReport, AppError>;

    /// Prices an option contract and returns its greeks
    async fn price_options(&self, contract: &OptionContract) -> Result<OptionPricing, AppError>;

    /// Analyzes a book of derivative positions
    async fn analyze_derivatives(
        &self,
        positions: &[DerivativePosition],
    ) -> Result<DerivativesReport, AppError>;

    /// Runs the portfolio through named stress scenarios
    async fn stress_test(
        &self,
        portfolio: &Portfolio,
        scenarios: &[StressScenario],
    ) -> Result<StressTestReport, AppError>;

    /// Runs a server-side DCF valuation
    async fn calculate_dcf(&self, request: &DcfRequest) -> Result<DcfValuation, AppError>;

    /// Gets benchmark metrics for an industry sector
    async fn industry_benchmarks(&self, sector: &str) -> Result<IndustryBenchmarks, AppError>;
}
