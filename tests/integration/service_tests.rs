use crate::common::{test_client, test_config};
use financeanalyst_client::application::client::FinanceAnalystClient;
use financeanalyst_client::application::models::ai::{ForecastModel, SentimentSource};
use financeanalyst_client::application::models::analytics::{Portfolio, RiskMethod};
use financeanalyst_client::application::models::collaboration::NewComment;
use financeanalyst_client::application::models::market::{ReportingPeriod, StatementKind};
use financeanalyst_client::application::models::visualization::{ExportFormat, ExportRequest};
use financeanalyst_client::application::models::webhooks::WebhookRegistration;
use financeanalyst_client::application::services::{
    AiService, AiServiceImpl, AnalyticsService, AnalyticsServiceImpl, CollaborationService,
    CollaborationServiceImpl, IntegrationService, IntegrationServiceImpl, MarketService,
    MarketServiceImpl, PlatformService, PlatformServiceImpl, VisualizationService,
    VisualizationServiceImpl, WebhookService, WebhookServiceImpl,
};
use financeanalyst_client::error::AppError;
use financeanalyst_client::transport::rest_client::RestClient;
use mockito::{Matcher, Server};
use serde_json::json;
use std::sync::Arc;
use tokio_test::block_on;

#[test]
fn test_get_quote_decodes_envelope() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", "/market/quote/AAPL")
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(
            r#"{"success":true,"data":{"symbol":"AAPL","price":189.84,"change":1.2,"changePercent":0.64,"volume":51230000}}"#,
        )
        .create();

    let market = MarketServiceImpl::new(Arc::new(test_client(&server.url())));
    let quote = block_on(market.get_quote("AAPL")).expect("Quote failed");

    assert_eq!(quote.symbol, "AAPL");
    assert_eq!(quote.price, 189.84);
    assert_eq!(quote.change_percent, Some(0.64));
    assert_eq!(quote.volume, Some(51230000));
    mock.assert();
}

#[test]
fn test_get_quote_fills_symbol_from_request() {
    let mut server = Server::new();

    server
        .mock("GET", "/market/quote/AAPL")
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"price": 150.25}"#)
        .create();

    let market = MarketServiceImpl::new(Arc::new(test_client(&server.url())));
    let quote = block_on(market.get_quote("AAPL")).expect("Quote failed");

    assert_eq!(quote.symbol, "AAPL");
    assert_eq!(quote.price, 150.25);
}

#[test]
fn test_get_quotes_captures_per_symbol_failures() {
    let mut server = Server::new();

    let good_mock = server
        .mock("GET", "/market/quote/AAPL")
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"symbol":"AAPL","price":189.84}"#)
        .create();
    let bad_mock = server
        .mock("GET", "/market/quote/MSFT")
        .with_status(500)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"error": "upstream feed down"}"#)
        .expect(1)
        .create();

    let mut config = test_config(&server.url());
    config.retry.max_retries = 1;
    let client = RestClient::new(config).expect("Failed to create client");
    let market = MarketServiceImpl::new(Arc::new(client));

    let quotes = block_on(market.get_quotes(&["AAPL", "MSFT"]));

    assert_eq!(quotes.len(), 2);
    assert!(quotes["AAPL"].is_ok());
    let err = quotes["MSFT"].as_ref().unwrap_err();
    assert!(err.to_string().contains("upstream feed down"));
    good_mock.assert();
    bad_mock.assert();
}

#[test]
fn test_historical_data_reshapes_records() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", "/market/history/AAPL")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("period".into(), "1y".into()),
            Matcher::UrlEncoded("interval".into(), "1d".into()),
        ]))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(
            r#"{"success":true,"data":{"data":[
                {"date":"2026-08-20","open":188.1,"close":189.8},
                {"date":"2026-08-21","open":189.9,"close":191.2}
            ]}}"#,
        )
        .create();

    let market = MarketServiceImpl::new(Arc::new(test_client(&server.url())));
    let table = block_on(market.get_historical_data("AAPL", "1y", "1d")).expect("History failed");

    assert_eq!(table.columns(), &["date", "open", "close"]);
    assert_eq!(table.len(), 2);
    assert_eq!(table.numeric_column("close"), Some(vec![189.8, 191.2]));
    mock.assert();
}

#[test]
fn test_financial_statements_send_type_and_period() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", "/company/AAPL/financials")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("type".into(), "income".into()),
            Matcher::UrlEncoded("period".into(), "annual".into()),
        ]))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(
            r#"{"success":true,"data":{"data":[{"year":2025,"revenue":394328000000.0}]}}"#,
        )
        .create();

    let market = MarketServiceImpl::new(Arc::new(test_client(&server.url())));
    let table = block_on(market.get_financial_statements(
        "AAPL",
        StatementKind::Income,
        ReportingPeriod::Annual,
    ))
    .expect("Financials failed");

    assert_eq!(table.len(), 1);
    assert!(table.columns().contains(&String::from("revenue")));
    mock.assert();
}

#[test]
fn test_market_indices_decode_list() {
    let mut server = Server::new();

    server
        .mock("GET", "/market/indices")
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(
            r#"{"success":true,"data":{"indices":[
                {"symbol":"^GSPC","name":"S&P 500","value":5630.5},
                {"symbol":"^IXIC","value":17890.1}
            ]}}"#,
        )
        .create();

    let market = MarketServiceImpl::new(Arc::new(test_client(&server.url())));
    let indices = block_on(market.get_market_indices()).expect("Indices failed");

    assert_eq!(indices.len(), 2);
    assert_eq!(indices[0].symbol, "^GSPC");
    // "value" is the platform's alias for the index level
    assert_eq!(indices[0].price, Some(5630.5));
}

#[test]
fn test_quick_portfolio_analysis_builds_equal_weights() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/analytics/portfolio")
        .match_body(Matcher::PartialJson(json!({
            "assets": [
                {"symbol": "AAPL", "weight": 0.5},
                {"symbol": "MSFT", "weight": 0.5},
            ],
        })))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(
            r#"{"success":true,"data":{"expectedReturn":0.094,"volatility":0.21,"sharpeRatio":1.31}}"#,
        )
        .create();

    let analytics = AnalyticsServiceImpl::new(Arc::new(test_client(&server.url())));
    let analysis =
        block_on(analytics.quick_portfolio_analysis(&["AAPL", "MSFT"])).expect("Analysis failed");

    assert_eq!(analysis.expected_return, Some(0.094));
    assert_eq!(analysis.sharpe_ratio, Some(1.31));
    mock.assert();
}

#[test]
fn test_calculate_risk_names_method() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/analytics/risk")
        .match_body(Matcher::PartialJson(json!({
            "method": "monte_carlo",
            "confidence_level": 0.95,
        })))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"success":true,"data":{"var":-0.082,"cvar":-0.117,"method":"monte_carlo"}}"#)
        .create();

    let analytics = AnalyticsServiceImpl::new(Arc::new(test_client(&server.url())));
    let portfolio = Portfolio::equal_weighted(&["AAPL", "MSFT"]);
    let report = block_on(analytics.calculate_risk(&portfolio, RiskMethod::MonteCarlo, 0.95))
        .expect("Risk failed");

    assert_eq!(report.value_at_risk, Some(-0.082));
    assert_eq!(report.expected_shortfall, Some(-0.117));
    mock.assert();
}

#[test]
fn test_validation_error_tags_operation() {
    let mut server = Server::new();

    server
        .mock("POST", "/analytics/portfolio")
        .with_status(400)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"error": "weights must sum to 1"}"#)
        .expect(1)
        .create();

    let analytics = AnalyticsServiceImpl::new(Arc::new(test_client(&server.url())));
    let portfolio = Portfolio::equal_weighted(&["AAPL"]);
    let err = block_on(analytics.analyze_portfolio(&portfolio)).unwrap_err();

    assert!(matches!(err, AppError::ValidationFailed(_)));
    assert_eq!(err.detail().operation.as_deref(), Some("analyze_portfolio"));
    assert!(err.to_string().contains("weights must sum to 1"));
}

#[test]
fn test_dcf_valuation_decodes() {
    let mut server = Server::new();

    server
        .mock("POST", "/models/dcf/calculate")
        .match_body(Matcher::PartialJson(json!({"symbol": "AAPL"})))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(
            r#"{"success":true,"data":{"symbol":"AAPL","intrinsicValue":2914000000000.0,"fairValuePerShare":195.3,"upsidePercent":2.9}}"#,
        )
        .create();

    let analytics = AnalyticsServiceImpl::new(Arc::new(test_client(&server.url())));
    let request = financeanalyst_client::application::models::analytics::DcfRequest::new("AAPL");
    let valuation = block_on(analytics.calculate_dcf(&request)).expect("DCF failed");

    assert_eq!(valuation.fair_value_per_share, Some(195.3));
    assert_eq!(valuation.upside_percent, Some(2.9));
}

#[test]
fn test_predict_metrics_sends_model() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/ai/predict")
        .match_body(Matcher::PartialJson(json!({
            "data": [104.2, 108.9, 112.4],
            "horizon": 6,
            "model": "auto",
        })))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(
            r#"{"success":true,"data":{"horizon":6,"model":"random_forest","predictions":[115.0,117.8]}}"#,
        )
        .create();

    let ai = AiServiceImpl::new(Arc::new(test_client(&server.url())));
    let forecast = block_on(ai.predict_metrics(
        &json!([104.2, 108.9, 112.4]),
        6,
        ForecastModel::Auto,
    ))
    .expect("Prediction failed");

    assert_eq!(forecast.horizon, Some(6));
    assert_eq!(forecast.model.as_deref(), Some("random_forest"));
    mock.assert();
}

#[test]
fn test_sentiment_posts_text_and_source() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/ai/sentiment")
        .match_body(Matcher::PartialJson(json!({
            "text": "Margins improved across all segments",
            "source": "earnings",
        })))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"success":true,"data":{"score":0.62,"label":"positive"}}"#)
        .create();

    let ai = AiServiceImpl::new(Arc::new(test_client(&server.url())));
    let score = block_on(ai.analyze_sentiment(
        "Margins improved across all segments",
        SentimentSource::Earnings,
    ))
    .expect("Sentiment failed");

    assert_eq!(score.score, Some(0.62));
    assert_eq!(score.label.as_deref(), Some("positive"));
    mock.assert();
}

#[test]
fn test_register_webhook_returns_id() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/webhooks/register")
        .match_body(Matcher::PartialJson(json!({
            "endpoint": "https://example.com/hook",
            "events": ["analysis.completed"],
        })))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"success":true,"data":{"webhook_id":"wh_42"}}"#)
        .create();

    let webhooks = WebhookServiceImpl::new(Arc::new(test_client(&server.url())));
    let registration = WebhookRegistration::new(
        "https://example.com/hook",
        vec![String::from("analysis.completed")],
    );
    let id = block_on(webhooks.register(&registration)).expect("Registration failed");

    assert_eq!(id, "wh_42");
    mock.assert();
}

#[test]
fn test_unregister_reports_confirmation() {
    let mut server = Server::new();

    let mock = server
        .mock("DELETE", "/webhooks/wh_42")
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"success":true}"#)
        .create();

    let webhooks = WebhookServiceImpl::new(Arc::new(test_client(&server.url())));
    let confirmed = block_on(webhooks.unregister("wh_42")).expect("Unregister failed");

    assert!(confirmed);
    mock.assert();
}

#[test]
fn test_list_webhooks_unwraps_collection() {
    let mut server = Server::new();

    server
        .mock("GET", "/webhooks")
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(
            r#"{"success":true,"data":{"webhooks":[
                {"id":"wh_1","endpoint":"https://example.com/a","events":["quote.updated"],"active":true}
            ]}}"#,
        )
        .create();

    let webhooks = WebhookServiceImpl::new(Arc::new(test_client(&server.url())));
    let listed = block_on(webhooks.list()).expect("List failed");

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, "wh_1");
    assert_eq!(listed[0].active, Some(true));
}

#[test]
fn test_connect_integration_decodes_status() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/integrations/quickbooks/connect")
        .match_body(Matcher::PartialJson(json!({"api_token": "qb-1"})))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"success":true,"data":{"status":"connected","connected":true}}"#)
        .create();

    let integrations = IntegrationServiceImpl::new(Arc::new(test_client(&server.url())));
    let status = block_on(integrations.connect("quickbooks", &json!({"api_token": "qb-1"})))
        .expect("Connect failed");

    // Provider omitted by the server, filled from the request
    assert_eq!(status.provider, "quickbooks");
    assert_eq!(status.connected, Some(true));
    mock.assert();
}

#[test]
fn test_fetch_proxies_query_params() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", "/integrations/quickbooks/invoices")
        .match_query(Matcher::UrlEncoded("limit".into(), "10".into()))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"invoices":[{"id":"inv-1","total":1200.0}]}"#)
        .create();

    let integrations = IntegrationServiceImpl::new(Arc::new(test_client(&server.url())));
    let params = vec![(String::from("limit"), String::from("10"))];
    let data = block_on(integrations.fetch("quickbooks", "invoices", Some(params)))
        .expect("Fetch failed");

    // Provider-shaped payloads come back untouched
    assert_eq!(data["invoices"][0]["id"], json!("inv-1"));
    mock.assert();
}

#[test]
fn test_add_comment_roundtrip() {
    let mut server = Server::new();

    server
        .mock("POST", "/comments")
        .match_body(Matcher::PartialJson(json!({
            "target_id": "analysis-9",
            "body": "check the WACC input",
        })))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(
            r#"{"success":true,"data":{"id":"c_7","target_id":"analysis-9","body":"check the WACC input"}}"#,
        )
        .create();

    let collaboration = CollaborationServiceImpl::new(Arc::new(test_client(&server.url())));
    let comment = NewComment::new("analysis-9", "check the WACC input");
    let stored = block_on(collaboration.add_comment(&comment)).expect("Comment failed");

    assert_eq!(stored.id, "c_7");
    assert_eq!(stored.target_id, "analysis-9");
}

#[test]
fn test_save_version_sends_label() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/versions/model-7")
        .match_body(Matcher::PartialJson(json!({
            "snapshot": {"cells": 1},
            "label": "v2",
        })))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(
            r#"{"success":true,"data":{"version_id":"v42","resource_id":"model-7","label":"v2"}}"#,
        )
        .create();

    let collaboration = CollaborationServiceImpl::new(Arc::new(test_client(&server.url())));
    let record =
        block_on(collaboration.save_version("model-7", &json!({"cells": 1}), Some("v2")))
            .expect("Save failed");

    assert_eq!(record.id, "v42");
    assert_eq!(record.label.as_deref(), Some("v2"));
    mock.assert();
}

#[test]
fn test_export_returns_job_handle() {
    let mut server = Server::new();

    server
        .mock("POST", "/export")
        .match_body(Matcher::PartialJson(json!({"format": "xlsx"})))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(
            r#"{"success":true,"data":{"export_id":"ex_1","status":"ready","download_url":"https://files.example.com/ex_1.xlsx"}}"#,
        )
        .create();

    let visualization = VisualizationServiceImpl::new(Arc::new(test_client(&server.url())));
    let request = ExportRequest::new(json!([{"metric": "revenue"}]), ExportFormat::Xlsx);
    let job = block_on(visualization.export(&request)).expect("Export failed");

    assert_eq!(job.id.as_deref(), Some("ex_1"));
    assert_eq!(job.status.as_deref(), Some("ready"));
    assert!(job.url.as_deref().unwrap_or_default().ends_with(".xlsx"));
}

#[test]
fn test_health_decodes_flat_payload() {
    let mut server = Server::new();

    server
        .mock("GET", "/health")
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"status":"healthy","services":{"market":"up"}}"#)
        .create();

    let platform = PlatformServiceImpl::new(Arc::new(test_client(&server.url())));
    let health = block_on(platform.health());

    assert!(health.is_healthy());
    assert!(health.services.is_some());
}

#[test]
fn test_health_never_fails() {
    // Nothing listens here, the check degrades instead of erroring
    let mut config = test_config("http://127.0.0.1:1");
    config.retry.max_retries = 1;
    let client = RestClient::new(config).expect("Failed to create client");
    let platform = PlatformServiceImpl::new(Arc::new(client));

    let health = block_on(platform.health());

    assert_eq!(health.status, "error");
    assert!(health.message.is_some());
    assert!(health.timestamp.is_some());
}

#[test]
fn test_usage_stats_accept_aliases() {
    let mut server = Server::new();

    server
        .mock("GET", "/usage/stats")
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"success":true,"data":{"requests":1200,"limit":10000,"period":"2026-08"}}"#)
        .create();

    let platform = PlatformServiceImpl::new(Arc::new(test_client(&server.url())));
    let stats = block_on(platform.usage_stats()).expect("Usage failed");

    assert_eq!(stats.requests_used, Some(1200));
    assert_eq!(stats.requests_limit, Some(10000));
    assert_eq!(stats.period.as_deref(), Some("2026-08"));
}

#[test]
fn test_facade_wires_services() {
    let mut server = Server::new();

    server
        .mock("GET", "/market/quote/MSFT")
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"symbol":"MSFT","price":412.5}"#)
        .create();

    let facade =
        FinanceAnalystClient::new(test_config(&server.url())).expect("Failed to build client");
    let quote = block_on(facade.market().get_quote("MSFT")).expect("Quote failed");

    assert_eq!(quote.symbol, "MSFT");
    assert_eq!(quote.price, 412.5);
}
