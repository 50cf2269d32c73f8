use axum::http::StatusCode;
use serde_json::json;

use trade_smoke::checks::CheckOutcome;

use super::run_against;
use crate::common::stub_server::{StubOptions, StubServer};

#[tokio::test]
async fn test_analytics_checks_pass() {
    let server = StubServer::start().await;

    for name in ["risk_assessment", "price_optimization", "trend_detection"] {
        let outcome = run_against(&server, name)
            .await
            .unwrap_or_else(|e| panic!("{} failed: {}", name, e));
        assert_eq!(outcome, CheckOutcome::Passed, "{}", name);
    }
}

#[tokio::test]
async fn test_price_optimization_sends_placeholder_token() {
    let server = StubServer::start().await;
    run_against(&server, "price_optimization").await.unwrap();

    assert_eq!(
        server.state.last_authorization("/api/price-optimization"),
        Some(Some("Bearer test-placeholder-jwt-token".to_string()))
    );
}

#[tokio::test]
async fn test_trend_detection_fails_on_empty_object() {
    let mut options = StubOptions::default();
    options
        .overrides
        .insert("/api/trend-detection", (StatusCode::OK, json!({})));
    let server = StubServer::start_with(options).await;

    let err = run_against(&server, "trend_detection").await.unwrap_err();
    assert!(err.to_string().contains("response JSON object is empty"));
}

#[tokio::test]
async fn test_risk_assessment_fails_on_list_body() {
    let mut options = StubOptions::default();
    options
        .overrides
        .insert("/api/risk-assessment", (StatusCode::OK, json!([1, 2, 3])));
    let server = StubServer::start_with(options).await;

    let err = run_against(&server, "risk_assessment").await.unwrap_err();
    assert!(err.to_string().contains("not an object"));
}
