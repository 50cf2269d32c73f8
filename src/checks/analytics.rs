//! Analytics endpoint checks
//!
//! These endpoints are called without a session: risk assessment and trend
//! detection anonymously, price optimization with the placeholder bearer token.

use async_trait::async_trait;
use tracing::info;

use super::{expect_ok_non_empty_object, CheckContext, CheckOutcome, SmokeCheck};
use crate::error::ClientResult;

pub struct RiskAssessmentCheck;

#[async_trait]
impl SmokeCheck for RiskAssessmentCheck {
    fn name(&self) -> &'static str {
        "risk_assessment"
    }

    fn description(&self) -> &'static str {
        "GET /api/risk-assessment returns a non-empty JSON object"
    }

    async fn run(&self, ctx: &CheckContext) -> ClientResult<CheckOutcome> {
        let resp = ctx.client.risk_assessment(None).await?;
        let body = expect_ok_non_empty_object(&resp)?;

        info!(keys = body.as_object().map_or(0, |o| o.len()), "Risk assessment retrieved");
        Ok(CheckOutcome::Passed)
    }
}

pub struct PriceOptimizationCheck;

#[async_trait]
impl SmokeCheck for PriceOptimizationCheck {
    fn name(&self) -> &'static str {
        "price_optimization"
    }

    fn description(&self) -> &'static str {
        "GET /api/price-optimization returns recommendation data"
    }

    async fn run(&self, ctx: &CheckContext) -> ClientResult<CheckOutcome> {
        let token = ctx.config.placeholder_token.as_str();
        let resp = ctx.client.price_optimization(Some(token)).await?;
        let body = expect_ok_non_empty_object(&resp)?;

        info!(keys = body.as_object().map_or(0, |o| o.len()), "Price optimization retrieved");
        Ok(CheckOutcome::Passed)
    }
}

pub struct TrendDetectionCheck;

#[async_trait]
impl SmokeCheck for TrendDetectionCheck {
    fn name(&self) -> &'static str {
        "trend_detection"
    }

    fn description(&self) -> &'static str {
        "GET /api/trend-detection returns market trend data"
    }

    async fn run(&self, ctx: &CheckContext) -> ClientResult<CheckOutcome> {
        let resp = ctx.client.trend_detection(None).await?;
        let body = expect_ok_non_empty_object(&resp)?;

        info!(keys = body.as_object().map_or(0, |o| o.len()), "Trend data retrieved");
        Ok(CheckOutcome::Passed)
    }
}
