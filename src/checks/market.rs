//! Market intelligence checks: reports, target markets, buyers, campaigns, notifications

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::info;

use super::{
    authenticate, expect_ok_non_empty_object, resolve_company_id, CheckContext, CheckOutcome,
    SmokeCheck,
};
use crate::constants::defaults;
use crate::error::ClientResult;
use crate::validation::{
    expect_array_field, expect_json_body, expect_list_of_objects_or_non_empty_object,
    expect_status,
};

/// Market reports exist for the authenticated user's company
pub struct MarketReportsCheck;

#[async_trait]
impl SmokeCheck for MarketReportsCheck {
    fn name(&self) -> &'static str {
        "market_reports"
    }

    fn description(&self) -> &'static str {
        "GET /api/market-reports?company_id= returns a non-empty JSON object"
    }

    async fn run(&self, ctx: &CheckContext) -> ClientResult<CheckOutcome> {
        let session = authenticate(ctx).await?;

        let resp = ctx
            .client
            .market_reports(Some(&session.jwt), &session.user_id)
            .await?;
        let body = expect_ok_non_empty_object(&resp)?;

        let keys: Vec<&str> = body
            .as_object()
            .map(|o| o.keys().map(String::as_str).collect())
            .unwrap_or_default();
        info!(company_id = %session.user_id, keys = ?keys, "Market reports retrieved");
        Ok(CheckOutcome::Passed)
    }
}

/// Target markets are returned as a list of objects or a non-empty object
pub struct TargetMarketsCheck;

#[async_trait]
impl SmokeCheck for TargetMarketsCheck {
    fn name(&self) -> &'static str {
        "target_markets"
    }

    fn description(&self) -> &'static str {
        "GET /api/target-markets returns market entries"
    }

    async fn run(&self, ctx: &CheckContext) -> ClientResult<CheckOutcome> {
        let session = authenticate(ctx).await?;

        let resp = ctx.client.target_markets(Some(&session.jwt), None).await?;
        expect_status(&resp, StatusCode::OK)?;
        let body = expect_json_body(&resp)?;
        expect_list_of_objects_or_non_empty_object(body, &resp.context)?;

        info!("Target markets retrieved");
        Ok(CheckOutcome::Passed)
    }
}

/// Potential buyers can be listed for a company
pub struct PotentialBuyersCheck;

#[async_trait]
impl SmokeCheck for PotentialBuyersCheck {
    fn name(&self) -> &'static str {
        "potential_buyers"
    }

    fn description(&self) -> &'static str {
        "GET /api/potential-buyers?company_id= returns a 'buyers' list"
    }

    async fn run(&self, ctx: &CheckContext) -> ClientResult<CheckOutcome> {
        let session = authenticate(ctx).await?;
        let token = Some(session.jwt.as_str());
        let company_id = resolve_company_id(ctx, token, false).await?;

        let resp = ctx.client.potential_buyers(token, &company_id).await?;
        expect_status(&resp, StatusCode::OK)?;
        let body = expect_json_body(&resp)?;
        let buyers = expect_array_field(body, "buyers", &resp.context)?;

        info!(company_id = %company_id, count = buyers.len(), "Listed potential buyers");
        Ok(CheckOutcome::Passed)
    }
}

/// Export campaigns can be listed for a company
pub struct ExportCampaignsCheck;

#[async_trait]
impl SmokeCheck for ExportCampaignsCheck {
    fn name(&self) -> &'static str {
        "export_campaigns"
    }

    fn description(&self) -> &'static str {
        "GET /api/campaigns?company_id= returns a 'campaigns' list"
    }

    async fn run(&self, ctx: &CheckContext) -> ClientResult<CheckOutcome> {
        let session = authenticate(ctx).await?;
        let token = Some(session.jwt.as_str());
        let company_id = resolve_company_id(ctx, token, false).await?;

        let resp = ctx.client.campaigns(token, &company_id).await?;
        expect_status(&resp, StatusCode::OK)?;
        let body = expect_json_body(&resp)?;
        let campaigns = expect_array_field(body, "campaigns", &resp.context)?;

        info!(company_id = %company_id, count = campaigns.len(), "Listed campaigns");
        Ok(CheckOutcome::Passed)
    }
}

/// The notification feed answers with a paged object
pub struct NotificationsCheck;

#[async_trait]
impl SmokeCheck for NotificationsCheck {
    fn name(&self) -> &'static str {
        "notifications"
    }

    fn description(&self) -> &'static str {
        "GET /api/notifications?limit= returns a non-empty JSON object"
    }

    async fn run(&self, ctx: &CheckContext) -> ClientResult<CheckOutcome> {
        let session = authenticate(ctx).await?;

        let resp = ctx
            .client
            .notifications(Some(&session.jwt), defaults::NOTIFICATION_LIMIT)
            .await?;
        expect_ok_non_empty_object(&resp)?;

        info!("Notifications retrieved");
        Ok(CheckOutcome::Passed)
    }
}
