//! # Smoke Checks
//!
//! Each check is a short, linear sequence of requests and assertions against
//! the running web application. Checks share no state with each other; the
//! only thing passed in is a [`CheckContext`] holding the client and config.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use trade_smoke::checks::{CheckContext, CheckRegistry};
//! use trade_smoke::SmokeConfig;
//!
//! # async fn example() -> trade_smoke::ClientResult<()> {
//! let ctx = CheckContext::new(SmokeConfig::default())?;
//! let registry = CheckRegistry::default();
//! let check = registry.get("risk_assessment").expect("registered");
//! check.run(&ctx).await?;
//! # Ok(())
//! # }
//! ```

pub mod analytics;
pub mod auth;
pub mod market;
pub mod predictions;
pub mod products;
pub mod registry;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;

use crate::api_clients::TradeApiClient;
use crate::config::SmokeConfig;
use crate::error::{ClientError, ClientResult};
use crate::types::{ApiResponse, AuthSession};
use crate::validation::{
    expect_json_body, expect_json_content_type, expect_non_empty_object, expect_non_empty_string,
    expect_object, expect_status, extract_company_id, extract_profile_company_id,
    json_id_to_string,
};

pub use registry::CheckRegistry;

/// Result of a check that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Passed,
    Skipped(String),
}

/// Everything a check needs to talk to the server
#[derive(Debug, Clone)]
pub struct CheckContext {
    pub client: TradeApiClient,
    pub config: SmokeConfig,
}

impl CheckContext {
    /// Build a context with a client for the configured base URL
    pub fn new(config: SmokeConfig) -> ClientResult<Self> {
        let client = TradeApiClient::new(&config)?;
        Ok(Self { client, config })
    }
}

/// A single smoke scenario
#[async_trait]
pub trait SmokeCheck: Send + Sync {
    /// Stable identifier used for selection and reporting
    fn name(&self) -> &'static str;

    /// One-line summary of what is verified
    fn description(&self) -> &'static str;

    /// Execute the scenario; any error fails the check
    async fn run(&self, ctx: &CheckContext) -> ClientResult<CheckOutcome>;
}

/// Obtain a JWT and user from the token endpoint
///
/// Requires `200`, a JSON content type, a non-empty string `jwt`, and a
/// `user` object carrying an `id`.
pub async fn authenticate(ctx: &CheckContext) -> ClientResult<AuthSession> {
    let resp = ctx.client.auth_token(None).await?;
    expect_status(&resp, StatusCode::OK)?;
    expect_json_content_type(&resp)?;
    let body = expect_json_body(&resp)?;
    expect_object(body, &resp.context)?;

    let jwt = expect_non_empty_string(body, "jwt", &resp.context)?.to_string();
    let user = body
        .get("user")
        .filter(|user| user.is_object())
        .cloned()
        .ok_or_else(|| {
            ClientError::assertion(&resp.context, "user info missing or invalid in response")
        })?;
    let user_id = user
        .get("id")
        .and_then(json_id_to_string)
        .ok_or_else(|| ClientError::invalid_response("user.id", "missing or not an id"))?;

    debug!(user_id = %user_id, "Authenticated");
    Ok(AuthSession { jwt, user, user_id })
}

/// Find a company id to scope product-level requests to
///
/// Uses the first company from `/api/companies`. With `profile_fallback`, an
/// empty company list falls back to the id on `/api/profile`.
pub async fn resolve_company_id(
    ctx: &CheckContext,
    token: Option<&str>,
    profile_fallback: bool,
) -> ClientResult<String> {
    let resp = ctx.client.list_companies(token).await?;
    expect_status(&resp, StatusCode::OK)?;
    expect_json_content_type(&resp)?;
    let body = expect_json_body(&resp)?;

    if let Some(company_id) = extract_company_id(body) {
        debug!(company_id = %company_id, "Resolved company from companies list");
        return Ok(company_id);
    }

    if profile_fallback {
        let resp = ctx.client.get_profile(token).await?;
        expect_status(&resp, StatusCode::OK)?;
        let body = expect_json_body(&resp)?;
        if let Some(company_id) = extract_profile_company_id(body) {
            debug!(company_id = %company_id, "Resolved company from profile");
            return Ok(company_id);
        }
    }

    Err(ClientError::MissingPrerequisite(
        "no company_id found from /api/companies".to_string(),
    ))
}

/// Require `200` and a non-empty JSON object, returning the body
pub(crate) fn expect_ok_non_empty_object(resp: &ApiResponse) -> ClientResult<&Value> {
    expect_status(resp, StatusCode::OK)?;
    let body = expect_json_body(resp)?;
    expect_non_empty_object(body, &resp.context)?;
    Ok(body)
}
