//! Product catalogue checks
//!
//! The creation check is the only one that writes data. It always attempts to
//! delete what it created, and a failed delete is logged rather than failing
//! the check.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{info, warn};

use super::{authenticate, resolve_company_id, CheckContext, CheckOutcome, SmokeCheck};
use crate::constants::PRICE_EPSILON;
use crate::error::{ClientError, ClientResult};
use crate::types::ProductPayload;
use crate::validation::{
    expect_array_field, expect_json_body, expect_json_content_type, expect_status,
    expect_status_in, extract_created_id, json_matches_id, json_number_as_f64,
};

/// A created product shows up in the company's product list with every field intact
pub struct ProductCreationCheck;

impl ProductCreationCheck {
    /// Find the created product by its unique name and compare every field
    async fn verify_listed(
        ctx: &CheckContext,
        token: &str,
        payload: &ProductPayload,
    ) -> ClientResult<()> {
        let resp = ctx
            .client
            .list_products(Some(token), &payload.company_id)
            .await?;
        expect_status(&resp, StatusCode::OK)?;
        let body = expect_json_body(&resp)?;
        let products = expect_array_field(body, "products", &resp.context)?;

        let created = products
            .iter()
            .find(|p| {
                p.get("product_name").and_then(Value::as_str)
                    == Some(payload.product_name.as_str())
            })
            .ok_or_else(|| {
                ClientError::assertion(
                    &resp.context,
                    "created product not found in product list after creation",
                )
            })?;

        compare_product(created, payload)
    }

    async fn cleanup(ctx: &CheckContext, token: &str, product_id: &str) {
        match ctx.client.delete_product(Some(token), product_id).await {
            Ok(resp) => match expect_status_in(&resp, &[StatusCode::OK, StatusCode::NO_CONTENT]) {
                Ok(()) => info!(product_id = %product_id, "Deleted test product"),
                Err(e) => warn!(product_id = %product_id, error = %e, "Failed to delete test product"),
            },
            Err(e) => warn!(product_id = %product_id, error = %e, "Failed to delete test product"),
        }
    }
}

/// Compare a listed product against the payload that created it
pub fn compare_product(listed: &Value, payload: &ProductPayload) -> ClientResult<()> {
    let context = "listed product";

    let company_id = listed.get("company_id").unwrap_or(&Value::Null);
    if !json_matches_id(company_id, &payload.company_id) {
        return Err(ClientError::assertion(
            context,
            format!(
                "company_id mismatch: expected {}, got {}",
                payload.company_id, company_id
            ),
        ));
    }

    for (field, expected) in payload.text_fields() {
        let actual = listed.get(field).and_then(Value::as_str);
        if actual != Some(expected) {
            return Err(ClientError::assertion(
                context,
                format!("{} mismatch: expected {:?}, got {:?}", field, expected, actual),
            ));
        }
    }

    let price = listed
        .get("unit_price")
        .and_then(json_number_as_f64)
        .unwrap_or(0.0);
    if (price - payload.unit_price).abs() > PRICE_EPSILON {
        return Err(ClientError::assertion(
            context,
            format!(
                "unit_price mismatch: expected {}, got {}",
                payload.unit_price, price
            ),
        ));
    }

    Ok(())
}

#[async_trait]
impl SmokeCheck for ProductCreationCheck {
    fn name(&self) -> &'static str {
        "product_creation"
    }

    fn description(&self) -> &'static str {
        "POST /api/products with complete data persists every field; the product is deleted afterwards"
    }

    async fn run(&self, ctx: &CheckContext) -> ClientResult<CheckOutcome> {
        let session = authenticate(ctx).await?;
        let token = session.jwt.as_str();
        let company_id = resolve_company_id(ctx, Some(token), true).await?;

        let payload = ProductPayload::fixture(company_id);
        let resp = ctx.client.create_product(Some(token), &payload).await?;
        expect_status(&resp, StatusCode::OK)?;
        let product_id = extract_created_id(expect_json_body(&resp)?, "product");
        info!(
            product_id = ?product_id,
            product_name = %payload.product_name,
            "Created test product"
        );

        let verified = Self::verify_listed(ctx, token, &payload).await;

        match product_id {
            Some(id) => Self::cleanup(ctx, token, &id).await,
            None => warn!(
                product_name = %payload.product_name,
                "Create response carried no product id, test product left in place"
            ),
        }

        verified.map(|()| CheckOutcome::Passed)
    }
}

/// Products can be listed for a company resolved from the companies endpoint
pub struct ProductsByCompanyCheck;

#[async_trait]
impl SmokeCheck for ProductsByCompanyCheck {
    fn name(&self) -> &'static str {
        "products_by_company"
    }

    fn description(&self) -> &'static str {
        "GET /api/products?company_id= returns a JSON 'products' list"
    }

    async fn run(&self, ctx: &CheckContext) -> ClientResult<CheckOutcome> {
        let session = authenticate(ctx).await?;
        let token = Some(session.jwt.as_str());
        let company_id = resolve_company_id(ctx, token, false).await?;

        let resp = ctx.client.list_products(token, &company_id).await?;
        expect_status(&resp, StatusCode::OK)?;
        expect_json_content_type(&resp)?;
        let body = expect_json_body(&resp)?;
        let products = expect_array_field(body, "products", &resp.context)?;

        info!(company_id = %company_id, count = products.len(), "Listed products");
        Ok(CheckOutcome::Passed)
    }
}

/// Buyer matches can be listed for a company
pub struct ProductMatchingCheck;

#[async_trait]
impl SmokeCheck for ProductMatchingCheck {
    fn name(&self) -> &'static str {
        "product_matching"
    }

    fn description(&self) -> &'static str {
        "GET /api/product-matching?company_id= returns a 'matches' list"
    }

    async fn run(&self, ctx: &CheckContext) -> ClientResult<CheckOutcome> {
        let session = authenticate(ctx).await?;
        let token = Some(session.jwt.as_str());
        let company_id = resolve_company_id(ctx, token, false).await?;

        let resp = ctx.client.product_matches(token, &company_id).await?;
        expect_status(&resp, StatusCode::OK)?;
        let body = expect_json_body(&resp)?;
        let matches = expect_array_field(body, "matches", &resp.context)?;

        info!(company_id = %company_id, count = matches.len(), "Listed product matches");
        Ok(CheckOutcome::Passed)
    }
}
